use alloc::vec::Vec;

use super::*;

/// Replays a fixed list of reel results, starting over once the list is exhausted.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedReelSource {
    symbols: Vec<Symbol>,
    cursor: usize,
}

impl ScriptedReelSource {
    pub fn new(rounds: impl IntoIterator<Item = Reels>) -> Self {
        let symbols = rounds
            .into_iter()
            .flat_map(|reels| reels.symbols())
            .collect();
        Self { symbols, cursor: 0 }
    }

    pub fn from_indices(rounds: &[[u8; REEL_COUNT]]) -> Result<Self> {
        let rounds = rounds
            .iter()
            .map(|&indices| Reels::from_indices(indices))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(rounds))
    }
}

impl ReelSource for ScriptedReelSource {
    /// An empty script always draws the first symbol.
    fn draw(&mut self) -> Symbol {
        if self.symbols.is_empty() {
            return Symbol::ALL[0];
        }
        let symbol = self.symbols[self.cursor % self.symbols.len()];
        self.cursor = self.cursor.wrapping_add(1);
        symbol
    }
}

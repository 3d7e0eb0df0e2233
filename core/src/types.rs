use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Coin balance and score type. Signed because a losing spin may leave the balance below zero until the game-over
/// check runs.
pub type Coins = i64;

/// Number of reels on the machine.
pub const REEL_COUNT: usize = 3;

/// Number of distinct symbols a reel can show.
pub const SYMBOL_COUNT: u8 = 6;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Bell,
    Cherry,
    Coin,
    Grape,
    Seven,
    Strawberry,
}

impl Symbol {
    /// All symbols in index order.
    pub const ALL: [Symbol; SYMBOL_COUNT as usize] = [
        Symbol::Bell,
        Symbol::Cherry,
        Symbol::Coin,
        Symbol::Grape,
        Symbol::Seven,
        Symbol::Strawberry,
    ];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(GameError::InvalidSymbol(index))
    }

    pub const fn name(self) -> &'static str {
        use Symbol::*;
        match self {
            Bell => "bell",
            Cherry => "cherry",
            Coin => "coin",
            Grape => "grape",
            Seven => "seven",
            Strawberry => "strawberry",
        }
    }
}

/// The symbols currently shown on the three reels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reels([Symbol; REEL_COUNT]);

impl Reels {
    pub const fn new(symbols: [Symbol; REEL_COUNT]) -> Self {
        Self(symbols)
    }

    pub fn from_indices(indices: [u8; REEL_COUNT]) -> Result<Self> {
        let [a, b, c] = indices;
        Ok(Self([
            Symbol::from_index(a)?,
            Symbol::from_index(b)?,
            Symbol::from_index(c)?,
        ]))
    }

    pub fn symbols(&self) -> [Symbol; REEL_COUNT] {
        self.0
    }

    pub fn indices(&self) -> [u8; REEL_COUNT] {
        self.0.map(Symbol::index)
    }

    /// A spin pays out only when every reel shows the same symbol.
    pub fn is_jackpot(&self) -> bool {
        let [a, b, c] = self.0;
        a == b && b == c
    }
}

impl Default for Reels {
    fn default() -> Self {
        Self([Symbol::Bell, Symbol::Cherry, Symbol::Coin])
    }
}

/// Stake placed on every spin. Also the amount lost on a losing spin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bet {
    Ten,
    Twenty,
}

impl Bet {
    pub const ALL: [Bet; 2] = [Bet::Ten, Bet::Twenty];

    pub const fn amount(self) -> Coins {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
        }
    }

    pub const fn from_amount(amount: Coins) -> Option<Self> {
        match amount {
            10 => Some(Self::Ten),
            20 => Some(Self::Twenty),
            _ => None,
        }
    }
}

impl Default for Bet {
    fn default() -> Self {
        Self::Ten
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_indices_follow_declaration_order() {
        for (i, symbol) in Symbol::ALL.iter().enumerate() {
            assert_eq!(usize::from(symbol.index()), i);
            assert_eq!(Symbol::from_index(i as u8), Ok(*symbol));
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(
            Symbol::from_index(SYMBOL_COUNT),
            Err(GameError::InvalidSymbol(SYMBOL_COUNT))
        );
        assert_eq!(
            Reels::from_indices([0, 7, 1]),
            Err(GameError::InvalidSymbol(7))
        );
    }

    #[test]
    fn jackpot_requires_all_three_reels() {
        assert!(Reels::from_indices([2, 2, 2]).unwrap().is_jackpot());
        assert!(!Reels::from_indices([2, 2, 3]).unwrap().is_jackpot());
        assert!(!Reels::from_indices([4, 2, 2]).unwrap().is_jackpot());
        assert!(!Reels::from_indices([1, 3, 5]).unwrap().is_jackpot());
    }

    #[test]
    fn bet_amounts_are_closed() {
        assert_eq!(Bet::from_amount(10), Some(Bet::Ten));
        assert_eq!(Bet::from_amount(20), Some(Bet::Twenty));
        assert_eq!(Bet::from_amount(15), None);
        assert_eq!(Bet::default().amount(), 10);
    }
}

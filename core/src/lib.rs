#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use effect::*;
pub use error::*;
pub use machine::*;
pub use ports::*;
pub use source::*;
pub use state::*;
pub use stats::*;
pub use types::*;

mod effect;
mod error;
mod machine;
mod ports;
mod source;
mod state;
mod stats;
mod types;

/// Balance every session (and every new game) starts with.
pub const STARTING_COINS: Coins = 100;

/// A winning spin pays the bet times this.
pub const PAYOUT_MULTIPLIER: Coins = 10;

/// Fixed key under which the high score is persisted.
pub const HIGH_SCORE_KEY: &str = "HighScore";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win { payout: Coins, new_high_score: bool },
    Loss { stake: Coins },
}

impl Outcome {
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win { .. })
    }

    /// Change applied to the balance.
    pub const fn coin_delta(self) -> Coins {
        match self {
            Self::Win { payout, .. } => payout,
            Self::Loss { stake } => -stake,
        }
    }
}

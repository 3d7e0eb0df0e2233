use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::Coins;

/// Sound cues the presentation layer knows how to play.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    Spin,
    Win,
    HighScore,
    Chips,
    GameOver,
    Reset,
    ReelRise,
    BackgroundMusic,
}

impl Sound {
    pub const fn name(self) -> &'static str {
        use Sound::*;
        match self {
            Spin => "spin",
            Win => "win",
            HighScore => "high-score",
            Chips => "chips",
            GameOver => "game-over",
            Reset => "reset",
            ReelRise => "reel-rise",
            BackgroundMusic => "background-music",
        }
    }
}

/// Side effect requested by a state transition, dispatched to the ports by the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Sound(Sound),
    Haptic,
    SaveHighScore(Coins),
}

/// Effects emitted by one operation, in the order they should be dispatched.
pub type Effects = SmallVec<[Effect; 6]>;

use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid symbol index {0}")]
    InvalidSymbol(u8),
    #[error("Game is over, no spins are accepted until reset")]
    GameOver,
    #[error("Reels must be spun before they can be evaluated")]
    NotSpun,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Failure reported by a high score store. The game never fails on these, it only logs them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("High score storage unavailable: {0}")]
    Unavailable(String),
    #[error("Stored high score is corrupt: {0}")]
    Corrupt(String),
}

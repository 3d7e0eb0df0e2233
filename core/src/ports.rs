use crate::*;

/// Where sounds and haptic feedback go. Calls are fire-and-forget.
pub trait PresentationPort {
    fn play(&mut self, sound: Sound);

    fn pulse(&mut self);

    /// Stops whatever is still playing, such as background music.
    fn stop(&mut self) {}
}

/// Storage for the single persisted high score.
pub trait PersistencePort {
    fn load_high_score(&self) -> core::result::Result<Coins, StoreError>;

    fn save_high_score(&mut self, high_score: Coins) -> core::result::Result<(), StoreError>;
}

impl<V: PresentationPort + ?Sized> PresentationPort for &mut V {
    fn play(&mut self, sound: Sound) {
        (**self).play(sound)
    }

    fn pulse(&mut self) {
        (**self).pulse()
    }

    fn stop(&mut self) {
        (**self).stop()
    }
}

/// Presenter that drops everything.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SilentPresenter;

impl PresentationPort for SilentPresenter {
    fn play(&mut self, _sound: Sound) {}

    fn pulse(&mut self) {}
}

/// High score kept in memory only. Loads as zero until something is saved.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    high_score: Option<Coins>,
}

impl MemoryStore {
    pub const fn new() -> Self {
        Self { high_score: None }
    }

    pub const fn with_high_score(high_score: Coins) -> Self {
        Self {
            high_score: Some(high_score),
        }
    }

    /// Last saved value, `None` if nothing was ever saved.
    pub fn saved(&self) -> Option<Coins> {
        self.high_score
    }
}

impl PersistencePort for MemoryStore {
    fn load_high_score(&self) -> core::result::Result<Coins, StoreError> {
        Ok(self.high_score.unwrap_or(0))
    }

    fn save_high_score(&mut self, high_score: Coins) -> core::result::Result<(), StoreError> {
        self.high_score = Some(high_score);
        Ok(())
    }
}

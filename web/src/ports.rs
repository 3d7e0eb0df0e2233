use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use slot_machine_core as slot;
use slot::{Coins, Sound, StoreError};
use web_sys::HtmlAudioElement;

use crate::utils::StorageKey;

const SOUND_DIR: &str = "sounds";
const HAPTIC_PULSE_MS: u32 = 50;

pub(crate) const fn sound_file(sound: Sound) -> &'static str {
    use Sound::*;
    match sound {
        Spin => "spin.wav",
        Win => "win.wav",
        HighScore => "high-score.wav",
        Chips => "casino-chips.wav",
        GameOver => "game-over.wav",
        Reset => "chimpup.wav",
        ReelRise => "riseup.wav",
        BackgroundMusic => "background-music.wav",
    }
}

/// Plays sounds through `<audio>` elements and vibrates where the browser supports it.
///
/// Only one sound plays at a time, a new cue interrupts the previous one.
#[derive(Debug, Default)]
pub(crate) struct WebPresenter {
    current: Option<HtmlAudioElement>,
}

impl slot::PresentationPort for WebPresenter {
    fn play(&mut self, sound: Sound) {
        self.stop();

        let src = format!("{}/{}", SOUND_DIR, sound_file(sound));
        let audio = match HtmlAudioElement::new_with_src(&src) {
            Ok(audio) => audio,
            Err(err) => {
                log::error!("failed to create audio for {}: {:?}", src, err);
                return;
            }
        };
        audio.set_loop(matches!(sound, Sound::BackgroundMusic));
        log::trace!("play {}", sound.name());
        if let Err(err) = audio.play() {
            log::warn!("could not play {}: {:?}", src, err);
        }
        self.current = Some(audio);
    }

    fn pulse(&mut self) {
        if !gloo::utils::window()
            .navigator()
            .vibrate_with_duration(HAPTIC_PULSE_MS)
        {
            log::trace!("vibration not available");
        }
    }

    fn stop(&mut self) {
        if let Some(audio) = self.current.take() {
            if let Err(err) = audio.pause() {
                log::warn!("could not stop audio: {:?}", err);
            }
        }
    }
}

/// The high score as stored in `LocalStorage`.
pub(crate) struct HighScore;

impl StorageKey for HighScore {
    const KEY: &'static str = slot::HIGH_SCORE_KEY;
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct LocalStorageStore;

impl slot::PersistencePort for LocalStorageStore {
    fn load_high_score(&self) -> Result<Coins, StoreError> {
        match LocalStorage::get::<Coins>(HighScore::KEY) {
            Ok(score) => Ok(score),
            Err(StorageError::KeyNotFound(_)) => Ok(0),
            Err(err) => Err(store_error(err)),
        }
    }

    fn save_high_score(&mut self, high_score: Coins) -> Result<(), StoreError> {
        LocalStorage::set(HighScore::KEY, high_score).map_err(store_error)
    }
}

fn store_error(err: StorageError) -> StoreError {
    match err {
        StorageError::SerdeError(err) => StoreError::Corrupt(err.to_string()),
        err => StoreError::Unavailable(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SOUNDS: [Sound; 8] = [
        Sound::Spin,
        Sound::Win,
        Sound::HighScore,
        Sound::Chips,
        Sound::GameOver,
        Sound::Reset,
        Sound::ReelRise,
        Sound::BackgroundMusic,
    ];

    #[test]
    fn every_sound_has_its_own_file() {
        for (i, a) in ALL_SOUNDS.iter().enumerate() {
            assert!(sound_file(*a).ends_with(".wav"));
            for b in &ALL_SOUNDS[i + 1..] {
                assert_ne!(sound_file(*a), sound_file(*b));
            }
        }
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn every_sound_file_ships_with_the_app() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(SOUND_DIR);
        for sound in ALL_SOUNDS {
            let path = dir.join(sound_file(sound));
            assert!(path.is_file(), "missing {}", path.display());
        }
    }

    #[test]
    fn high_score_uses_the_shared_key() {
        assert_eq!(<HighScore as StorageKey>::KEY, "HighScore");
    }
}

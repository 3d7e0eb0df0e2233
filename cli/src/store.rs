use serde::{Deserialize, Serialize};
use slot_machine_core::{Coins, PersistencePort, StoreError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    high_score: Coins,
}

/// High score kept in a small JSON file. A missing file counts as a zero score.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistencePort for JsonFileStore {
    fn load_high_score(&self) -> Result<Coins, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("no high score at {}", self.path.display());
                return Ok(0);
            }
            Err(err) => {
                return Err(StoreError::Unavailable(format!(
                    "{}: {}",
                    self.path.display(),
                    err
                )));
            }
        };

        serde_json::from_str::<StoreFile>(&text)
            .map(|file| file.high_score)
            .map_err(|err| StoreError::Corrupt(format!("{}: {}", self.path.display(), err)))
    }

    fn save_high_score(&mut self, high_score: Coins) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(&StoreFile { high_score })
            .map_err(|err| StoreError::Corrupt(err.to_string()))?;
        fs::write(&self.path, text)
            .map_err(|err| StoreError::Unavailable(format!("{}: {}", self.path.display(), err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn scratch_path(name: &str) -> PathBuf {
        let path = env::temp_dir().join(format!(
            "slot-machine-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn missing_file_loads_as_zero() {
        let store = JsonFileStore::new(scratch_path("missing"));

        assert_eq!(store.load_high_score(), Ok(0));
    }

    #[test]
    fn saved_score_loads_back() {
        let path = scratch_path("saved");
        let mut store = JsonFileStore::new(&path);

        store.save_high_score(370).unwrap();

        assert_eq!(JsonFileStore::new(&path).load_high_score(), Ok(370));
        assert!(fs::read_to_string(&path).unwrap().contains("\"high_score\": 370"));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn garbage_is_reported_as_corrupt() {
        let path = scratch_path("garbage");
        fs::write(&path, "not json").unwrap();

        let result = JsonFileStore::new(&path).load_high_score();

        assert!(matches!(result, Err(StoreError::Corrupt(_))));
        fs::remove_file(path).unwrap();
    }
}

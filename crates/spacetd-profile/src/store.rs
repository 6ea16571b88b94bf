//! JSON file persistence for the player profile.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use spacetd_core::outcome::{MissionOutcome, OutcomeSink};

use crate::profile::PlayerProfile;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to access profile file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse profile file {path}: {source}")]
    Serde {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A profile backed by a JSON file.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
    profile: PlayerProfile,
}

impl ProfileStore {
    /// Open the profile at `path`. A missing file yields a fresh profile.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ProfileError> {
        let path = path.into();
        let profile = load_from_file(&path)?;
        Ok(Self { path, profile })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn save(&self) -> Result<(), ProfileError> {
        save_to_file(&self.path, &self.profile)
    }
}

impl OutcomeSink for ProfileStore {
    type Error = ProfileError;

    /// Apply a won mission and persist the result. Losses are ignored.
    fn deliver(&mut self, outcome: &MissionOutcome) -> Result<(), ProfileError> {
        if !self.profile.apply(outcome) {
            debug!(level = outcome.level, result = ?outcome.result, "profile unchanged");
            return Ok(());
        }
        info!(
            highest_level = self.profile.highest_level,
            high_score = self.profile.high_score,
            "profile updated"
        );
        self.save()
    }
}

pub fn load_from_file(path: &Path) -> Result<PlayerProfile, ProfileError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(PlayerProfile::default()),
        Err(source) => {
            return Err(ProfileError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&json).map_err(|source| ProfileError::Serde {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_to_file(path: &Path, profile: &PlayerProfile) -> Result<(), ProfileError> {
    let io_err = |source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(profile).map_err(|source| ProfileError::Serde {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacetd_core::enums::MissionResult;

    fn won(level: u32, score: u64) -> MissionOutcome {
        MissionOutcome {
            level,
            score,
            result: MissionResult::Won,
        }
    }

    #[test]
    fn missing_file_opens_fresh_profile() {
        let dir = std::env::temp_dir().join("spacetd_test_profile_missing");
        let _ = fs::remove_dir_all(&dir);

        let store = ProfileStore::open(dir.join("profile.json")).unwrap();
        assert_eq!(*store.profile(), PlayerProfile::default());
    }

    #[test]
    fn save_and_load_file() {
        let dir = std::env::temp_dir().join("spacetd_test_profile_save_load");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("profile.json");

        let profile = PlayerProfile {
            highest_level: 4,
            high_score: 2500,
        };
        save_to_file(&path, &profile).unwrap();
        assert_eq!(load_from_file(&path).unwrap(), profile);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn delivered_win_is_persisted() {
        let dir = std::env::temp_dir().join("spacetd_test_profile_deliver");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("profile.json");

        let mut store = ProfileStore::open(&path).unwrap();
        store.deliver(&won(1, 640)).unwrap();

        let reopened = ProfileStore::open(&path).unwrap();
        assert_eq!(reopened.profile().highest_level, 2);
        assert_eq!(reopened.profile().high_score, 640);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn delivered_loss_writes_nothing() {
        let dir = std::env::temp_dir().join("spacetd_test_profile_loss");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("profile.json");

        let mut store = ProfileStore::open(&path).unwrap();
        store
            .deliver(&MissionOutcome {
                level: 3,
                score: 90,
                result: MissionResult::Lost,
            })
            .unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_is_a_serde_error() {
        let dir = std::env::temp_dir().join("spacetd_test_profile_corrupt");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("profile.json");
        fs::write(&path, "not json").unwrap();

        let err = ProfileStore::open(&path).unwrap_err();
        assert!(matches!(err, ProfileError::Serde { .. }));

        let _ = fs::remove_dir_all(&dir);
    }
}

//! JSON persistence for the dashboard state.
//!
//! The entire dashboard round-trips through one JSON document: a state
//! file under the platform data directory for save/load, and the same
//! shape written to or read from a user-picked path for export/import.
//! Parse failures are the system's only real error path and must leave
//! the in-memory state untouched, so reads parse fully before anything
//! is handed back to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use log::info;
use shared::DashboardState;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Owns the location of the saved state file.
pub struct JsonStore {
    state_path: PathBuf,
}

impl JsonStore {
    /// Store rooted at the platform data directory
    /// (e.g. `~/.local/share/finance-dashboard` on Linux).
    pub fn from_project_dirs() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "finance-dashboard")
            .ok_or_else(|| anyhow!("could not determine a platform data directory"))?;
        Ok(Self::new(dirs.data_dir()))
    }

    /// Store rooted at an explicit directory.
    pub fn new(dir: &Path) -> Self {
        Self {
            state_path: dir.join("state.json"),
        }
    }

    /// Load the saved state, if a state file exists.
    pub fn load(&self) -> Result<Option<DashboardState>, StorageError> {
        if !self.state_path.exists() {
            return Ok(None);
        }
        read_state(&self.state_path).map(Some)
    }

    /// Overwrite the saved state file.
    pub fn save(&self, state: &DashboardState) -> Result<(), StorageError> {
        if let Some(parent) = self.state_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        write_state(&self.state_path, state)?;
        info!("Saved dashboard state to {}", self.state_path.display());
        Ok(())
    }

    /// Remove the saved state file. Missing files are fine.
    pub fn delete(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.state_path) {
            Ok(()) => {
                info!("Deleted saved state {}", self.state_path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                path: self.state_path.clone(),
                source,
            }),
        }
    }
}

/// Read and parse a dashboard state document from `path` (import).
pub fn read_state(path: &Path) -> Result<DashboardState, StorageError> {
    let contents = fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a dashboard state document to `path`, pretty-printed (export).
pub fn write_state(path: &Path, state: &DashboardState) -> Result<(), StorageError> {
    // to_string_pretty on our own serde types cannot fail; map it anyway
    // rather than panic in a save path.
    let json = serde_json::to_string_pretty(state).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Default export filename, dated with the current day:
/// `finance_dashboard_2025-08-23.json`.
pub fn default_export_name() -> String {
    format!(
        "finance_dashboard_{}.json",
        chrono::Local::now().format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_returns_none_without_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("nested").as_path());

        let state = DashboardState::default();
        store.save(&state).unwrap();

        assert_eq!(store.load().unwrap(), Some(state));
    }

    #[test]
    fn test_malformed_state_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        fs::write(dir.path().join("state.json"), "{ not json").unwrap();

        match store.load() {
            Err(StorageError::Parse { .. }) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        store.save(&DashboardState::default()).unwrap();
        store.delete().unwrap();
        store.delete().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_export_name_is_dated_json() {
        let name = default_export_name();
        assert!(name.starts_with("finance_dashboard_"));
        assert!(name.ends_with(".json"));
    }
}

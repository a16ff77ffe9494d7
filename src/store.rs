// src/store.rs
//
// Session persistence for the rating state machine. The generated web
// page uses localStorage; the terminal front-end and tests go through
// this trait instead, so the machine itself never touches the disk.

use std::{collections::BTreeMap, error::Error, fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::consts::{SESSION_FILE, STORE_DIR};
use crate::file::ensure_directory;
use crate::rater::RatingLabel;

/// Persisted snapshot: where the user is plus everything rated so far.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(rename = "currentIndex")]
    pub current_index: usize,
    pub ratings: BTreeMap<String, RatingLabel>,
}

/// Key-value-store-shaped persistence seam, injectable for tests.
pub trait SessionStore {
    /// `Ok(None)` when nothing was ever saved.
    fn load(&self) -> Result<Option<SessionState>, Box<dyn Error>>;
    fn save(&mut self, state: &SessionState) -> Result<(), Box<dyn Error>>;
    fn clear(&mut self) -> Result<(), Box<dyn Error>>;
}

/// JSON file under `.store/`, mirroring the web page's localStorage keys
/// in one document.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The default session location: `.store/session.json`.
    pub fn default_location() -> Self {
        Self::new(PathBuf::from(STORE_DIR).join(SESSION_FILE))
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> Result<Option<SessionState>, Box<dyn Error>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        let state: SessionState = serde_json::from_str(&text)?;
        Ok(Some(state))
    }

    fn save(&mut self, state: &SessionState) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(state)?)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error>> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    state: Option<SessionState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded, as if a previous session had persisted `state`.
    pub fn with_state(state: SessionState) -> Self {
        Self { state: Some(state) }
    }

    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<SessionState>, Box<dyn Error>> {
        Ok(self.state.clone())
    }

    fn save(&mut self, state: &SessionState) -> Result<(), Box<dyn Error>> {
        self.state = Some(state.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error>> {
        self.state = None;
        Ok(())
    }
}

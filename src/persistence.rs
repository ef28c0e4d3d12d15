//! Progress persistence
//!
//! One typed snapshot of {current level, total coins, highest level}, written
//! whole on every coin pickup and level transition. Loads fall back to
//! defaults on absence or corruption; saves are fire-and-forget.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The persisted progress snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub current_level: u32,
    pub total_coins: u32,
    pub highest_level: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            current_level: 1,
            total_coins: 0,
            highest_level: 1,
        }
    }
}

impl Progress {
    /// Repair a loaded snapshot: levels are 1-based and the highest level can
    /// never trail the current one. A snapshot that fails the basic shape is
    /// replaced wholesale by defaults.
    fn sanitized(self) -> Self {
        if self.current_level == 0 {
            return Self::default();
        }
        Self {
            highest_level: self.highest_level.max(self.current_level),
            ..self
        }
    }
}

/// Storage for progress snapshots.
pub trait ProgressStore {
    /// Load the last snapshot, defaulting on absence or corruption.
    fn load(&self) -> Progress;
    /// Overwrite the snapshot. Failures are logged, never surfaced.
    fn save(&mut self, progress: &Progress);
}

/// JSON snapshot on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> Progress {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str::<Progress>(&json) {
                Ok(progress) => {
                    let progress = progress.sanitized();
                    log::info!(
                        "Loaded progress: level {}, {} coins",
                        progress.current_level,
                        progress.total_coins
                    );
                    progress
                }
                Err(e) => {
                    log::debug!("Corrupt progress file, using defaults: {e}");
                    Progress::default()
                }
            },
            Err(_) => Progress::default(),
        }
    }

    fn save(&mut self, progress: &Progress) {
        let json = match serde_json::to_string(progress) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize progress: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            log::warn!("Failed to write {}: {e}", self.path.display());
        }
    }
}

/// In-memory store for tests and the demo loop.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<Progress>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved snapshot, if any.
    pub fn last(&self) -> Option<Progress> {
        self.snapshot
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Progress {
        self.snapshot.map(Progress::sanitized).unwrap_or_default()
    }

    fn save(&mut self, progress: &Progress) {
        self.snapshot = Some(*progress);
    }
}

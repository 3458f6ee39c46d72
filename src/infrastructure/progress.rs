//! Progress marker stores
//!
//! The persisted record is a single saved-scene index serialized as JSON.
//! Both stores expose `&self` methods with interior mutability because the
//! progress marker is an ambient service shared by the controller and the
//! cinematic trigger.

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::UiError;
use crate::ports::ProgressStore;
use crate::types::SceneIndex;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ProgressRecord {
    saved_scene: Option<SceneIndex>,
}

/// Volatile store for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    record: RefCell<ProgressRecord>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_saved_scene(scene: SceneIndex) -> Self {
        Self {
            record: RefCell::new(ProgressRecord {
                saved_scene: Some(scene),
            }),
        }
    }
}

impl ProgressStore for MemoryProgressStore {
    fn saved_scene(&self) -> Option<SceneIndex> {
        self.record.borrow().saved_scene
    }

    fn record_scene(&self, scene: SceneIndex) {
        self.record.borrow_mut().saved_scene = Some(scene);
    }

    fn clear_all(&self) {
        *self.record.borrow_mut() = ProgressRecord::default();
    }
}

/// File-backed store serializing the record with JSON.
///
/// Writes are flushed on every mutation; a failed flush is logged and the
/// in-memory record keeps serving reads (detect, log, degrade, continue).
#[derive(Debug)]
pub struct JsonProgressStore {
    path: PathBuf,
    record: RefCell<ProgressRecord>,
}

impl JsonProgressStore {
    /// Open the store at `path`, loading the existing record if the file is
    /// present. A missing file is an empty record, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, UiError> {
        let path = path.into();
        let record = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|err| UiError::storage(format!("{}: {err}", path.display())))?,
            Err(err) if err.kind() == ErrorKind::NotFound => ProgressRecord::default(),
            Err(err) => {
                return Err(UiError::storage(format!("{}: {err}", path.display())));
            }
        };
        Ok(Self {
            path,
            record: RefCell::new(record),
        })
    }

    fn flush(&self) {
        let record = self.record.borrow();
        match serde_json::to_vec_pretty(&*record) {
            Ok(bytes) => {
                if let Err(err) = fs::write(&self.path, bytes) {
                    warn!("progress not persisted to {}: {err}", self.path.display());
                }
            }
            Err(err) => warn!("progress record not serializable: {err}"),
        }
    }
}

impl ProgressStore for JsonProgressStore {
    fn saved_scene(&self) -> Option<SceneIndex> {
        self.record.borrow().saved_scene
    }

    fn record_scene(&self, scene: SceneIndex) {
        self.record.borrow_mut().saved_scene = Some(scene);
        self.flush();
    }

    fn clear_all(&self) {
        *self.record.borrow_mut() = ProgressRecord::default();
        self.flush();
    }
}

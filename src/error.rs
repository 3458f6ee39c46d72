//! Error types for the screenflow library
//!
//! Failures here follow a detect-log-degrade policy: a missing UI binding
//! disables the affected feature, it never takes the host process down.

use thiserror::Error;

use crate::types::SceneIndex;

/// Errors surfaced by the controller, bus, and collaborator implementations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UiError {
    /// A required UI region or label could not be resolved
    #[error("ui binding '{identifier}' is missing")]
    MissingBinding { identifier: String },

    /// An event handler failed while processing a published event
    #[error("event handler failed: {reason}")]
    Handler { reason: String },

    /// The scene-loading collaborator failed
    #[error("scene {scene} failed to load: {reason}")]
    SceneLoad { scene: SceneIndex, reason: String },

    /// The progress store could not be read or written
    #[error("progress storage error: {reason}")]
    Storage { reason: String },
}

impl UiError {
    pub fn missing_binding(identifier: impl Into<String>) -> Self {
        Self::MissingBinding {
            identifier: identifier.into(),
        }
    }

    pub fn handler(reason: impl Into<String>) -> Self {
        Self::Handler {
            reason: reason.into(),
        }
    }

    pub fn scene_load(scene: SceneIndex, reason: impl Into<String>) -> Self {
        Self::SceneLoad {
            scene,
            reason: reason.into(),
        }
    }

    pub fn storage(reason: impl Into<String>) -> Self {
        Self::Storage {
            reason: reason.into(),
        }
    }
}

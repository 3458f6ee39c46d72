//! Core types for the screenflow library
//!
//! This module contains the fundamental types that form the public API:
//! - Event: game events delivered over the event bus
//! - Input: directional input samples
//! - Ui: identifiers for screen regions, labels, and selectable items

pub mod event;
pub mod input;
pub mod ui;

pub use event::{EventKind, GameEvent, QuestItem, SpeakerId, StoryAsset};
pub use input::Vec2;
pub use ui::{
    AudioCue, SceneIndex, SelectableItem, UiLabel, UiRegion, CONTINUE_BUTTON,
    FIRST_GAMEPLAY_SCENE, START_BUTTON,
};

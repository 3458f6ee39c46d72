//! Identifiers for UI-tree regions, labels, and selectable items

use std::fmt;

use serde::{Deserialize, Serialize};

/// Named screen-root regions the controller expects the host UI tree to
/// resolve by identifier. Absence of a region is tolerated per scene kind:
/// the menu region only exists in the menu scene, the player-info region
/// only in gameplay scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiRegion {
    MainMenu,
    PlayerInfo,
    DialoguePanel,
    QuestItemNotice,
    Victory,
    GameOver,
    QuestItemIcon,
}

impl UiRegion {
    /// Identifier the host resolves this region by.
    pub fn identifier(&self) -> &'static str {
        match self {
            UiRegion::MainMenu => "main-menu-container",
            UiRegion::PlayerInfo => "player-info-container",
            UiRegion::DialoguePanel => "dialogue-container",
            UiRegion::QuestItemNotice => "quest-item-container",
            UiRegion::Victory => "victory-container",
            UiRegion::GameOver => "game-over-container",
            UiRegion::QuestItemIcon => "quest-item-icon",
        }
    }
}

/// Named text labels the controller writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiLabel {
    Health,
    Potions,
    QuestItemName,
}

impl UiLabel {
    pub fn identifier(&self) -> &'static str {
        match self {
            UiLabel::Health => "health-label",
            UiLabel::Potions => "potions-label",
            UiLabel::QuestItemName => "quest-item-label",
        }
    }
}

/// A focusable menu button included in directional navigation.
///
/// Insertion order in the UI tree is visual/tab order. Ids are free-form so
/// hosts can add buttons the controller does not know about; confirming an
/// unrecognized id is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableItem {
    pub id: String,
    pub text: String,
}

impl SelectableItem {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Identifier of the design-time "new game" button.
pub const START_BUTTON: &str = "start-button";

/// Identifier of the synthesized "continue" button.
pub const CONTINUE_BUTTON: &str = "continue-button";

/// Build index of a loadable scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneIndex(pub u32);

impl fmt::Display for SceneIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scene the "start" button transitions to. Index 0 is the menu scene.
pub const FIRST_GAMEPLAY_SCENE: SceneIndex = SceneIndex(1);

/// End-of-run audio stingers played on screen entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Victory,
    GameOver,
}

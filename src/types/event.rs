//! Game events delivered over the event bus

use serde::{Deserialize, Serialize};

/// Handle to a dialogue script asset, resolved by the story collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoryAsset(String);

impl StoryAsset {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifies which character originated a dialogue request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpeakerId(String);

impl SpeakerId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A quest item the player can unlock, carrying its display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestItem {
    name: String,
}

impl QuestItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Cross-cutting game events, published once per logical occurrence and
/// delivered synchronously to current subscribers. No buffering, no replay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum GameEvent {
    /// Player health changed to the given value
    HealthChanged(f32),
    /// Player potion count changed to the given value
    PotionsChanged(i32),
    /// An NPC requested a dialogue with the given script
    DialogueRequested { story: StoryAsset, speaker: SpeakerId },
    /// A quest item was unlocked; `show_ui` asks for the transient notice
    QuestItemUnlocked { item: QuestItem, show_ui: bool },
    /// The run was won
    Victory,
    /// The run was lost
    GameOver,
    /// A cutscene started (`stopped == false`) or finished (`stopped == true`)
    CutsceneStateChanged { stopped: bool },
}

impl GameEvent {
    /// Kind tag used for subscription filtering on the bus.
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::HealthChanged(_) => EventKind::HealthChanged,
            GameEvent::PotionsChanged(_) => EventKind::PotionsChanged,
            GameEvent::DialogueRequested { .. } => EventKind::DialogueRequested,
            GameEvent::QuestItemUnlocked { .. } => EventKind::QuestItemUnlocked,
            GameEvent::Victory => EventKind::Victory,
            GameEvent::GameOver => EventKind::GameOver,
            GameEvent::CutsceneStateChanged { .. } => EventKind::CutsceneStateChanged,
        }
    }
}

/// Payload-free discriminant of [`GameEvent`], used as the subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    HealthChanged,
    PotionsChanged,
    DialogueRequested,
    QuestItemUnlocked,
    Victory,
    GameOver,
    CutsceneStateChanged,
}

/// Convenience constructor for the dialogue request event.
pub fn dialogue_requested(story: impl Into<String>, speaker: impl Into<String>) -> GameEvent {
    GameEvent::DialogueRequested {
        story: StoryAsset::new(story),
        speaker: SpeakerId::new(speaker),
    }
}

//! Console implementations of the collaborator ports

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::cinematic::Timeline;
use crate::error::UiError;
use crate::ports::{AudioSink, DialogueRunner, SceneLoader, UiTree};
use crate::types::{
    AudioCue, SceneIndex, SelectableItem, SpeakerId, StoryAsset, UiLabel, UiRegion, START_BUTTON,
};

/// Text stand-in for a UI document: named regions, labels, and a button row.
pub struct ConsoleTree {
    regions: HashSet<UiRegion>,
    label_bindings: HashSet<UiLabel>,
    labels: HashMap<UiLabel, String>,
    buttons: Vec<SelectableItem>,
    highlighted: HashSet<String>,
}

impl ConsoleTree {
    /// The menu scene binds only the main-menu root and its start button.
    pub fn menu_scene() -> Self {
        Self {
            regions: HashSet::from([UiRegion::MainMenu]),
            label_bindings: HashSet::new(),
            labels: HashMap::new(),
            buttons: vec![SelectableItem::new(START_BUTTON, "Start")],
            highlighted: HashSet::new(),
        }
    }

    /// Gameplay scenes bind the HUD, overlays, and stat labels; no menu root.
    pub fn gameplay_scene() -> Self {
        Self {
            regions: HashSet::from([
                UiRegion::PlayerInfo,
                UiRegion::DialoguePanel,
                UiRegion::QuestItemNotice,
                UiRegion::Victory,
                UiRegion::GameOver,
                UiRegion::QuestItemIcon,
            ]),
            label_bindings: HashSet::from([
                UiLabel::Health,
                UiLabel::Potions,
                UiLabel::QuestItemName,
            ]),
            labels: HashMap::new(),
            buttons: Vec::new(),
            highlighted: HashSet::new(),
        }
    }
}

impl UiTree for ConsoleTree {
    fn has_region(&self, region: UiRegion) -> bool {
        self.regions.contains(&region)
    }

    fn show_region(&mut self, region: UiRegion) -> Result<(), UiError> {
        if !self.regions.contains(&region) {
            return Err(UiError::missing_binding(region.identifier()));
        }
        println!("[ui] {} shown", region.identifier());
        Ok(())
    }

    fn set_label(&mut self, label: UiLabel, text: &str) -> Result<(), UiError> {
        if !self.label_bindings.contains(&label) {
            return Err(UiError::missing_binding(label.identifier()));
        }
        self.labels.insert(label, text.to_string());
        println!("[ui] {} = {text}", label.identifier());
        Ok(())
    }

    fn menu_buttons(&self) -> Vec<SelectableItem> {
        self.buttons.clone()
    }

    fn append_menu_button(&mut self, item: SelectableItem) {
        self.buttons.push(item);
    }

    fn set_highlight(&mut self, button_id: &str, highlighted: bool) {
        if highlighted {
            self.highlighted.insert(button_id.to_string());
            println!("[ui] > {button_id}");
        } else {
            self.highlighted.remove(button_id);
        }
    }
}

/// Prints dialogue instead of running an ink-style story.
pub struct ConsoleDialogue;

impl DialogueRunner for ConsoleDialogue {
    fn begin_story(&mut self, story: StoryAsset, speaker: SpeakerId) {
        println!(
            "[dialogue] {} starts story '{}'",
            speaker.as_str(),
            story.as_str()
        );
    }

    fn advance(&mut self) {
        println!("[dialogue] ...");
    }
}

/// Prints audio cues.
pub struct ConsoleAudio;

impl AudioSink for ConsoleAudio {
    fn play(&mut self, cue: AudioCue) {
        let clip = match cue {
            AudioCue::Victory => "victory-fanfare",
            AudioCue::GameOver => "game-over-sting",
        };
        println!("[audio] playing {clip}");
    }
}

/// Prints timeline playback for the cinematic trigger.
pub struct ConsoleTimeline;

impl Timeline for ConsoleTimeline {
    fn play(&mut self) {
        println!("[timeline] cutscene playing (finish it with 'cutend')");
    }
}

/// Simulated scene load: waits a moment, then hands the loaded index to the
/// host through a shared slot polled on the main thread.
pub struct ConsoleSceneLoader {
    loaded: Arc<Mutex<Option<SceneIndex>>>,
}

impl ConsoleSceneLoader {
    pub fn new(loaded: Arc<Mutex<Option<SceneIndex>>>) -> Self {
        Self { loaded }
    }
}

#[async_trait]
impl SceneLoader for ConsoleSceneLoader {
    async fn load(&self, scene: SceneIndex) -> Result<(), UiError> {
        tokio::time::sleep(Duration::from_millis(150)).await;
        println!();
        println!("[scene] scene {scene} loaded (press enter)");
        *self
            .loaded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(scene);
        Ok(())
    }
}

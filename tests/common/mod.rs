//! Shared fakes and wiring for the integration suites
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use screenflow::infrastructure::MemoryProgressStore;
use screenflow::ports::{AudioSink, DialogueRunner, SceneDirector, UiTree};
use screenflow::{
    AudioCue, EventBus, HostBindings, SceneIndex, SelectableItem, SpeakerId, StoryAsset,
    UiController, UiError, UiLabel, UiRegion, START_BUTTON,
};

/// Inspectable state behind the fake UI tree.
#[derive(Debug, Default)]
pub struct TreeState {
    pub regions: HashSet<UiRegion>,
    pub label_bindings: HashSet<UiLabel>,
    pub labels: HashMap<UiLabel, String>,
    pub buttons: Vec<SelectableItem>,
    pub visible: HashSet<UiRegion>,
    pub highlighted: HashSet<String>,
}

impl TreeState {
    /// Menu scene: main-menu root bound, given design-time buttons.
    pub fn menu_scene(buttons: Vec<SelectableItem>) -> Self {
        Self {
            regions: HashSet::from([UiRegion::MainMenu]),
            buttons,
            ..Self::default()
        }
    }

    /// Default menu scene with a single start button.
    pub fn default_menu_scene() -> Self {
        Self::menu_scene(vec![SelectableItem::new(START_BUTTON, "Start")])
    }

    /// Gameplay scene: HUD, overlays, and stat labels bound; no menu root.
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
            ..Self::default()
        }
    }
}

pub struct FakeTree {
    pub state: Rc<RefCell<TreeState>>,
}

impl UiTree for FakeTree {
    fn has_region(&self, region: UiRegion) -> bool {
        self.state.borrow().regions.contains(&region)
    }

    fn show_region(&mut self, region: UiRegion) -> Result<(), UiError> {
        let mut state = self.state.borrow_mut();
        if !state.regions.contains(&region) {
            return Err(UiError::missing_binding(region.identifier()));
        }
        state.visible.insert(region);
        Ok(())
    }

    fn set_label(&mut self, label: UiLabel, text: &str) -> Result<(), UiError> {
        let mut state = self.state.borrow_mut();
        if !state.label_bindings.contains(&label) {
            return Err(UiError::missing_binding(label.identifier()));
        }
        state.labels.insert(label, text.to_string());
        Ok(())
    }

    fn menu_buttons(&self) -> Vec<SelectableItem> {
        self.state.borrow().buttons.clone()
    }

    fn append_menu_button(&mut self, item: SelectableItem) {
        self.state.borrow_mut().buttons.push(item);
    }

    fn set_highlight(&mut self, button_id: &str, highlighted: bool) {
        let mut state = self.state.borrow_mut();
        if highlighted {
            state.highlighted.insert(button_id.to_string());
        } else {
            state.highlighted.remove(button_id);
        }
    }
}

/// Records transition requests instead of loading anything.
#[derive(Debug, Default)]
pub struct RecordingDirector {
    pub requests: RefCell<Vec<SceneIndex>>,
}

impl SceneDirector for RecordingDirector {
    fn request_transition(&self, scene: SceneIndex) {
        self.requests.borrow_mut().push(scene);
    }
}

#[derive(Debug, Default)]
pub struct DialogueLog {
    pub stories: Vec<(StoryAsset, SpeakerId)>,
    pub advances: u32,
}

pub struct RecordingDialogue {
    pub log: Rc<RefCell<DialogueLog>>,
}

impl DialogueRunner for RecordingDialogue {
    fn begin_story(&mut self, story: StoryAsset, speaker: SpeakerId) {
        self.log.borrow_mut().stories.push((story, speaker));
    }

    fn advance(&mut self) {
        self.log.borrow_mut().advances += 1;
    }
}

pub struct RecordingAudio {
    pub log: Rc<RefCell<Vec<AudioCue>>>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: AudioCue) {
        self.log.borrow_mut().push(cue);
    }
}

/// A fully wired controller with every collaborator observable from outside.
pub struct Harness {
    pub controller: Rc<RefCell<UiController>>,
    pub bus: EventBus,
    pub tree: Rc<RefCell<TreeState>>,
    pub progress: Rc<MemoryProgressStore>,
    pub director: Rc<RecordingDirector>,
    pub dialogue: Rc<RefCell<DialogueLog>>,
    pub audio: Rc<RefCell<Vec<AudioCue>>>,
}

pub fn harness(tree_state: TreeState, progress: MemoryProgressStore) -> Harness {
    let tree = Rc::new(RefCell::new(tree_state));
    let progress = Rc::new(progress);
    let director = Rc::new(RecordingDirector::default());
    let dialogue = Rc::new(RefCell::new(DialogueLog::default()));
    let audio = Rc::new(RefCell::new(Vec::new()));

    let controller = Rc::new(RefCell::new(UiController::new(HostBindings {
        tree: Box::new(FakeTree { state: tree.clone() }),
        progress: progress.clone(),
        director: director.clone(),
        dialogue: Box::new(RecordingDialogue {
            log: dialogue.clone(),
        }),
        audio: Some(Box::new(RecordingAudio { log: audio.clone() })),
    })));

    let mut bus = EventBus::new();
    UiController::activate(&controller, &mut bus);

    Harness {
        controller,
        bus,
        tree,
        progress,
        director,
        dialogue,
        audio,
    }
}

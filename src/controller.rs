//! UI controller - the orchestrator
//!
//! Owns the active screen, the selectable-item list and cursor, and the
//! event-to-transition mapping. Collaborators arrive through a bindings
//! bundle; there are no process-wide singletons.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, warn};

use crate::bus::{EventBus, EventHandler, SubscriptionId};
use crate::error::UiError;
use crate::nav;
use crate::ports::{AudioSink, DialogueRunner, ProgressStore, SceneDirector, UiTree};
use crate::screens::{Screen, ScreenContext, ScreenState};
use crate::types::{EventKind, GameEvent, SelectableItem, UiLabel, UiRegion, Vec2};

/// Event kinds the controller consumes. Cutscene state changes are published
/// for hosts that gate input; the controller itself does not react to them.
pub const CONSUMED_KINDS: [EventKind; 6] = [
    EventKind::HealthChanged,
    EventKind::PotionsChanged,
    EventKind::DialogueRequested,
    EventKind::QuestItemUnlocked,
    EventKind::Victory,
    EventKind::GameOver,
];

/// Ordered selectable items plus the highlight cursor.
///
/// Invariant: `cursor < items.len()` whenever the list is non-empty. The
/// cursor is frozen while the list is empty.
#[derive(Debug, Default)]
pub struct SelectionList {
    items: Vec<SelectableItem>,
    cursor: usize,
}

impl SelectionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the items and reset the cursor to the first one.
    pub fn rebuild(&mut self, items: Vec<SelectableItem>) {
        self.items = items;
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        if cursor < self.items.len() {
            self.cursor = cursor;
        }
    }

    /// The item under the cursor, if any.
    pub fn current(&self) -> Option<&SelectableItem> {
        self.items.get(self.cursor)
    }
}

/// Which mode startup resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMode {
    MainMenu,
    Gameplay,
}

/// Structural startup dispatch: presence of the main-menu root is the sole
/// signal that this is the menu scene; its absence means gameplay.
pub fn determine_initial_mode(main_menu_present: bool) -> StartMode {
    if main_menu_present {
        StartMode::MainMenu
    } else {
        StartMode::Gameplay
    }
}

/// Collaborators the controller is built from.
pub struct HostBindings {
    pub tree: Box<dyn UiTree>,
    pub progress: Rc<dyn ProgressStore>,
    pub director: Rc<dyn SceneDirector>,
    pub dialogue: Box<dyn DialogueRunner>,
    pub audio: Option<Box<dyn AudioSink>>,
}

/// The screen/menu orchestrator.
pub struct UiController {
    tree: Box<dyn UiTree>,
    progress: Rc<dyn ProgressStore>,
    director: Rc<dyn SceneDirector>,
    dialogue: Box<dyn DialogueRunner>,
    audio: Option<Box<dyn AudioSink>>,
    selection: SelectionList,
    current: Option<ScreenState>,
    subscriptions: Vec<SubscriptionId>,
}

impl UiController {
    pub fn new(bindings: HostBindings) -> Self {
        Self {
            tree: bindings.tree,
            progress: bindings.progress,
            director: bindings.director,
            dialogue: bindings.dialogue,
            audio: bindings.audio,
            selection: SelectionList::new(),
            current: None,
            subscriptions: Vec::new(),
        }
    }

    /// Decide the initial mode from which roots are bound and act on it:
    /// enter the main menu, or reveal the gameplay HUD.
    pub fn start(&mut self) -> StartMode {
        let mode = determine_initial_mode(self.tree.has_region(UiRegion::MainMenu));
        match mode {
            StartMode::MainMenu => self.enter_screen(ScreenState::main_menu()),
            StartMode::Gameplay => {
                if let Err(err) = self.tree.show_region(UiRegion::PlayerInfo) {
                    warn!("gameplay HUD unavailable: {err}");
                }
            }
        }
        mode
    }

    /// Subscribe the controller to every event kind it consumes. Pair with
    /// [`UiController::deactivate`]; an activated controller that is dropped
    /// without deactivating leaves dangling handlers on the bus.
    pub fn activate(controller: &Rc<RefCell<UiController>>, bus: &mut EventBus) {
        let ids: Vec<SubscriptionId> = CONSUMED_KINDS
            .iter()
            .map(|kind| {
                let handler: Rc<RefCell<dyn EventHandler>> = controller.clone();
                bus.subscribe(*kind, handler)
            })
            .collect();
        controller.borrow_mut().subscriptions.extend(ids);
    }

    /// Remove every subscription taken out by `activate`. After this call a
    /// publish has no observable effect on this controller.
    pub fn deactivate(&mut self, bus: &mut EventBus) {
        for id in self.subscriptions.drain(..) {
            bus.unsubscribe(id);
        }
    }

    /// Confirm action from the input surface.
    pub fn handle_confirm(&mut self) {
        let Some(mut screen) = self.current.take() else {
            warn!("confirm received with no active screen");
            return;
        };
        let mut ctx = ScreenContext {
            tree: self.tree.as_mut(),
            selection: &mut self.selection,
            progress: self.progress.as_ref(),
            director: self.director.as_ref(),
            dialogue: self.dialogue.as_mut(),
            audio: self.audio.as_deref_mut().map(|audio| -> &mut dyn AudioSink { audio }),
        };
        screen.confirm(&mut ctx);
        // A confirm may have requested a transition; the host tears the
        // screen graph down out of band, locally the screen stays current.
        self.current = Some(screen);
    }

    /// Directional input from the input surface. No-op while nothing is
    /// selectable.
    pub fn handle_direction(&mut self, input: Vec2) {
        if self.selection.is_empty() {
            return;
        }

        if let Some(item) = self.selection.current() {
            let id = item.id.clone();
            self.tree.set_highlight(&id, false);
        }

        let next = nav::navigate(self.selection.cursor(), self.selection.len(), input);
        self.selection.set_cursor(next);

        if let Some(item) = self.selection.current() {
            let id = item.id.clone();
            self.tree.set_highlight(&id, true);
        }
    }

    /// The active screen's tag, if any.
    pub fn active_screen(&self) -> Option<Screen> {
        self.current.as_ref().map(ScreenState::screen)
    }

    pub fn selection(&self) -> &SelectionList {
        &self.selection
    }

    fn enter_screen(&mut self, mut screen: ScreenState) {
        let mut ctx = ScreenContext {
            tree: self.tree.as_mut(),
            selection: &mut self.selection,
            progress: self.progress.as_ref(),
            director: self.director.as_ref(),
            dialogue: self.dialogue.as_mut(),
            audio: self.audio.as_deref_mut().map(|audio| -> &mut dyn AudioSink { audio }),
        };
        if let Err(err) = screen.enter(&mut ctx) {
            // Missing bindings disable the screen's visuals, not the host.
            error!("entering {:?} degraded: {err}", screen.screen());
        }
        self.current = Some(screen);
    }

    fn update_label(&mut self, label: UiLabel, text: &str) {
        if let Err(err) = self.tree.set_label(label, text) {
            warn!("label update skipped: {err}");
        }
    }
}

impl EventHandler for UiController {
    fn handle_event(&mut self, event: &GameEvent) -> Result<(), UiError> {
        debug!("ui event: {event:?}");
        match event {
            GameEvent::HealthChanged(points) => {
                self.update_label(UiLabel::Health, &points.to_string());
            }
            GameEvent::PotionsChanged(count) => {
                self.update_label(UiLabel::Potions, &count.to_string());
            }
            GameEvent::DialogueRequested { story, speaker } => {
                self.enter_screen(ScreenState::Dialogue);
                self.dialogue.begin_story(story.clone(), speaker.clone());
            }
            GameEvent::QuestItemUnlocked { item, show_ui } => {
                // The indicator icon is revealed unconditionally.
                if let Err(err) = self.tree.show_region(UiRegion::QuestItemIcon) {
                    warn!("quest item icon unavailable: {err}");
                }
                if *show_ui {
                    self.enter_screen(ScreenState::QuestItemNotice);
                    self.update_label(UiLabel::QuestItemName, item.name());
                }
            }
            GameEvent::Victory => self.enter_screen(ScreenState::Victory),
            GameEvent::GameOver => self.enter_screen(ScreenState::GameOver),
            GameEvent::CutsceneStateChanged { .. } => {}
        }
        Ok(())
    }
}

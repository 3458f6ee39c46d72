//! Screen states
//!
//! One mutually-exclusive UI mode per variant. Entering a state shows only
//! what that state owns; the controller guarantees exclusivity by holding a
//! single current variant, never a live list of states.

use log::{debug, warn};

use crate::controller::SelectionList;
use crate::error::UiError;
use crate::ports::{AudioSink, DialogueRunner, ProgressStore, SceneDirector, UiTree};
use crate::types::{
    AudioCue, SceneIndex, SelectableItem, UiRegion, CONTINUE_BUTTON, FIRST_GAMEPLAY_SCENE,
    START_BUTTON,
};

/// Everything a screen may touch while entering or confirming. Borrowed from
/// the controller for the duration of one call.
pub struct ScreenContext<'a> {
    pub tree: &'a mut dyn UiTree,
    pub selection: &'a mut SelectionList,
    pub progress: &'a dyn ProgressStore,
    pub director: &'a dyn SceneDirector,
    pub dialogue: &'a mut dyn DialogueRunner,
    pub audio: Option<&'a mut dyn AudioSink>,
}

/// Payload-free tag naming a screen, for inspection and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Dialogue,
    QuestItemNotice,
    Victory,
    GameOver,
}

/// The active screen and its per-screen data.
#[derive(Debug)]
pub enum ScreenState {
    MainMenu(MainMenuScreen),
    Dialogue,
    QuestItemNotice,
    Victory,
    GameOver,
}

impl ScreenState {
    pub fn main_menu() -> Self {
        ScreenState::MainMenu(MainMenuScreen::default())
    }

    pub fn screen(&self) -> Screen {
        match self {
            ScreenState::MainMenu(_) => Screen::MainMenu,
            ScreenState::Dialogue => Screen::Dialogue,
            ScreenState::QuestItemNotice => Screen::QuestItemNotice,
            ScreenState::Victory => Screen::Victory,
            ScreenState::GameOver => Screen::GameOver,
        }
    }

    /// Make this screen visible and set up whatever it owns.
    pub fn enter(&mut self, ctx: &mut ScreenContext<'_>) -> Result<(), UiError> {
        match self {
            ScreenState::MainMenu(menu) => menu.enter(ctx),
            ScreenState::Dialogue => ctx.tree.show_region(UiRegion::DialoguePanel),
            ScreenState::QuestItemNotice => ctx.tree.show_region(UiRegion::QuestItemNotice),
            ScreenState::Victory => {
                ctx.tree.show_region(UiRegion::Victory)?;
                if let Some(audio) = ctx.audio.as_mut() {
                    audio.play(AudioCue::Victory);
                }
                Ok(())
            }
            ScreenState::GameOver => {
                ctx.tree.show_region(UiRegion::GameOver)?;
                if let Some(audio) = ctx.audio.as_mut() {
                    audio.play(AudioCue::GameOver);
                }
                Ok(())
            }
        }
    }

    /// Interpret a confirm action while this screen is active.
    pub fn confirm(&mut self, ctx: &mut ScreenContext<'_>) {
        match self {
            ScreenState::MainMenu(menu) => menu.confirm(ctx),
            ScreenState::Dialogue => ctx.dialogue.advance(),
            other => debug!("confirm ignored on {:?} screen", other.screen()),
        }
    }
}

/// Main menu data: remembers the saved scene backing the synthesized
/// "continue" button between enter and confirm.
#[derive(Debug, Default)]
pub struct MainMenuScreen {
    continue_scene: Option<SceneIndex>,
}

impl MainMenuScreen {
    fn enter(&mut self, ctx: &mut ScreenContext<'_>) -> Result<(), UiError> {
        self.continue_scene = ctx.progress.saved_scene();
        if self.continue_scene.is_some() {
            ctx.tree
                .append_menu_button(SelectableItem::new(CONTINUE_BUTTON, "Continue"));
        }

        ctx.tree.show_region(UiRegion::MainMenu)?;

        // Rebuild resets the cursor to 0; the first button gets the highlight.
        let buttons = ctx.tree.menu_buttons();
        ctx.selection.rebuild(buttons);
        if let Some(first) = ctx.selection.current() {
            let id = first.id.clone();
            ctx.tree.set_highlight(&id, true);
        }
        Ok(())
    }

    fn confirm(&mut self, ctx: &mut ScreenContext<'_>) {
        let Some(selected) = ctx.selection.current().cloned() else {
            debug!("menu confirm with no selectable items");
            return;
        };

        match selected.id.as_str() {
            START_BUTTON => {
                ctx.progress.clear_all();
                ctx.director.request_transition(FIRST_GAMEPLAY_SCENE);
            }
            CONTINUE_BUTTON => match self.continue_scene {
                Some(scene) => ctx.director.request_transition(scene),
                None => warn!("continue confirmed without a saved scene"),
            },
            // Forward compatible: buttons the controller does not know
            // about do nothing rather than fail.
            other => debug!("unhandled menu button '{other}'"),
        }
    }
}

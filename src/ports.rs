//! Collaborator traits - the boundary between the screen core and the host
//!
//! The core never touches pixels or devices. Everything it needs from the
//! outside world comes through these traits, injected at construction so
//! tests can substitute fakes.

use async_trait::async_trait;

use crate::error::UiError;
use crate::types::{AudioCue, SceneIndex, SelectableItem, SpeakerId, StoryAsset, UiLabel, UiRegion};

/// Persistent progress marker: "a saved scene exists" plus its index.
///
/// Methods take `&self`; the store is an ambient shared service (the
/// controller and the cinematic trigger both read it), so implementations
/// use interior mutability.
pub trait ProgressStore {
    /// The saved scene index, if a resumable save exists.
    fn saved_scene(&self) -> Option<SceneIndex>;

    fn has_saved_progress(&self) -> bool {
        self.saved_scene().is_some()
    }

    /// Record the scene the player is in. Called by the host on transition,
    /// never by the screen core.
    fn record_scene(&self, scene: SceneIndex);

    /// Forget everything. The "new game" action.
    fn clear_all(&self);
}

/// Fire-and-forget scene transition. Requesting a transition returns
/// immediately; the load happens out of band and the whole screen graph may
/// be torn down before it completes, so callers must not rely on their own
/// state remaining valid afterwards.
pub trait SceneDirector {
    fn request_transition(&self, scene: SceneIndex);
}

/// The asynchronous load a [`SceneDirector`] drives. A second request before
/// the first completes cancels it: last request wins.
#[async_trait]
pub trait SceneLoader: Send + Sync {
    async fn load(&self, scene: SceneIndex) -> Result<(), UiError>;
}

/// Dialogue-script engine. Its internal state machine is out of scope; the
/// core only hands it a story and pokes it forward on confirm.
pub trait DialogueRunner {
    fn begin_story(&mut self, story: StoryAsset, speaker: SpeakerId);

    /// Confirm pressed while the dialogue screen is active.
    fn advance(&mut self);
}

/// Plays end-of-run stingers. Optional; screens enter fine without one.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// The host's UI tree, addressed by named regions and labels.
///
/// Showing a region never hides siblings; mutual exclusion of screens is the
/// controller's job, enforced by its single active-screen reference.
pub trait UiTree {
    /// Whether the named region is bound in this scene's tree.
    fn has_region(&self, region: UiRegion) -> bool;

    fn show_region(&mut self, region: UiRegion) -> Result<(), UiError>;

    fn set_label(&mut self, label: UiLabel, text: &str) -> Result<(), UiError>;

    /// All buttons tagged with the menu-button class, in visual order.
    fn menu_buttons(&self) -> Vec<SelectableItem>;

    /// Append a synthesized button after the design-time ones.
    fn append_menu_button(&mut self, item: SelectableItem);

    fn set_highlight(&mut self, button_id: &str, highlighted: bool);
}

//! # screenflow
//!
//! Screen/menu state machine for interactive applications: which screen is
//! active, how directional input moves the selection cursor, and how
//! cross-cutting game events (health change, dialogue start, item pickup,
//! victory, defeat) force a screen transition.
//!
//! The core never touches pixels or input devices. Hosts implement the
//! collaborator traits in [`ports`] (UI tree, progress store, scene
//! transition, dialogue engine, audio) and wire a [`UiController`] to an
//! [`EventBus`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use screenflow::{EventBus, EventHandler, EventKind, GameEvent, UiError};
//!
//! struct HealthReadout(f32);
//!
//! impl EventHandler for HealthReadout {
//!     fn handle_event(&mut self, event: &GameEvent) -> Result<(), UiError> {
//!         if let GameEvent::HealthChanged(points) = event {
//!             self.0 = *points;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut bus = EventBus::new();
//! let readout = Rc::new(RefCell::new(HealthReadout(100.0)));
//! let id = bus.subscribe(EventKind::HealthChanged, readout.clone());
//!
//! bus.publish(&GameEvent::HealthChanged(72.5));
//! assert_eq!(readout.borrow().0, 72.5);
//!
//! // Paired unsubscribe: after this, publishes no longer reach the readout.
//! bus.unsubscribe(id);
//! ```

pub mod bus;
pub mod cinematic;
pub mod cli;
pub mod controller;
pub mod error;
pub mod infrastructure;
pub mod nav;
pub mod ports;
pub mod screens;
pub mod types;

pub use bus::{EventBus, EventHandler, SubscriptionId};
pub use cinematic::{CinematicTrigger, Timeline, PLAYER_TAG};
pub use controller::{
    determine_initial_mode, HostBindings, SelectionList, StartMode, UiController,
};
pub use error::UiError;
pub use nav::navigate;
pub use screens::{Screen, ScreenState};
pub use types::{
    AudioCue, EventKind, GameEvent, QuestItem, SceneIndex, SelectableItem, SpeakerId, StoryAsset,
    UiLabel, UiRegion, Vec2, CONTINUE_BUTTON, FIRST_GAMEPLAY_SCENE, START_BUTTON,
};

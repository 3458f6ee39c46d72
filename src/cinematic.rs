//! Cinematic trigger - boundary collaborator
//!
//! Starts a pre-authored timeline when the player walks into its zone (or
//! immediately, if configured) and publishes cutscene state changes onto the
//! bus. The timeline itself lives behind a trait; only the gating and event
//! contract are modeled here.

use std::rc::Rc;

use log::debug;

use crate::bus::EventBus;
use crate::ports::ProgressStore;
use crate::types::GameEvent;

/// Tag carried by the player object; anything else entering the zone is
/// ignored.
pub const PLAYER_TAG: &str = "Player";

/// Pre-authored cutscene timeline playback, owned by the host engine.
pub trait Timeline {
    fn play(&mut self);
}

/// Zone trigger that plays a timeline once and reports its state.
pub struct CinematicTrigger {
    timeline: Box<dyn Timeline>,
    progress: Rc<dyn ProgressStore>,
    play_on_activate: bool,
    gate_enabled: bool,
}

impl CinematicTrigger {
    pub fn new(
        timeline: Box<dyn Timeline>,
        progress: Rc<dyn ProgressStore>,
        play_on_activate: bool,
    ) -> Self {
        Self {
            timeline,
            progress,
            play_on_activate,
            gate_enabled: false,
        }
    }

    /// First activation. A saved-progress marker means the player already
    /// passed the intro cutscenes, so the entry gate stays disabled.
    pub fn activate(&mut self, bus: &EventBus) {
        self.gate_enabled = !self.progress.has_saved_progress();

        if !self.play_on_activate {
            return;
        }
        self.gate_enabled = false;
        self.start_playback(bus);
    }

    /// A tagged object entered the trigger zone.
    pub fn object_entered(&mut self, tag: &str, bus: &EventBus) {
        if tag != PLAYER_TAG || !self.gate_enabled {
            debug!("trigger ignored entry of '{tag}' (gate_enabled={})", self.gate_enabled);
            return;
        }
        self.gate_enabled = false;
        self.start_playback(bus);
    }

    /// Host callback once the timeline finished.
    pub fn timeline_stopped(&mut self, bus: &EventBus) {
        bus.publish(&GameEvent::CutsceneStateChanged { stopped: true });
    }

    /// Whether the entry gate would currently react to the player.
    pub fn gate_enabled(&self) -> bool {
        self.gate_enabled
    }

    fn start_playback(&mut self, bus: &EventBus) {
        self.timeline.play();
        bus.publish(&GameEvent::CutsceneStateChanged { stopped: false });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::bus::EventHandler;
    use crate::error::UiError;
    use crate::infrastructure::MemoryProgressStore;
    use crate::types::{EventKind, SceneIndex};

    struct CountingTimeline(Rc<RefCell<u32>>);

    impl Timeline for CountingTimeline {
        fn play(&mut self) {
            *self.0.borrow_mut() += 1;
        }
    }

    struct CutsceneRecorder(Vec<bool>);

    impl EventHandler for CutsceneRecorder {
        fn handle_event(&mut self, event: &GameEvent) -> Result<(), UiError> {
            if let GameEvent::CutsceneStateChanged { stopped } = event {
                self.0.push(*stopped);
            }
            Ok(())
        }
    }

    fn wired() -> (
        CinematicTrigger,
        EventBus,
        Rc<RefCell<u32>>,
        Rc<RefCell<CutsceneRecorder>>,
        Rc<MemoryProgressStore>,
    ) {
        let plays = Rc::new(RefCell::new(0));
        let progress = Rc::new(MemoryProgressStore::new());
        let trigger = CinematicTrigger::new(
            Box::new(CountingTimeline(plays.clone())),
            progress.clone(),
            false,
        );
        let mut bus = EventBus::new();
        let recorder = Rc::new(RefCell::new(CutsceneRecorder(Vec::new())));
        bus.subscribe(EventKind::CutsceneStateChanged, recorder.clone());
        (trigger, bus, plays, recorder, progress)
    }

    #[test]
    fn gate_disabled_when_progress_exists() {
        let (mut trigger, bus, plays, _recorder, progress) = wired();
        progress.record_scene(SceneIndex(3));

        trigger.activate(&bus);
        assert!(!trigger.gate_enabled());

        trigger.object_entered(PLAYER_TAG, &bus);
        assert_eq!(*plays.borrow(), 0);
    }

    #[test]
    fn player_entry_plays_once_and_publishes() {
        let (mut trigger, bus, plays, recorder, _progress) = wired();

        trigger.activate(&bus);
        assert!(trigger.gate_enabled());

        trigger.object_entered("Crate", &bus);
        assert_eq!(*plays.borrow(), 0);

        trigger.object_entered(PLAYER_TAG, &bus);
        assert_eq!(*plays.borrow(), 1);
        assert_eq!(recorder.borrow().0, vec![false]);

        // Gate closed after the first entry.
        trigger.object_entered(PLAYER_TAG, &bus);
        assert_eq!(*plays.borrow(), 1);
    }

    #[test]
    fn play_on_activate_skips_the_gate() {
        let plays = Rc::new(RefCell::new(0));
        let progress: Rc<MemoryProgressStore> = Rc::new(MemoryProgressStore::new());
        let mut trigger = CinematicTrigger::new(
            Box::new(CountingTimeline(plays.clone())),
            progress,
            true,
        );
        let bus = EventBus::new();

        trigger.activate(&bus);
        assert!(!trigger.gate_enabled());
        assert_eq!(*plays.borrow(), 1);
    }

    #[test]
    fn stop_publishes_stopped_event() {
        let (mut trigger, bus, _plays, recorder, _progress) = wired();
        trigger.activate(&bus);
        trigger.object_entered(PLAYER_TAG, &bus);
        trigger.timeline_stopped(&bus);
        assert_eq!(recorder.borrow().0, vec![false, true]);
    }
}

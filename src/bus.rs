//! Typed publish/subscribe channel for game events
//!
//! Replaces a static add/remove handler pattern with an explicit service
//! instance: components receive the bus, subscribe on activation, and must
//! unsubscribe on deactivation so a disposed component is never invoked.
//! Delivery is synchronous within `publish` and follows subscription order.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;

use crate::error::UiError;
use crate::types::{EventKind, GameEvent};

/// A component that consumes published game events.
pub trait EventHandler {
    fn handle_event(&mut self, event: &GameEvent) -> Result<(), UiError>;
}

/// Token returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    kind: EventKind,
    handler: Rc<RefCell<dyn EventHandler>>,
}

/// Process-wide event channel. No queuing, no replay to late subscribers;
/// events are ephemeral.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one event kind. The same handler may be
    /// registered for several kinds; each registration gets its own id.
    pub fn subscribe(
        &mut self,
        kind: EventKind,
        handler: Rc<RefCell<dyn EventHandler>>,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, kind, handler });
        id
    }

    /// Remove a subscription. Idempotent: unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.retain(|sub| sub.id != id);
    }

    /// Number of live subscriptions for a kind.
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscriptions
            .iter()
            .filter(|sub| sub.kind == kind)
            .count()
    }

    /// Deliver `event` to every current subscriber of its kind, in
    /// subscription order. A failing handler is logged and skipped; the
    /// remaining handlers still run. Completes before returning.
    pub fn publish(&self, event: &GameEvent) {
        let kind = event.kind();
        for sub in self.subscriptions.iter().filter(|sub| sub.kind == kind) {
            match sub.handler.try_borrow_mut() {
                Ok(mut handler) => {
                    if let Err(err) = handler.handle_event(event) {
                        warn!("handler {:?} failed on {kind:?}: {err}", sub.id);
                    }
                }
                Err(_) => {
                    // Handler is already borrowed, i.e. it published from
                    // inside its own handling. Skip rather than panic.
                    warn!("handler {:?} busy during {kind:?}, skipped", sub.id);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        seen: Vec<GameEvent>,
        fail: bool,
    }

    impl Recorder {
        fn new() -> Rc<RefCell<Self>> {
            Rc::new(RefCell::new(Self {
                seen: Vec::new(),
                fail: false,
            }))
        }

        fn failing() -> Rc<RefCell<Self>> {
            Rc::new(RefCell::new(Self {
                seen: Vec::new(),
                fail: true,
            }))
        }
    }

    impl EventHandler for Recorder {
        fn handle_event(&mut self, event: &GameEvent) -> Result<(), UiError> {
            self.seen.push(event.clone());
            if self.fail {
                return Err(UiError::handler("recorder configured to fail"));
            }
            Ok(())
        }
    }

    #[test]
    fn delivers_in_subscription_order() {
        let mut bus = EventBus::new();
        let first = Recorder::new();
        let second = Recorder::new();
        bus.subscribe(EventKind::Victory, first.clone());
        bus.subscribe(EventKind::Victory, second.clone());

        bus.publish(&GameEvent::Victory);

        assert_eq!(first.borrow().seen, vec![GameEvent::Victory]);
        assert_eq!(second.borrow().seen, vec![GameEvent::Victory]);
    }

    #[test]
    fn filters_by_kind() {
        let mut bus = EventBus::new();
        let recorder = Recorder::new();
        bus.subscribe(EventKind::Victory, recorder.clone());

        bus.publish(&GameEvent::GameOver);
        assert!(recorder.borrow().seen.is_empty());

        bus.publish(&GameEvent::Victory);
        assert_eq!(recorder.borrow().seen.len(), 1);
    }

    #[test]
    fn failing_handler_does_not_stop_delivery() {
        let mut bus = EventBus::new();
        let failing = Recorder::failing();
        let healthy = Recorder::new();
        bus.subscribe(EventKind::GameOver, failing.clone());
        bus.subscribe(EventKind::GameOver, healthy.clone());

        bus.publish(&GameEvent::GameOver);

        assert_eq!(failing.borrow().seen.len(), 1);
        assert_eq!(healthy.borrow().seen.len(), 1);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let mut bus = EventBus::new();
        let recorder = Recorder::new();
        let id = bus.subscribe(EventKind::Victory, recorder.clone());

        bus.unsubscribe(id);
        bus.unsubscribe(id);

        bus.publish(&GameEvent::Victory);
        assert!(recorder.borrow().seen.is_empty());
        assert_eq!(bus.subscriber_count(EventKind::Victory), 0);
    }

    #[test]
    fn no_replay_for_late_subscribers() {
        let mut bus = EventBus::new();
        bus.publish(&GameEvent::Victory);

        let late = Recorder::new();
        bus.subscribe(EventKind::Victory, late.clone());
        assert!(late.borrow().seen.is_empty());
    }
}

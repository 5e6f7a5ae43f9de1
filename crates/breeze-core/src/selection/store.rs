//! Selection store implementation

use super::{SelectionEvent, SelectionSubscriber};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use tracing::debug;

/// Selection state stored internally
#[derive(Debug, Clone, Copy)]
struct SelectionState {
    selected: usize,
    slot_count: usize,
}

/// Shared store for the currently selected module
///
/// The host owns this and may write it at any time (programmatic
/// navigation, keyboard shortcuts); the tab selector writes it when a
/// gesture commits. Out-of-range indices are clamped rather than
/// rejected, so every write lands on a valid module.
pub struct SelectionStore {
    state: Arc<RwLock<SelectionState>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn SelectionSubscriber>>>>,
}

impl SelectionStore {
    /// Create a new store for `slot_count` modules starting at `initial`
    pub fn new(slot_count: usize, initial: usize) -> Self {
        let slot_count = slot_count.max(1);
        let state = SelectionState {
            selected: initial.min(slot_count - 1),
            slot_count,
        };

        Self {
            state: Arc::new(RwLock::new(state)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Currently selected module index
    pub fn selected(&self) -> usize {
        self.state.read().selected
    }

    /// Number of selectable modules
    pub fn slot_count(&self) -> usize {
        self.state.read().slot_count
    }

    /// Select a module, clamping out-of-range indices
    ///
    /// Returns the effective index. Subscribers are notified only when
    /// the selection actually changed; re-selecting the current module
    /// is a no-op.
    pub fn select(&self, index: usize) -> usize {
        let mut state = self.state.write();
        let clamped = index.min(state.slot_count - 1);
        let previous = state.selected;

        if clamped == previous {
            return clamped;
        }

        state.selected = clamped;
        drop(state);

        debug!(previous, selected = clamped, "selection changed");
        self.notify_subscribers(SelectionEvent {
            previous,
            selected: clamped,
        });
        clamped
    }

    /// Add a subscriber
    pub fn add_subscriber(&self, subscriber: Arc<dyn SelectionSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Notify all subscribers of a selection change
    fn notify_subscribers(&self, event: SelectionEvent) {
        let mut subscribers = self.subscribers.write();

        // Remove any dead weak references
        subscribers.retain(|weak| weak.strong_count() > 0);

        // Notify live subscribers
        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_selection_change(&event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    struct Recorder {
        events: Mutex<Vec<SelectionEvent>>,
    }

    impl SelectionSubscriber for Recorder {
        fn on_selection_change(&self, event: &SelectionEvent) {
            self.events.lock().push(*event);
        }
    }

    #[test]
    fn clamps_out_of_range_writes() {
        let store = SelectionStore::new(5, 0);
        assert_eq!(store.select(99), 4);
        assert_eq!(store.selected(), 4);
    }

    #[test]
    fn clamps_initial_index() {
        let store = SelectionStore::new(3, 10);
        assert_eq!(store.selected(), 2);
    }

    #[test]
    fn empty_registry_still_has_one_slot() {
        let store = SelectionStore::new(0, 0);
        assert_eq!(store.slot_count(), 1);
        assert_eq!(store.selected(), 0);
    }

    #[test]
    fn notifies_once_per_actual_change() {
        let store = SelectionStore::new(5, 0);
        let recorder = Arc::new(Recorder {
            events: Mutex::new(Vec::new()),
        });
        store.add_subscriber(recorder.clone());

        store.select(3);
        store.select(3);
        store.select(3);
        store.select(1);

        let events = recorder.events.lock();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            SelectionEvent {
                previous: 0,
                selected: 3
            }
        );
        assert_eq!(
            events[1],
            SelectionEvent {
                previous: 3,
                selected: 1
            }
        );
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let store = SelectionStore::new(2, 0);
        let recorder = Arc::new(Recorder {
            events: Mutex::new(Vec::new()),
        });
        store.add_subscriber(recorder.clone());
        drop(recorder);

        // Must not panic or deliver to the dead subscriber
        store.select(1);
        assert_eq!(store.selected(), 1);
    }
}

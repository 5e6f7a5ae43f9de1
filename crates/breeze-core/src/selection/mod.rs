mod store;
mod subscriber;

pub use store::SelectionStore;
pub use subscriber::SelectionSubscriber;

/// Event passed to subscribers when the active module changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionEvent {
    /// Index that was selected before the change
    pub previous: usize,
    /// Index that is selected now
    pub selected: usize,
}

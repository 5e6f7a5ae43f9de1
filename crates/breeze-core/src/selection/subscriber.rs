//! Selection subscriber trait

use super::SelectionEvent;

/// Trait for components that need to respond to selection changes
pub trait SelectionSubscriber: Send + Sync {
    /// Called once for every actual change of the selected module index
    fn on_selection_change(&self, event: &SelectionEvent);
}

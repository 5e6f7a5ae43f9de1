//! Widget identity helpers
//!
//! Long-lived chrome (the tab pill's overlay, the sidebar panel) needs
//! egui IDs that stay stable across frames and content swaps. Building
//! them from explicit components keeps them collision-free without
//! scattering string formatting around the UI code.

use egui::Id;
use std::fmt::Display;

/// Widget ID builder that combines components into one stable ID
pub struct WidgetId {
    components: Vec<String>,
}

impl WidgetId {
    /// Create a new widget ID builder
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    /// Add a component to the ID
    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    /// Build the final ID string
    pub fn build(&self) -> String {
        self.components.join("_")
    }

    /// Create an egui ID from this widget ID
    pub fn id(&self) -> Id {
        Id::new(self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_id_builder() {
        let id = WidgetId::new("breeze").with("tab_pill").build();
        assert_eq!(id, "breeze_tab_pill");
    }

    #[test]
    fn test_same_components_same_id() {
        let a = WidgetId::new("shell").with("overlay").id();
        let b = WidgetId::new("shell").with("overlay").id();
        assert_eq!(a, b);
    }
}

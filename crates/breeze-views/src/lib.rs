//! Module content views for the Breeze shell
//!
//! One view per registry module. These are deliberately static
//! placeholders; the shell around them (navigation, backdrop, selector)
//! is the interesting part.

mod placeholders;

pub use placeholders::{
    ActivityView, ComposeView, LibraryView, SettingsView, TodayView,
};

use breeze_core::ShellContext;
use egui::Ui;

/// One module's content area
pub trait ModuleView {
    /// Title shown at the top of the content area
    fn title(&self) -> &str;

    /// Render the module
    fn ui(&mut self, ui: &mut Ui, ctx: &ShellContext);
}

/// Views matching [`breeze_core::ModuleRegistry::default`], in order
pub fn default_views() -> Vec<Box<dyn ModuleView>> {
    vec![
        Box::new(TodayView::default()),
        Box::new(LibraryView::default()),
        Box::new(ComposeView::default()),
        Box::new(ActivityView::default()),
        Box::new(SettingsView::default()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use breeze_core::ModuleRegistry;

    #[test]
    fn default_views_match_default_registry() {
        let registry = ModuleRegistry::default();
        let views = default_views();
        assert_eq!(views.len(), registry.len());
    }
}

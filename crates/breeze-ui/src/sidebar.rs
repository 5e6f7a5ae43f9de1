//! Sidebar navigation for wide layouts
//!
//! The trivial counterpart of the floating pill: a fixed list of
//! selectable rows writing the same selection store.

use breeze_core::ShellContext;
use egui::{Context, RichText, SidePanel};

const SIDEBAR_WIDTH: f32 = 200.0;
const SIDEBAR_WIDTH_ICONS: f32 = 64.0;

/// Render the sidebar. `show_labels` collapses it to an icon rail.
pub fn sidebar(ctx: &Context, shell: &ShellContext, show_labels: bool) {
    let width = if show_labels {
        SIDEBAR_WIDTH
    } else {
        SIDEBAR_WIDTH_ICONS
    };

    SidePanel::left("breeze_sidebar")
        .exact_width(width)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.heading(RichText::new("Breeze").strong());
            ui.add_space(16.0);

            let selected = shell.selection.selected();
            for (index, module) in shell.registry.iter().enumerate() {
                let text = if show_labels {
                    format!("{}  {}", module.icon, module.label)
                } else {
                    module.icon.clone()
                };

                let row = ui.selectable_label(selected == index, RichText::new(text).size(15.0));
                if row.clicked() {
                    shell.selection.select(index);
                }
            }
        });
}

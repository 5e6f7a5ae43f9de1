//! Adaptive shell container
//!
//! Decides between the wide layout (sidebar) and the compact layout
//! (floating tab pill) from the window width. Both layouts share one
//! backdrop and one pill instance; flipping layouts or swapping module
//! content never recreates either.

use crate::background::{Backdrop, TwilightScene};
use crate::sidebar;
use crate::tab_pill::{PillConfig, SlotDescriptor, TabPill};
use crate::widget_utils::WidgetId;
use breeze_core::{AppSettings, ShellContext};
use egui::{Align2, Area, CentralPanel, Context, Frame, Order, Ui, Vec2};

/// Window width at which the sidebar replaces the floating pill
pub const WIDE_BREAKPOINT: f32 = 700.0;

/// Vertical clearance reserved above the window's bottom edge for the
/// floating pill
const PILL_BOTTOM_MARGIN: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellLayout {
    Wide,
    Compact,
}

impl ShellLayout {
    pub fn for_width(width: f32) -> Self {
        if width >= WIDE_BREAKPOINT {
            Self::Wide
        } else {
            Self::Compact
        }
    }
}

/// The application shell: backdrop, navigation chrome, content area
pub struct Shell {
    backdrop: Backdrop,
    // Allocated once for the shell's lifetime; this is what keeps the
    // indicator's animation state alive across module switches.
    pill: TabPill,
}

impl Shell {
    pub fn new(shell: &ShellContext, egui_ctx: &Context) -> Self {
        let slots: Vec<SlotDescriptor> = shell.registry.iter().map(SlotDescriptor::from).collect();
        let pill = TabPill::new(slots, PillConfig::default(), shell.selection.selected());
        let backdrop = Backdrop::with_source(TwilightScene, &shell.runtime_handle, egui_ctx);

        Self { backdrop, pill }
    }

    /// Render one frame of the shell. `content` draws the currently
    /// selected module into the prepared content area.
    pub fn ui(
        &mut self,
        ctx: &Context,
        shell: &ShellContext,
        settings: &AppSettings,
        mut content: impl FnMut(&mut Ui, usize),
    ) {
        let layout = ShellLayout::for_width(ctx.screen_rect().width());

        if layout == ShellLayout::Wide {
            sidebar::sidebar(ctx, shell, settings.sidebar_labels);
        }

        CentralPanel::default().frame(Frame::none()).show(ctx, |ui| {
            self.backdrop.ui(ui, !settings.reduce_motion);

            let selected = shell.selection.selected();
            let mut area = ui.max_rect().shrink(16.0);
            if layout == ShellLayout::Compact {
                // Keep content clear of the floating pill
                area.max.y -= self.pill.metrics().pill_size().y + PILL_BOTTOM_MARGIN;
            }
            let mut content_ui = ui.child_ui(area, egui::Layout::top_down(egui::Align::Min));
            content(&mut content_ui, selected);
        });

        if layout == ShellLayout::Compact {
            Area::new(WidgetId::new("breeze").with("tab_pill").id())
                .anchor(Align2::CENTER_BOTTOM, Vec2::new(0.0, -PILL_BOTTOM_MARGIN))
                .order(Order::Foreground)
                .show(ctx, |ui| {
                    self.pill.ui(ui, &shell.selection);
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_windows_get_the_pill() {
        assert_eq!(ShellLayout::for_width(420.0), ShellLayout::Compact);
        assert_eq!(ShellLayout::for_width(699.9), ShellLayout::Compact);
    }

    #[test]
    fn wide_windows_get_the_sidebar() {
        assert_eq!(ShellLayout::for_width(700.0), ShellLayout::Wide);
        assert_eq!(ShellLayout::for_width(1280.0), ShellLayout::Wide);
    }
}

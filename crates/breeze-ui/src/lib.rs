//! User interface components for the Breeze shell
//!
//! This crate provides the egui-based navigation chrome: the floating
//! tab selector, the wide-layout sidebar, the adaptive shell container
//! and the animated backdrop.

pub mod background;
pub mod shell;
pub mod sidebar;
pub mod tab_pill;
pub mod theme;
pub mod widget_utils;

// Re-export commonly used types
pub use background::{Backdrop, SceneError, SceneSource, TwilightScene};
pub use shell::{Shell, ShellLayout, WIDE_BREAKPOINT};
pub use tab_pill::{
    AnimationConfig, GestureOutcome, PillConfig, SlotDescriptor, TabPill, DRAG_THRESHOLD,
};
pub use theme::{apply_theme, Theme};
pub use widget_utils::WidgetId;

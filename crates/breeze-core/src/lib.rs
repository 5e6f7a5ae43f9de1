//! Core functionality for the Breeze application shell
//!
//! This crate provides the module registry and the shared selection
//! state that the navigation UI and the content area both consume.

pub mod module;
pub mod selection;
pub mod state;

// Re-export commonly used types
pub use module::{ModuleDescriptor, ModuleId, ModuleRegistry};
pub use selection::{SelectionEvent, SelectionStore, SelectionSubscriber};
pub use state::{AppSettings, ShellContext};

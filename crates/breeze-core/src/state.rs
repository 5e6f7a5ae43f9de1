//! Application state management

use crate::module::ModuleRegistry;
use crate::selection::SelectionStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application settings, persisted between runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub dark_mode: bool,
    /// Show text labels next to sidebar icons on wide layouts
    pub sidebar_labels: bool,
    /// Freeze the backdrop drift (the selector still animates)
    pub reduce_motion: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            sidebar_labels: true,
            reduce_motion: false,
        }
    }
}

/// Context shared between the shell, the navigation chrome and the
/// module content views
#[derive(Clone)]
pub struct ShellContext {
    /// Registry of selectable modules
    pub registry: Arc<ModuleRegistry>,

    /// Shared selection state
    pub selection: Arc<SelectionStore>,

    /// Tokio runtime handle for background work (scene loading)
    pub runtime_handle: tokio::runtime::Handle,
}

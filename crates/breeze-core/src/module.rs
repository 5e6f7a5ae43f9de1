//! Module registry
//!
//! A module is one top-level destination of the shell (one sidebar row,
//! one slot in the floating tab selector). The registry is fixed for the
//! lifetime of the shell.

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// Module identifier type
pub type ModuleId = Uuid;

/// One selectable destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub id: ModuleId,
    /// Short label shown under the icon
    pub label: String,
    /// Icon glyph shown in navigation chrome
    pub icon: String,
}

impl ModuleDescriptor {
    pub fn new(label: &str, icon: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Ordered, non-empty collection of modules
#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    modules: Vec<ModuleDescriptor>,
}

impl ModuleRegistry {
    /// Build a registry from a module list
    ///
    /// An empty list falls back to the default registry so the shell
    /// always has at least one destination to show.
    pub fn new(modules: Vec<ModuleDescriptor>) -> Self {
        if modules.is_empty() {
            warn!("module registry constructed empty, using defaults");
            return Self::default();
        }
        Self { modules }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ModuleDescriptor> {
        self.modules.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleDescriptor> {
        self.modules.iter()
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self {
            modules: vec![
                ModuleDescriptor::new("Today", "☀"),
                ModuleDescriptor::new("Library", "🗀"),
                ModuleDescriptor::new("Compose", "✎"),
                ModuleDescriptor::new("Activity", "📈"),
                ModuleDescriptor::new("Settings", "⚙"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_falls_back_to_defaults() {
        let registry = ModuleRegistry::new(Vec::new());
        assert!(registry.len() >= 1);
    }

    #[test]
    fn preserves_order() {
        let registry = ModuleRegistry::new(vec![
            ModuleDescriptor::new("A", "a"),
            ModuleDescriptor::new("B", "b"),
        ]);
        assert_eq!(registry.get(0).unwrap().label, "A");
        assert_eq!(registry.get(1).unwrap().label, "B");
    }
}

//! Static placeholder views, one per default module

use crate::ModuleView;
use breeze_core::ShellContext;
use egui::{Color32, RichText, Ui};

fn heading(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.add_space(24.0);
    ui.heading(RichText::new(title).size(28.0).strong());
    ui.label(RichText::new(subtitle).color(Color32::from_gray(150)));
    ui.add_space(16.0);
}

#[derive(Default)]
pub struct TodayView;

impl ModuleView for TodayView {
    fn title(&self) -> &str {
        "Today"
    }

    fn ui(&mut self, ui: &mut Ui, _ctx: &ShellContext) {
        heading(ui, "Today", "Your day at a glance");
        for entry in ["Morning focus block", "Lunch with Ada", "Review queue: 3 items"] {
            ui.label(RichText::new(format!("•  {entry}")).size(15.0));
            ui.add_space(4.0);
        }
    }
}

#[derive(Default)]
pub struct LibraryView;

impl ModuleView for LibraryView {
    fn title(&self) -> &str {
        "Library"
    }

    fn ui(&mut self, ui: &mut Ui, _ctx: &ShellContext) {
        heading(ui, "Library", "Everything you saved");
        ui.label("12 collections · 148 items");
    }
}

#[derive(Default)]
pub struct ComposeView;

impl ModuleView for ComposeView {
    fn title(&self) -> &str {
        "Compose"
    }

    fn ui(&mut self, ui: &mut Ui, _ctx: &ShellContext) {
        heading(ui, "Compose", "Start something new");
        ui.label("Drafts live here until you publish them.");
    }
}

#[derive(Default)]
pub struct ActivityView;

impl ModuleView for ActivityView {
    fn title(&self) -> &str {
        "Activity"
    }

    fn ui(&mut self, ui: &mut Ui, ctx: &ShellContext) {
        heading(ui, "Activity", "What happened while you were away");
        ui.label(format!(
            "{} modules available in this shell.",
            ctx.registry.len()
        ));
    }
}

#[derive(Default)]
pub struct SettingsView;

impl ModuleView for SettingsView {
    fn title(&self) -> &str {
        "Settings"
    }

    fn ui(&mut self, ui: &mut Ui, _ctx: &ShellContext) {
        heading(ui, "Settings", "Tune the shell");
        ui.label("Appearance, motion and sidebar options are in the app menu.");
    }
}

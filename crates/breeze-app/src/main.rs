//! Main application entry point

use std::sync::Arc;

use anyhow::Result;
use eframe::egui::{self, Context, Key};
use tracing::info;

use breeze_core::{
    AppSettings, ModuleRegistry, SelectionEvent, SelectionStore, SelectionSubscriber, ShellContext,
};
use breeze_ui::{apply_theme, Shell, Theme};
use breeze_views::ModuleView;

/// Logs module switches, whichever input path caused them
struct SelectionLog;

impl SelectionSubscriber for SelectionLog {
    fn on_selection_change(&self, event: &SelectionEvent) {
        info!(from = event.previous, to = event.selected, "module switched");
    }
}

/// Main application state
struct BreezeApp {
    /// Shared context: registry + selection store
    shell_ctx: ShellContext,

    /// The adaptive shell (backdrop, sidebar, floating pill)
    shell: Shell,

    /// Content views, one per registry module
    views: Vec<Box<dyn ModuleView>>,

    /// Persisted settings
    settings: AppSettings,

    /// Kept alive so the store's weak reference stays valid
    _selection_log: Arc<SelectionLog>,

    /// Tokio runtime for background work
    _runtime: tokio::runtime::Runtime,
}

impl BreezeApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        apply_theme(&cc.egui_ctx, &Theme::default());

        let settings: AppSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let runtime = tokio::runtime::Runtime::new().unwrap();

        let registry = Arc::new(ModuleRegistry::default());
        let selection = Arc::new(SelectionStore::new(registry.len(), 0));

        let selection_log = Arc::new(SelectionLog);
        selection.add_subscriber(selection_log.clone());

        let shell_ctx = ShellContext {
            registry,
            selection,
            runtime_handle: runtime.handle().clone(),
        };

        let shell = Shell::new(&shell_ctx, &cc.egui_ctx);
        let views = breeze_views::default_views();

        Self {
            shell_ctx,
            shell,
            views,
            settings,
            _selection_log: selection_log,
            _runtime: runtime,
        }
    }

    /// Keyboard navigation: number keys jump, arrows step
    fn handle_keys(&self, ctx: &Context) {
        let selection = &self.shell_ctx.selection;

        ctx.input(|i| {
            for (index, key) in [Key::Num1, Key::Num2, Key::Num3, Key::Num4, Key::Num5]
                .into_iter()
                .enumerate()
            {
                if i.key_pressed(key) {
                    selection.select(index);
                }
            }

            if i.key_pressed(Key::ArrowRight) {
                selection.select(selection.selected() + 1);
            }
            if i.key_pressed(Key::ArrowLeft) {
                selection.select(selection.selected().saturating_sub(1));
            }
        });
    }
}

impl eframe::App for BreezeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        // Cheap clone (a pair of Arcs and a runtime handle) so the
        // content closure can borrow it independently of the shell
        let shell_ctx = self.shell_ctx.clone();
        let Self { shell, views, settings, .. } = self;

        shell.ui(ctx, &shell_ctx, settings, |ui, index| {
            if let Some(view) = views.get_mut(index) {
                view.ui(ui, &shell_ctx);
            }
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Breeze shell");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 780.0])
            .with_min_inner_size([360.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };

    eframe::run_native(
        "Breeze",
        options,
        Box::new(|cc| Box::new(BreezeApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}

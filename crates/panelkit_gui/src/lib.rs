//! Desktop front end for PanelKit.
//!
//! Exposes a `run` helper so the workspace root can launch the UI without
//! duplicating initialization logic.

mod app;
/// Backend worker + protocol types used by the GUI and headless tests.
pub mod backend;

use app::PanelKitApp;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("panelkit=info,panelkit_core=info,panelkit_gui=info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// Start the desktop UI with tracing enabled.
///
/// # Returns
/// The result of `eframe::run_native`.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error, including app
/// creation failures when the panel layout is unusable or the page server
/// cannot start.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let app = PanelKitApp::new().map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("PanelKit"),
        ..Default::default()
    };

    eframe::run_native("PanelKit", options, Box::new(|_cc| Ok(Box::new(app))))
}

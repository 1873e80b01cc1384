//! Root crate facade for PanelKit: panel state model, page server, and
//! (with the `gui` feature) the desktop front end.

pub use panelkit_core::{
    config, constants, error, models, panel, AppError, ButtonSpec, Config, ModalRequest,
    PanelController, PanelError, PanelEvent, PanelLayout, PanelTimings,
};
pub use panelkit_server::{create_app, serve_router, AppState, EmbeddedServer};

#[cfg(feature = "gui")]
pub use panelkit_gui::run as run_gui;

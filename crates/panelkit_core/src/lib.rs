//! Core domain library for PanelKit (config, errors, modal models, panel state).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across crates.
pub mod constants;
/// Application error types.
pub mod error;
/// Modal request and button models.
pub mod models;
/// Headless sidebar/overlay/modal state machine.
pub mod panel;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use constants::*;
pub use error::{AppError, PanelError};
pub use models::modal::{ButtonCallback, ButtonSpec, ModalRequest};
pub use panel::{PanelController, PanelEvent, PanelLayout, PanelTimings};

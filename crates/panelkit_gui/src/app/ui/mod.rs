//! UI surface modules extracted from the main app update loop.

/// Modal dialog with body and footer buttons.
pub(super) mod modal;
/// Full-window dimming overlay.
pub(super) mod overlay;
/// Sliding menu sidebar.
pub(super) mod sidebar;
/// Bottom status bar content.
pub(super) mod status_bar;
/// Top bar and main surface.
pub(super) mod top_bar;

//! Shared constants used across PanelKit crates.

/// Default HTTP port for the page server.
pub const DEFAULT_PORT: u16 = 38470;

/// Default overlay and modal fade duration in milliseconds.
pub const DEFAULT_FADE_MS: u64 = 200;
/// Default sidebar slide duration in milliseconds.
pub const DEFAULT_SLIDE_MS: u64 = 300;
/// Default toast auto-dismiss delay in milliseconds.
pub const DEFAULT_TOAST_MS: u64 = 2_000;
/// Default sidebar width; the hidden sidebar sits at `-width`.
pub const DEFAULT_SIDEBAR_WIDTH: f32 = 250.0;

/// Default timeout for the remote page GET.
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

/// Default directory served as static web root.
pub const DEFAULT_WWW_DIR: &str = "./www";
/// Path of the page fragment shown by the "load page" modal.
pub const DEFAULT_PAGE_PATH: &str = "page.html";

/// Widget identifiers bound at controller initialization.
pub const DEFAULT_SIDEBAR_ID: &str = "sidebar";
/// Overlay widget identifier.
pub const DEFAULT_OVERLAY_ID: &str = "overlay";
/// Modal widget identifier.
pub const DEFAULT_MODAL_ID: &str = "commonModal";

/// Label of the single button shown by alerts.
pub const ALERT_DISMISS_LABEL: &str = "Close";
/// Accept button label for confirm dialogs.
pub const CONFIRM_ACCEPT_LABEL: &str = "OK";
/// Reject button label for confirm dialogs.
pub const CONFIRM_REJECT_LABEL: &str = "Cancel";

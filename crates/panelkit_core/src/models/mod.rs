//! Data models passed between callers and the panel controller.

/// Modal content and footer button specs.
pub mod modal;

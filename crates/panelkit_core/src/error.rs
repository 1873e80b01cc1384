//! Error types for panel initialization, interaction, and process setup.
use thiserror::Error;

/// Failures local to a single panel interaction or to controller binding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    #[error("Missing panel target: {0}")]
    MissingTarget(&'static str),

    #[error("Duplicate panel target id: {0}")]
    DuplicateTarget(String),

    #[error("Invalid panel timing: {0}")]
    InvalidTiming(String),

    #[error("No such modal button: {0}")]
    NoSuchButton(usize),

    #[error("Failed to load {url}: {message}")]
    RemoteFetch { url: String, message: String },
}

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Panel(#[from] PanelError),

    #[error("Server error: {0}")]
    Server(String),
}

//! Protocol types for the GUI page-fetch worker.

/// Commands issued by the UI thread for the backend worker to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreCmd {
    /// Fetch an HTML fragment to be shown as modal content.
    FetchPage { url: String },
}

/// Events produced by the backend worker and polled by the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreEvent {
    /// The fragment at `url` was fetched successfully.
    PageLoaded { url: String, html: String },
    /// The fetch for `url` failed (transport error or non-success status).
    PageFailed { url: String, message: String },
}

impl CoreEvent {
    /// URL the event refers to.
    pub fn url(&self) -> &str {
        match self {
            CoreEvent::PageLoaded { url, .. } | CoreEvent::PageFailed { url, .. } => url,
        }
    }

    /// Collapse into the result shape the panel controller consumes.
    pub fn into_result(self) -> (String, Result<String, String>) {
        match self {
            CoreEvent::PageLoaded { url, html } => (url, Ok(html)),
            CoreEvent::PageFailed { url, message } => (url, Err(message)),
        }
    }
}

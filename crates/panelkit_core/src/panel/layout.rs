//! Widget identifiers and timing parameters the controller binds to.

use crate::constants::{
    DEFAULT_FADE_MS, DEFAULT_MODAL_ID, DEFAULT_OVERLAY_ID, DEFAULT_SIDEBAR_ID,
    DEFAULT_SIDEBAR_WIDTH, DEFAULT_SLIDE_MS, DEFAULT_TOAST_MS,
};
use crate::error::PanelError;
use serde::Deserialize;
use std::time::Duration;

/// Fixed identifiers of the three widgets sharing one overlay.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PanelLayout {
    pub sidebar_id: String,
    pub overlay_id: String,
    pub modal_id: String,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            sidebar_id: DEFAULT_SIDEBAR_ID.to_string(),
            overlay_id: DEFAULT_OVERLAY_ID.to_string(),
            modal_id: DEFAULT_MODAL_ID.to_string(),
        }
    }
}

impl PanelLayout {
    /// Reject blank or colliding identifiers.
    ///
    /// # Errors
    /// [`PanelError::MissingTarget`] names the first blank widget;
    /// [`PanelError::DuplicateTarget`] carries the shared id.
    pub fn validate(&self) -> Result<(), PanelError> {
        let targets = [
            ("sidebar", self.sidebar_id.trim()),
            ("overlay", self.overlay_id.trim()),
            ("modal", self.modal_id.trim()),
        ];
        for (name, id) in targets {
            if id.is_empty() {
                return Err(PanelError::MissingTarget(name));
            }
        }
        for (idx, (_, id)) in targets.iter().enumerate() {
            if targets[idx + 1..].iter().any(|(_, other)| other == id) {
                return Err(PanelError::DuplicateTarget(id.to_string()));
            }
        }
        Ok(())
    }
}

/// Animation durations, toast delay, and sidebar geometry.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelTimings {
    pub fade: Duration,
    pub slide: Duration,
    pub toast_delay: Duration,
    pub sidebar_width: f32,
}

impl Default for PanelTimings {
    fn default() -> Self {
        Self {
            fade: Duration::from_millis(DEFAULT_FADE_MS),
            slide: Duration::from_millis(DEFAULT_SLIDE_MS),
            toast_delay: Duration::from_millis(DEFAULT_TOAST_MS),
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
        }
    }
}

impl PanelTimings {
    pub fn validate(&self) -> Result<(), PanelError> {
        if !self.sidebar_width.is_finite() || self.sidebar_width <= 0.0 {
            return Err(PanelError::InvalidTiming(format!(
                "sidebar width must be positive, got {}",
                self.sidebar_width
            )));
        }
        Ok(())
    }
}

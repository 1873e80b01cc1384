//! UI-facing feedback: status banner, confirm decisions, panel event logging.

use super::{ConfirmDecision, PanelKitApp, StatusMessage, STATUS_TTL};
use crossbeam_channel::TryRecvError;
use panelkit_core::PanelEvent;
use std::time::Instant;
use tracing::{debug, info};

impl PanelKitApp {
    /// Sets the status banner message.
    pub(super) fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            expires_at: Instant::now() + STATUS_TTL,
        });
    }

    pub(super) fn expire_status(&mut self, now: Instant) {
        if self
            .status
            .as_ref()
            .is_some_and(|status| status.expires_at <= now)
        {
            self.status = None;
        }
    }

    pub(super) fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    /// Drains decisions reported by confirm-modal callbacks.
    pub(super) fn poll_decisions(&mut self) {
        loop {
            match self.decision_rx.try_recv() {
                Ok(ConfirmDecision::Accepted) => {
                    info!("confirm accepted");
                    self.set_status("Confirmed.");
                }
                Ok(ConfirmDecision::Rejected) => {
                    info!("confirm rejected");
                    self.set_status("Cancelled.");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    /// Logs drained controller events and surfaces recorded failures.
    pub(super) fn report_panel_events(&mut self) {
        for event in self.panel.drain_events() {
            debug!(?event, "panel event");
            if matches!(event, PanelEvent::RemoteLoadFailed { .. }) {
                if let Some(err) = self.panel.take_last_error() {
                    self.set_status(err.to_string());
                }
            }
        }
    }
}

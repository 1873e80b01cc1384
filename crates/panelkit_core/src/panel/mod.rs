//! Headless state model for a sliding sidebar and a modal/toast sharing one
//! dimming overlay.
//!
//! All waiting is expressed as transitions whose completions are applied by
//! [`PanelController::tick`], which the front end calls once per frame. Time is
//! always passed in explicitly so the model stays deterministic under test.
//!
//! Sequencing rules:
//! - presenting a modal always waits for a sidebar close to complete first;
//! - opening the sidebar closes the modal first;
//! - overlay visibility is derived from the other two widgets after every
//!   mutation, never toggled directly.

mod events;
mod layout;
mod modal;
mod overlay;
mod sidebar;
pub mod tween;

pub use events::PanelEvent;
pub use layout::{PanelLayout, PanelTimings};
pub use modal::{Modal, ModalPhase};
pub use overlay::Overlay;
pub use sidebar::{Sidebar, SidebarState};

use crate::error::PanelError;
use crate::models::modal::{ButtonSpec, ModalRequest};
use modal::FadeCompletion;
use sidebar::{SidebarFollowUp, SlideCompletion};
use std::time::Instant;
use tracing::{debug, warn};

/// Owner of the overlay, sidebar, and modal widgets and their shared state.
#[derive(Debug)]
pub struct PanelController {
    layout: PanelLayout,
    timings: PanelTimings,
    overlay: Overlay,
    sidebar: Sidebar,
    modal: Modal,
    toast_deadline: Option<Instant>,
    remote_in_flight: Option<String>,
    last_error: Option<PanelError>,
    events: Vec<PanelEvent>,
}

impl PanelController {
    /// Bind a controller to the given widget identifiers.
    ///
    /// # Errors
    /// Returns [`PanelError::MissingTarget`] or [`PanelError::DuplicateTarget`]
    /// for unusable identifiers and [`PanelError::InvalidTiming`] for a
    /// non-positive sidebar width.
    pub fn new(layout: PanelLayout, timings: PanelTimings) -> Result<Self, PanelError> {
        layout.validate()?;
        timings.validate()?;
        Ok(Self {
            layout,
            timings,
            overlay: Overlay::new(),
            sidebar: Sidebar::new(timings.sidebar_width),
            modal: Modal::new(),
            toast_deadline: None,
            remote_in_flight: None,
            last_error: None,
            events: Vec::new(),
        })
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    pub fn timings(&self) -> &PanelTimings {
        &self.timings
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar.is_open()
    }

    pub fn sidebar_state(&self) -> SidebarState {
        self.sidebar.state()
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar.is_visible()
    }

    pub fn sidebar_offset_at(&self, now: Instant) -> f32 {
        self.sidebar.offset_at(now)
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_shown()
    }

    pub fn overlay_opacity_at(&self, now: Instant) -> f32 {
        self.overlay.opacity_at(now)
    }

    pub fn modal_visible(&self) -> bool {
        self.modal.is_visible()
    }

    pub fn modal_phase(&self) -> ModalPhase {
        self.modal.phase()
    }

    pub fn modal_opacity_at(&self, now: Instant) -> f32 {
        self.modal.opacity_at(now)
    }

    pub fn modal_body(&self) -> &str {
        self.modal.body()
    }

    pub fn modal_buttons(&self) -> &[ButtonSpec] {
        self.modal.buttons()
    }

    pub fn footer_visible(&self) -> bool {
        self.modal.footer_visible()
    }

    /// URL of the remote page currently being fetched, if any.
    pub fn remote_in_flight(&self) -> Option<&str> {
        self.remote_in_flight.as_deref()
    }

    /// Deadline of the pending toast auto-close.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.toast_deadline
    }

    pub fn is_animating(&self) -> bool {
        self.sidebar.is_animating() || self.modal.is_animating() || self.overlay.is_animating()
    }

    /// Take the journal of transitions recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<PanelEvent> {
        std::mem::take(&mut self.events)
    }

    /// Take the last recorded interaction failure.
    pub fn take_last_error(&mut self) -> Option<PanelError> {
        self.last_error.take()
    }

    /// Open the sidebar when closed, close it when open.
    pub fn toggle_menu(&mut self, now: Instant) {
        if self.sidebar.is_open() {
            self.close_sidebar(now);
        } else {
            self.open_sidebar(now);
        }
    }

    /// Close any modal, then slide the sidebar in.
    pub fn open_sidebar(&mut self, now: Instant) {
        self.events.push(PanelEvent::SidebarOpenRequested);
        self.close_modal(now);
        if self.sidebar.open(now, self.timings.slide) {
            debug!("sidebar open superseded a pending modal presentation");
        }
        self.sync_overlay(now);
    }

    pub fn close_sidebar(&mut self, now: Instant) {
        self.request_sidebar_close(now, None);
    }

    /// Present `request` once the sidebar has finished closing.
    ///
    /// The sidebar close is requested even when it is already closed, so the
    /// modal always appears after one slide duration.
    pub fn open_modal(&mut self, request: ModalRequest, now: Instant) {
        self.cancel_toast();
        self.request_sidebar_close(now, Some(SidebarFollowUp::PresentModal(request)));
    }

    /// Clear and fade out the modal, cancelling a pending toast auto-close.
    ///
    /// A presentation still waiting on the sidebar is left queued; only
    /// [`PanelController::open_sidebar`] supersedes it.
    pub fn close_modal(&mut self, now: Instant) {
        self.cancel_toast();
        if self.modal.close(now, self.timings.fade) {
            self.events.push(PanelEvent::ModalCloseRequested);
        }
        self.sync_overlay(now);
    }

    /// Forward a click on footer button `index`: run its handler, then close.
    ///
    /// # Errors
    /// [`PanelError::NoSuchButton`] when no such button is visible.
    pub fn click_button(&mut self, index: usize, now: Instant) -> Result<(), PanelError> {
        let (label, callback) = self.modal.take_click(index)?;
        self.events.push(PanelEvent::ButtonClicked { index, label });
        if let Some(callback) = callback {
            callback();
        }
        self.close_modal(now);
        Ok(())
    }

    pub fn show_alert(&mut self, message: &str, now: Instant) {
        self.open_modal(ModalRequest::alert(message), now);
    }

    pub fn show_confirm<A, R>(&mut self, message: &str, on_accept: A, on_reject: R, now: Instant)
    where
        A: FnOnce() + Send + 'static,
        R: FnOnce() + Send + 'static,
    {
        self.open_modal(ModalRequest::confirm(message, on_accept, on_reject), now);
    }

    /// Show `message` without buttons and close it after the toast delay
    /// unless the modal is closed or replaced first.
    pub fn show_toast(&mut self, message: &str, now: Instant) {
        self.open_modal(ModalRequest::message(message), now);
        self.toast_deadline = Some(now + self.timings.toast_delay);
        self.events.push(PanelEvent::ToastScheduled);
    }

    /// Record that a remote page fetch for `url` has been dispatched.
    pub fn begin_remote_load(&mut self, url: impl Into<String>) {
        self.remote_in_flight = Some(url.into());
    }

    /// Present a fetched page, or surface the failure as an alert plus a
    /// retrievable [`PanelError::RemoteFetch`].
    pub fn finish_remote_load(&mut self, url: &str, result: Result<String, String>, now: Instant) {
        if self.remote_in_flight.as_deref() == Some(url) {
            self.remote_in_flight = None;
        }
        match result {
            Ok(html) => self.open_modal(ModalRequest::html(html), now),
            Err(message) => {
                warn!(url = url, error = %message, "remote modal load failed");
                let error = PanelError::RemoteFetch {
                    url: url.to_string(),
                    message,
                };
                self.events.push(PanelEvent::RemoteLoadFailed {
                    url: url.to_string(),
                });
                let text = error.to_string();
                self.last_error = Some(error);
                self.show_alert(&text, now);
            }
        }
    }

    /// Apply every transition and deadline due at `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(completion) = self.sidebar.poll(now) {
            self.apply_slide_completion(completion, now);
        }
        match self.modal.poll(now) {
            Some(FadeCompletion::Shown) => self.events.push(PanelEvent::ModalShown),
            Some(FadeCompletion::Hidden) => self.events.push(PanelEvent::ModalHidden),
            None => {}
        }
        self.overlay.poll(now);
        if self.toast_deadline.is_some_and(|deadline| deadline <= now) {
            self.toast_deadline = None;
            self.events.push(PanelEvent::ToastExpired);
            self.close_modal(now);
        }
        self.sync_overlay(now);
    }

    fn request_sidebar_close(&mut self, now: Instant, follow_up: Option<SidebarFollowUp>) {
        self.events.push(PanelEvent::SidebarCloseRequested);
        if let Some(interrupted) = self.sidebar.close(now, self.timings.slide, follow_up) {
            self.apply_slide_completion(interrupted, now);
        }
        self.sync_overlay(now);
    }

    fn apply_slide_completion(&mut self, completion: SlideCompletion, now: Instant) {
        self.sidebar.settle(&completion);
        match completion {
            SlideCompletion::Opened => self.events.push(PanelEvent::SidebarOpened),
            SlideCompletion::Closed { follow_up } => {
                self.events.push(PanelEvent::SidebarClosed);
                if let Some(SidebarFollowUp::PresentModal(request)) = follow_up {
                    let buttons = self.modal.present(request, now, self.timings.fade);
                    self.events.push(PanelEvent::ModalPresented { buttons });
                }
            }
        }
        self.sync_overlay(now);
    }

    fn cancel_toast(&mut self) {
        if self.toast_deadline.take().is_some() {
            self.events.push(PanelEvent::ToastCancelled);
        }
    }

    fn sync_overlay(&mut self, now: Instant) {
        let target = self.sidebar.is_visible() || self.modal.is_visible();
        if target == self.overlay.is_shown() {
            return;
        }
        if target {
            self.overlay.show(now, self.timings.fade);
            self.events.push(PanelEvent::OverlayShown);
        } else {
            self.overlay.hide(now, self.timings.fade);
            self.events.push(PanelEvent::OverlayHidden);
        }
    }
}

#[cfg(test)]
mod tests;

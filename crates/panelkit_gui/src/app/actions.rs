//! User-facing panel operations wired to controller calls and the worker.

use super::{ConfirmDecision, MenuAction, PanelKitApp};
use crate::backend::CoreCmd;
use eframe::egui;
use std::time::Instant;
use tracing::{debug, info, warn};

const ALERT_MESSAGE: &str = "This is an alert.";
const CONFIRM_MESSAGE: &str = "Do you want to continue?";
const TOAST_MESSAGE: &str = "Saved.";

impl PanelKitApp {
    pub(super) fn toggle_menu(&mut self, now: Instant) {
        self.panel.toggle_menu(now);
    }

    pub(super) fn show_alert(&mut self, message: &str, now: Instant) {
        self.panel.show_alert(message, now);
    }

    /// Open a confirm modal whose buttons report back through the decision
    /// channel drained on the next frame.
    pub(super) fn show_confirm(&mut self, message: &str, now: Instant) {
        let accept_tx = self.decision_tx.clone();
        let reject_tx = self.decision_tx.clone();
        self.panel.show_confirm(
            message,
            move || {
                let _ = accept_tx.send(ConfirmDecision::Accepted);
            },
            move || {
                let _ = reject_tx.send(ConfirmDecision::Rejected);
            },
            now,
        );
    }

    pub(super) fn show_toast(&mut self, message: &str, now: Instant) {
        self.panel.show_toast(message, now);
    }

    /// Load the configured page fragment into the modal.
    pub(super) fn load_page_modal(&mut self, now: Instant) {
        let url = self.page_url.clone();
        self.load_remote_modal(url, now);
    }

    /// Ask the worker for `url`; the modal opens when the result arrives.
    pub(super) fn load_remote_modal(&mut self, url: String, now: Instant) {
        if self.panel.remote_in_flight() == Some(url.as_str()) {
            debug!(url = %url, "page load already in flight");
            return;
        }
        self.panel.begin_remote_load(url.clone());
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::FetchPage { url: url.clone() })
            .is_err()
        {
            warn!(url = %url, "backend worker unavailable for page load");
            self.panel.finish_remote_load(
                &url,
                Err("backend worker disconnected".to_string()),
                now,
            );
            return;
        }
        info!(url = %url, "page load requested");
        self.set_status("Loading page...");
    }

    /// Forward a footer click; unknown indices are logged and ignored.
    pub(super) fn click_modal_button(&mut self, index: usize, now: Instant) {
        if let Err(err) = self.panel.click_button(index, now) {
            warn!("modal click ignored: {}", err);
        }
    }

    pub(super) fn run_menu_action(&mut self, action: MenuAction, now: Instant) {
        match action {
            MenuAction::Alert => self.show_alert(ALERT_MESSAGE, now),
            MenuAction::Confirm => self.show_confirm(CONFIRM_MESSAGE, now),
            MenuAction::LoadPage => self.load_page_modal(now),
            MenuAction::Toast => self.show_toast(TOAST_MESSAGE, now),
        }
    }

    /// Escape dismisses the modal first, then the sidebar.
    pub(super) fn handle_shortcuts(&mut self, ctx: &egui::Context, now: Instant) {
        if !ctx.input(|input| input.key_pressed(egui::Key::Escape)) {
            return;
        }
        if self.panel.modal_visible() {
            self.panel.close_modal(now);
        } else if self.panel.is_sidebar_open() {
            self.panel.close_sidebar(now);
        }
    }
}

//! egui application shell around the headless panel controller.

mod actions;
mod markup;
mod state_feedback;
mod style;
mod ui;

use crate::backend::{spawn_backend, BackendHandle, CoreEvent};
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use eframe::egui;
use panelkit_core::config::env_flag_enabled;
use panelkit_core::{AppError, Config, PanelController};
use panelkit_server::{AppState, EmbeddedServer};
use std::time::{Duration, Instant};
use style::*;
use tracing::{info, warn};

pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [960.0, 640.0];
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 420.0];
const STATUS_TTL: Duration = Duration::from_secs(5);

/// Native egui application shell.
///
/// Owns the panel controller and talks to the fetch worker via channels so
/// the `update` loop never blocks on network I/O.
pub(crate) struct PanelKitApp {
    panel: PanelController,
    backend: BackendHandle,
    _server: Option<EmbeddedServer>,
    server_label: Option<String>,
    page_url: String,
    decision_tx: Sender<ConfirmDecision>,
    decision_rx: Receiver<ConfirmDecision>,
    status: Option<StatusMessage>,
    backend_disconnected: bool,
    style_applied: bool,
}

/// Outcome of a confirm modal, reported back from its button callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ConfirmDecision {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    expires_at: Instant,
}

/// Entries offered in the sidebar menu and on the main surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MenuAction {
    Alert,
    Confirm,
    LoadPage,
    Toast,
}

pub(super) const MENU_ACTIONS: [(&str, MenuAction); 4] = [
    ("Show alert", MenuAction::Alert),
    ("Ask for confirmation", MenuAction::Confirm),
    ("Load page", MenuAction::LoadPage),
    ("Show toast", MenuAction::Toast),
];

impl PanelKitApp {
    /// Build the app from environment configuration.
    ///
    /// Starts the embedded page server and the fetch worker.
    ///
    /// # Errors
    /// Returns an error when the panel layout is unusable or the page server
    /// cannot start.
    pub(crate) fn new() -> Result<Self, AppError> {
        let config = Config::from_env();
        let panel = PanelController::new(config.layout.clone(), config.timings)?;
        let allow_public = env_flag_enabled("ALLOW_PUBLIC_ACCESS");
        let server = EmbeddedServer::start(AppState::new(config.clone()), allow_public)?;
        let page_url = server.url(&config.page_path);
        let server_label = if server.used_fallback() {
            format!("http://{} (auto)", server.addr())
        } else {
            format!("http://{}", server.addr())
        };
        info!(page_url = %page_url, "page server ready");
        let backend = spawn_backend(config.fetch_timeout());
        let mut app = Self::with_parts(panel, backend, page_url);
        app.server_label = Some(server_label);
        app._server = Some(server);
        Ok(app)
    }

    fn with_parts(panel: PanelController, backend: BackendHandle, page_url: String) -> Self {
        let (decision_tx, decision_rx) = unbounded();
        Self {
            panel,
            backend,
            _server: None,
            server_label: None,
            page_url,
            decision_tx,
            decision_rx,
            status: None,
            backend_disconnected: false,
            style_applied: false,
        }
    }

    /// Feed a worker result into the controller.
    pub(super) fn apply_event(&mut self, event: CoreEvent, now: Instant) {
        let (url, result) = event.into_result();
        if self.panel.remote_in_flight() != Some(url.as_str()) {
            warn!(url = %url, "ignoring page result that is no longer awaited");
            return;
        }
        let loaded = result.is_ok();
        self.panel.finish_remote_load(&url, result, now);
        if loaded {
            self.set_status("Page loaded.");
        }
    }

    fn poll_backend(&mut self, now: Instant) {
        loop {
            match self.backend.evt_rx.try_recv() {
                Ok(event) => self.apply_event(event, now),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.backend_disconnected {
                        self.backend_disconnected = true;
                        warn!("backend worker disconnected");
                        self.set_status("Backend worker stopped.");
                    }
                    break;
                }
            }
        }
    }

    /// Run one frame of model work: worker results, decisions, transitions.
    pub(super) fn step(&mut self, now: Instant) {
        self.poll_backend(now);
        self.poll_decisions();
        self.panel.tick(now);
        self.report_panel_events();
        self.expire_status(now);
    }

    /// Delay until the next frame must be drawn, or `None` when idle.
    pub(super) fn repaint_after(&self, now: Instant) -> Option<Duration> {
        if self.panel.is_animating() {
            return Some(Duration::ZERO);
        }
        let status_deadline = self.status.as_ref().map(|status| status.expires_at);
        [self.panel.next_deadline(), status_deadline]
            .into_iter()
            .flatten()
            .min()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl eframe::App for PanelKitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_style(ctx);
        let now = Instant::now();
        self.handle_shortcuts(ctx, now);
        self.step(now);

        self.render_top_bar(ctx, now);
        self.render_status_bar(ctx);
        self.render_main_surface(ctx, now);
        self.render_overlay(ctx, now);
        self.render_sidebar(ctx, now);
        self.render_modal(ctx, now);

        match self.repaint_after(now) {
            Some(delay) if delay.is_zero() => ctx.request_repaint(),
            Some(delay) => ctx.request_repaint_after(delay),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests;

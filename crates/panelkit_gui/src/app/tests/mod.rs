//! App-level tests driving the shell with fake worker channels and an
//! explicit clock.

use super::*;
use crate::backend::{BackendHandle, CoreCmd, CoreEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use panelkit_core::panel::ModalPhase;
use panelkit_core::{PanelLayout, PanelTimings};

const PAGE_URL: &str = "http://127.0.0.1:38470/page.html";

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

struct TestHarness {
    app: PanelKitApp,
    cmd_rx: Receiver<CoreCmd>,
    evt_tx: Sender<CoreEvent>,
    now: Instant,
}

fn make_app() -> TestHarness {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();
    let panel = PanelController::new(PanelLayout::default(), PanelTimings::default())
        .expect("default layout binds");
    let app = PanelKitApp::with_parts(
        panel,
        BackendHandle::from_test_channels(cmd_tx, evt_rx),
        PAGE_URL.to_string(),
    );
    TestHarness {
        app,
        cmd_rx,
        evt_tx,
        now: Instant::now(),
    }
}

impl TestHarness {
    fn advance(&mut self, by: Duration) {
        self.now += by;
        self.app.step(self.now);
    }

    /// Run enough frames for any close-then-present chain to finish.
    fn settle(&mut self) {
        for _ in 0..20 {
            self.advance(ms(50));
        }
    }

    fn modal_text(&self) -> &str {
        self.app.panel.modal_body()
    }

    fn run_frame(&mut self, input: egui::RawInput) {
        let ctx = egui::Context::default();
        let now = self.now;
        let app = &mut self.app;
        let _ = ctx.run(input, |ctx| {
            app.handle_shortcuts(ctx, now);
            app.render_top_bar(ctx, now);
            app.render_status_bar(ctx);
            app.render_main_surface(ctx, now);
            app.render_overlay(ctx, now);
            app.render_sidebar(ctx, now);
            app.render_modal(ctx, now);
        });
    }
}

fn escape_input() -> egui::RawInput {
    egui::RawInput {
        events: vec![egui::Event::Key {
            key: egui::Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }],
        ..Default::default()
    }
}

mod modal_actions;

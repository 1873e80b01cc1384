//! Controller behavior tests driven by an explicit clock.

use super::*;
use std::time::Duration;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

struct Harness {
    panel: PanelController,
    now: Instant,
}

impl Harness {
    fn new() -> Self {
        let panel = PanelController::new(PanelLayout::default(), PanelTimings::default())
            .expect("default layout binds");
        Self {
            panel,
            now: Instant::now(),
        }
    }

    /// Move the clock forward and apply due transitions.
    fn advance(&mut self, by: Duration) {
        self.now += by;
        self.panel.tick(self.now);
        self.assert_overlay_derived();
    }

    /// Step the clock long enough for any close-then-present chain to finish,
    /// checking the overlay invariant at every frame.
    fn settle(&mut self) {
        for _ in 0..20 {
            self.advance(ms(50));
        }
    }

    fn assert_overlay_derived(&self) {
        let expected = self.panel.sidebar_visible() || self.panel.modal_visible();
        assert_eq!(
            self.panel.overlay_visible(),
            expected,
            "overlay out of sync: sidebar_visible={} modal_visible={}",
            self.panel.sidebar_visible(),
            self.panel.modal_visible()
        );
    }

    fn events(&mut self) -> Vec<PanelEvent> {
        self.panel.drain_events()
    }
}

fn position(events: &[PanelEvent], wanted: &PanelEvent) -> Option<usize> {
    events.iter().position(|event| event == wanted)
}

mod sidebar_flow;

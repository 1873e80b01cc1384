//! Full-screen dimming layer. Its target visibility is derived by the controller.

use super::tween::{Animated, StopMode};
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Overlay {
    fade: Animated<()>,
    shown: bool,
}

impl Overlay {
    pub(crate) fn new() -> Self {
        Self {
            fade: Animated::settled(0.0),
            shown: false,
        }
    }

    pub(crate) fn show(&mut self, now: Instant, fade: Duration) {
        self.fade.stop(now, StopMode::JumpToEnd);
        self.fade.animate(1.0, now, fade, ());
        self.shown = true;
    }

    pub(crate) fn hide(&mut self, now: Instant, fade: Duration) {
        self.fade.stop(now, StopMode::JumpToEnd);
        self.fade.animate(0.0, now, fade, ());
        self.shown = false;
    }

    pub(crate) fn poll(&mut self, now: Instant) {
        self.fade.poll(now);
    }

    /// Whether the overlay is shown or fading in.
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn opacity_at(&self, now: Instant) -> f32 {
        self.fade.value_at(now)
    }

    pub fn is_animating(&self) -> bool {
        self.fade.is_pending()
    }
}

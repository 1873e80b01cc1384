//! Timed scalar transitions and the stop-then-animate policy shared by widgets.

use std::f32::consts::PI;
use std::time::{Duration, Instant};

/// How an in-flight transition is stopped before a new one starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopMode {
    /// Keep the current value and drop the pending completion.
    Freeze,
    /// Snap to the target value and hand the pending completion back.
    JumpToEnd,
}

/// A scalar moving from `from` to `to` over `duration`, eased with a swing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    duration: Duration,
}

fn swing(progress: f32) -> f32 {
    0.5 - (progress * PI).cos() / 2.0
}

impl Tween {
    /// A tween already resting at `value`.
    pub fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            started_at: None,
            duration: Duration::ZERO,
        }
    }

    pub fn start(from: f32, to: f32, now: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at: Some(now),
            duration,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return 1.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * swing(progress)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn origin(&self) -> f32 {
        self.from
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}

/// A widget property driven by a tween, carrying the completion to apply
/// once the tween finishes.
#[derive(Debug)]
pub(crate) struct Animated<C> {
    tween: Tween,
    pending: Option<C>,
}

impl<C> Animated<C> {
    pub(crate) fn settled(value: f32) -> Self {
        Self {
            tween: Tween::settled(value),
            pending: None,
        }
    }

    pub(crate) fn value_at(&self, now: Instant) -> f32 {
        self.tween.value_at(now)
    }

    pub(crate) fn tween(&self) -> &Tween {
        &self.tween
    }

    pub(crate) fn pending(&self) -> Option<&C> {
        self.pending.as_ref()
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Stop the in-flight transition. Only `JumpToEnd` returns its completion.
    pub(crate) fn stop(&mut self, now: Instant, mode: StopMode) -> Option<C> {
        match mode {
            StopMode::Freeze => {
                self.tween = Tween::settled(self.tween.value_at(now));
                self.pending = None;
                None
            }
            StopMode::JumpToEnd => {
                self.tween = Tween::settled(self.tween.target());
                self.pending.take()
            }
        }
    }

    /// Start a transition from the current value. Callers stop first.
    pub(crate) fn animate(&mut self, to: f32, now: Instant, duration: Duration, completion: C) {
        let from = self.tween.value_at(now);
        self.tween = Tween::start(from, to, now, duration);
        self.pending = Some(completion);
    }

    /// Take the completion once the tween has finished.
    pub(crate) fn poll(&mut self, now: Instant) -> Option<C> {
        if self.pending.is_some() && self.tween.is_finished(now) {
            self.tween = Tween::settled(self.tween.target());
            return self.pending.take();
        }
        None
    }
}

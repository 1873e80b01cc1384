//! Slide-in navigation panel with a two-state flag flipped only on slide completion.

use super::tween::{Animated, StopMode};
use crate::models::modal::ModalRequest;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarState {
    Open,
    Closed,
}

/// Step run once the sidebar has finished sliding out.
#[derive(Debug)]
pub(crate) enum SidebarFollowUp {
    PresentModal(ModalRequest),
}

#[derive(Debug)]
pub(crate) enum SlideCompletion {
    Opened,
    Closed { follow_up: Option<SidebarFollowUp> },
}

#[derive(Debug)]
pub struct Sidebar {
    slide: Animated<SlideCompletion>,
    state: SidebarState,
    width: f32,
}

impl Sidebar {
    pub(crate) fn new(width: f32) -> Self {
        Self {
            slide: Animated::settled(-width),
            state: SidebarState::Closed,
            width,
        }
    }

    pub fn state(&self) -> SidebarState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SidebarState::Open
    }

    /// Horizontal offset: `0` fully shown, `-width` fully hidden.
    pub fn offset_at(&self, now: Instant) -> f32 {
        self.slide.value_at(now)
    }

    /// Open, opening, or sliding out from a visible position.
    pub fn is_visible(&self) -> bool {
        if self.is_open() {
            return true;
        }
        match self.slide.pending() {
            Some(SlideCompletion::Opened) => true,
            Some(SlideCompletion::Closed { .. }) => self.slide.tween().origin() > -self.width,
            None => false,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.slide.is_pending()
    }

    /// Slide in. A close still in flight is frozen and its follow-up dropped.
    pub(crate) fn open(&mut self, now: Instant, slide: Duration) -> bool {
        let dropped_follow_up = matches!(
            self.slide.pending(),
            Some(SlideCompletion::Closed {
                follow_up: Some(_)
            })
        );
        self.slide.stop(now, StopMode::Freeze);
        self.slide.animate(0.0, now, slide, SlideCompletion::Opened);
        dropped_follow_up
    }

    /// Slide out, returning the completion of any transition cut short so the
    /// controller can apply it first.
    pub(crate) fn close(
        &mut self,
        now: Instant,
        slide: Duration,
        follow_up: Option<SidebarFollowUp>,
    ) -> Option<SlideCompletion> {
        let interrupted = self.slide.stop(now, StopMode::JumpToEnd);
        self.slide
            .animate(-self.width, now, slide, SlideCompletion::Closed { follow_up });
        interrupted
    }

    pub(crate) fn poll(&mut self, now: Instant) -> Option<SlideCompletion> {
        self.slide.poll(now)
    }

    pub(crate) fn settle(&mut self, completion: &SlideCompletion) {
        self.state = match completion {
            SlideCompletion::Opened => SidebarState::Open,
            SlideCompletion::Closed { .. } => SidebarState::Closed,
        };
    }
}

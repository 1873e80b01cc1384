//! Centered dialog: HTML body, optional footer buttons, fade in/out.

use super::tween::{Animated, StopMode};
use crate::error::PanelError;
use crate::models::modal::{ButtonCallback, ButtonSpec, ModalRequest};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Hidden,
    FadingIn,
    Shown,
    FadingOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FadeCompletion {
    Shown,
    Hidden,
}

#[derive(Debug)]
pub struct Modal {
    fade: Animated<FadeCompletion>,
    phase: ModalPhase,
    body: String,
    buttons: Vec<ButtonSpec>,
    footer_visible: bool,
}

impl Modal {
    pub(crate) fn new() -> Self {
        Self {
            fade: Animated::settled(0.0),
            phase: ModalPhase::Hidden,
            body: String::new(),
            buttons: Vec::new(),
            footer_visible: false,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase != ModalPhase::Hidden
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn buttons(&self) -> &[ButtonSpec] {
        &self.buttons
    }

    pub fn footer_visible(&self) -> bool {
        self.footer_visible
    }

    pub fn opacity_at(&self, now: Instant) -> f32 {
        self.fade.value_at(now)
    }

    pub fn is_animating(&self) -> bool {
        self.fade.is_pending()
    }

    /// Replace content and fade in. Returns the button count.
    pub(crate) fn present(&mut self, request: ModalRequest, now: Instant, fade: Duration) -> usize {
        self.body = request.body;
        self.buttons = request.buttons;
        self.footer_visible = !self.buttons.is_empty();
        self.finish_interrupted(now);
        self.fade.animate(1.0, now, fade, FadeCompletion::Shown);
        self.phase = ModalPhase::FadingIn;
        self.buttons.len()
    }

    /// Clear content and fade out. Returns `false` when already hidden.
    pub(crate) fn close(&mut self, now: Instant, fade: Duration) -> bool {
        self.body.clear();
        self.buttons.clear();
        self.footer_visible = false;
        if matches!(self.phase, ModalPhase::Hidden | ModalPhase::FadingOut) {
            return false;
        }
        self.finish_interrupted(now);
        self.fade.animate(0.0, now, fade, FadeCompletion::Hidden);
        self.phase = ModalPhase::FadingOut;
        true
    }

    fn finish_interrupted(&mut self, now: Instant) {
        if let Some(completion) = self.fade.stop(now, StopMode::JumpToEnd) {
            self.settle(completion);
        }
    }

    pub(crate) fn poll(&mut self, now: Instant) -> Option<FadeCompletion> {
        let completion = self.fade.poll(now)?;
        self.settle(completion);
        Some(completion)
    }

    fn settle(&mut self, completion: FadeCompletion) {
        self.phase = match completion {
            FadeCompletion::Shown => ModalPhase::Shown,
            FadeCompletion::Hidden => ModalPhase::Hidden,
        };
    }

    /// Take the click handler of a visible footer button.
    ///
    /// # Errors
    /// [`PanelError::NoSuchButton`] when the footer is hidden or `index` is
    /// out of range.
    pub(crate) fn take_click(
        &mut self,
        index: usize,
    ) -> Result<(String, Option<ButtonCallback>), PanelError> {
        if !self.footer_visible || self.phase == ModalPhase::FadingOut {
            return Err(PanelError::NoSuchButton(index));
        }
        let button = self
            .buttons
            .get_mut(index)
            .ok_or(PanelError::NoSuchButton(index))?;
        Ok((button.label.clone(), button.take_callback()))
    }
}

//! Modal request models: body markup plus an optional row of footer buttons.

use crate::constants::{ALERT_DISMISS_LABEL, CONFIRM_ACCEPT_LABEL, CONFIRM_REJECT_LABEL};
use std::fmt;

/// Zero-argument click handler attached to a footer button.
///
/// Fires at most once: the modal closes right after any button click.
pub type ButtonCallback = Box<dyn FnOnce() + Send + 'static>;

/// One footer button: label, optional style class, optional click handler.
pub struct ButtonSpec {
    pub label: String,
    pub style_class: Option<String>,
    on_click: Option<ButtonCallback>,
}

impl ButtonSpec {
    /// Button that only dismisses the modal.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style_class: None,
            on_click: None,
        }
    }

    /// Attach a style class used by the renderer to pick button visuals.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.style_class = Some(class.into());
        self
    }

    /// Attach a click handler invoked before the modal closes.
    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn has_callback(&self) -> bool {
        self.on_click.is_some()
    }

    pub(crate) fn take_callback(&mut self) -> Option<ButtonCallback> {
        self.on_click.take()
    }
}

impl fmt::Debug for ButtonSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonSpec")
            .field("label", &self.label)
            .field("style_class", &self.style_class)
            .field("on_click", &self.on_click.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

/// Content for one modal presentation. Discarded once the modal closes.
#[derive(Debug, Default)]
pub struct ModalRequest {
    /// HTML fragment inserted as-is.
    pub body: String,
    pub buttons: Vec<ButtonSpec>,
}

/// Wrap plain text in a paragraph element, unescaped.
pub fn paragraph(message: &str) -> String {
    format!("<p>{}</p>", message)
}

impl ModalRequest {
    /// Modal showing `body` with no footer.
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            buttons: Vec::new(),
        }
    }

    /// Modal showing `message` as a paragraph with no footer.
    pub fn message(message: &str) -> Self {
        Self::html(paragraph(message))
    }

    pub fn with_button(mut self, button: ButtonSpec) -> Self {
        self.buttons.push(button);
        self
    }

    /// Message plus a single dismiss button.
    pub fn alert(message: &str) -> Self {
        Self::message(message).with_button(ButtonSpec::new(ALERT_DISMISS_LABEL))
    }

    /// Message plus accept/reject buttons wired to the given handlers.
    pub fn confirm<A, R>(message: &str, on_accept: A, on_reject: R) -> Self
    where
        A: FnOnce() + Send + 'static,
        R: FnOnce() + Send + 'static,
    {
        Self::message(message)
            .with_button(
                ButtonSpec::new(CONFIRM_ACCEPT_LABEL)
                    .with_class("primary")
                    .on_click(on_accept),
            )
            .with_button(ButtonSpec::new(CONFIRM_REJECT_LABEL).on_click(on_reject))
    }
}

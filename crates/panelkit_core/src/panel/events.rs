//! Journal of observable panel transitions, drained by the front end.

/// One observable step of the panel state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    SidebarOpenRequested,
    SidebarCloseRequested,
    SidebarOpened,
    SidebarClosed,
    /// Modal content replaced and fade-in started.
    ModalPresented { buttons: usize },
    ModalShown,
    ModalCloseRequested,
    ModalHidden,
    OverlayShown,
    OverlayHidden,
    ButtonClicked { index: usize, label: String },
    ToastScheduled,
    ToastExpired,
    ToastCancelled,
    RemoteLoadFailed { url: String },
}

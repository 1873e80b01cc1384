use super::*;

#[test]
fn toggle_parity_decides_final_state() {
    for count in 0..7 {
        let mut harness = Harness::new();
        for _ in 0..count {
            let now = harness.now;
            harness.panel.toggle_menu(now);
            harness.settle();
        }
        assert_eq!(
            harness.panel.is_sidebar_open(),
            count % 2 == 1,
            "after {} toggles",
            count
        );
    }
}

#[test]
fn open_flag_flips_only_when_slide_completes() {
    let mut harness = Harness::new();
    let now = harness.now;
    harness.panel.toggle_menu(now);

    assert!(!harness.panel.is_sidebar_open());
    assert!(harness.panel.sidebar_visible());
    assert!(harness.panel.overlay_visible());

    harness.advance(ms(150));
    assert!(!harness.panel.is_sidebar_open());
    let offset = harness.panel.sidebar_offset_at(harness.now);
    assert!(offset > -250.0 && offset < 0.0, "offset {}", offset);

    harness.advance(ms(150));
    assert!(harness.panel.is_sidebar_open());
    assert_eq!(harness.panel.sidebar_offset_at(harness.now), 0.0);
    assert!(harness.events().contains(&PanelEvent::SidebarOpened));
}

#[test]
fn closing_a_closed_sidebar_reruns_without_showing_overlay() {
    let mut harness = Harness::new();
    let now = harness.now;
    harness.panel.close_sidebar(now);
    assert!(harness.panel.is_animating());
    harness.settle();

    let events = harness.events();
    assert!(events.contains(&PanelEvent::SidebarCloseRequested));
    assert!(events.contains(&PanelEvent::SidebarClosed));
    assert!(!events.contains(&PanelEvent::OverlayShown));
    assert_eq!(harness.panel.sidebar_state(), SidebarState::Closed);
    assert!(!harness.panel.is_animating());
}

#[test]
fn closing_open_sidebar_hides_overlay_on_completion() {
    let mut harness = Harness::new();
    let now = harness.now;
    harness.panel.open_sidebar(now);
    harness.settle();
    harness.events();

    let now = harness.now;
    harness.panel.close_sidebar(now);
    assert!(harness.panel.overlay_visible());
    harness.advance(ms(300));

    assert!(!harness.panel.is_sidebar_open());
    assert!(!harness.panel.overlay_visible());
    let events = harness.events();
    let closed = position(&events, &PanelEvent::SidebarClosed).expect("closed");
    let hidden = position(&events, &PanelEvent::OverlayHidden).expect("overlay hidden");
    assert!(closed < hidden);
}

#[test]
fn opening_sidebar_closes_visible_modal_first() {
    let mut harness = Harness::new();
    let now = harness.now;
    harness.panel.show_alert("Heads up", now);
    harness.settle();
    assert!(harness.panel.modal_visible());
    harness.events();

    let now = harness.now;
    harness.panel.open_sidebar(now);
    let events = harness.events();
    assert_eq!(
        events[..2],
        [PanelEvent::SidebarOpenRequested, PanelEvent::ModalCloseRequested]
    );
    assert!(harness.panel.modal_body().is_empty());

    harness.settle();
    assert!(!harness.panel.modal_visible());
    assert!(harness.panel.is_sidebar_open());
    assert!(harness.panel.overlay_visible());
}

#[test]
fn opening_sidebar_supersedes_queued_modal() {
    let mut harness = Harness::new();
    let now = harness.now;
    harness.panel.show_alert("never shown", now);
    harness.advance(ms(100));
    let now = harness.now;
    harness.panel.open_sidebar(now);
    harness.settle();

    assert!(harness.panel.is_sidebar_open());
    assert!(!harness.panel.modal_visible());
    assert!(!harness
        .events()
        .iter()
        .any(|event| matches!(event, PanelEvent::ModalPresented { .. })));
}

#[test]
fn close_interrupting_open_settles_open_first() {
    let mut harness = Harness::new();
    let now = harness.now;
    harness.panel.open_sidebar(now);
    harness.advance(ms(100));
    harness.events();

    let now = harness.now;
    harness.panel.close_sidebar(now);
    let events = harness.events();
    assert_eq!(
        events[..2],
        [PanelEvent::SidebarCloseRequested, PanelEvent::SidebarOpened]
    );
    assert!(harness.panel.is_sidebar_open());
    assert_eq!(harness.panel.sidebar_offset_at(harness.now), 0.0);

    harness.settle();
    assert!(!harness.panel.is_sidebar_open());
    assert!(!harness.panel.overlay_visible());
}

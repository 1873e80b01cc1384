use super::*;

#[test]
fn confirm_accept_reports_decision_and_closes() {
    let mut harness = make_app();
    harness.app.show_confirm("Continue?", harness.now);
    harness.settle();
    assert_eq!(harness.modal_text(), "<p>Continue?</p>");
    assert_eq!(harness.app.panel.modal_buttons().len(), 2);

    harness.app.click_modal_button(0, harness.now);
    harness.settle();
    assert_eq!(harness.app.status_text(), Some("Confirmed."));
    assert!(!harness.app.panel.modal_visible());
    assert!(!harness.app.panel.overlay_visible());
}

#[test]
fn confirm_reject_reports_decision() {
    let mut harness = make_app();
    harness.app.show_confirm("Continue?", harness.now);
    harness.settle();

    harness.app.click_modal_button(1, harness.now);
    harness.settle();
    assert_eq!(harness.app.status_text(), Some("Cancelled."));
    assert!(!harness.app.panel.modal_visible());
}

#[test]
fn alert_dismisses_and_bad_index_is_ignored() {
    let mut harness = make_app();
    harness.app.show_alert("Heads up", harness.now);
    harness.settle();

    harness.app.click_modal_button(3, harness.now);
    harness.settle();
    assert!(harness.app.panel.modal_visible());

    harness.app.click_modal_button(0, harness.now);
    harness.settle();
    assert!(!harness.app.panel.modal_visible());
}

#[test]
fn toast_closes_itself_and_schedules_a_wakeup() {
    let mut harness = make_app();
    harness.app.show_toast("Saved.", harness.now);
    harness.settle();
    assert!(harness.app.panel.modal_visible());
    assert!(!harness.app.panel.footer_visible());

    let wake = harness
        .app
        .repaint_after(harness.now)
        .expect("toast deadline wakes the UI");
    assert!(wake > Duration::ZERO && wake <= ms(2000));

    harness.advance(ms(1000));
    harness.settle();
    assert!(!harness.app.panel.modal_visible());
    assert!(!harness.app.panel.overlay_visible());
}

#[test]
fn menu_action_closes_sidebar_before_presenting() {
    let mut harness = make_app();
    harness.app.toggle_menu(harness.now);
    harness.settle();

    harness.app.run_menu_action(MenuAction::Alert, harness.now);
    assert!(!harness.app.panel.modal_visible());
    harness.settle();
    assert!(!harness.app.panel.is_sidebar_open());
    assert!(harness.app.panel.modal_visible());
    assert!(harness.app.panel.overlay_visible());
}

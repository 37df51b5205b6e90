use topicboard::ui::{DeleteController, DeleteCycle};

#[test]
fn test_starts_idle() {
    let controller = DeleteController::new();
    assert_eq!(controller.cycle(), DeleteCycle::Idle);
    assert!(controller.pending().is_none());
    assert!(!controller.is_requesting());
}

#[test]
fn test_capture_then_confirm() {
    let mut controller = DeleteController::new();

    controller.capture_intent("42".to_string());
    assert_eq!(controller.cycle(), DeleteCycle::AwaitingConfirmation);
    assert_eq!(controller.pending(), Some("42"));

    let confirmed = controller.confirm();
    assert_eq!(confirmed.as_deref(), Some("42"));
    assert_eq!(controller.cycle(), DeleteCycle::Requesting);
    assert!(controller.is_requesting());
    assert!(controller.pending().is_none());
}

#[test]
fn test_confirm_without_intent_is_noop() {
    let mut controller = DeleteController::new();

    assert!(controller.confirm().is_none());
    assert_eq!(controller.cycle(), DeleteCycle::Idle);
    assert!(!controller.is_requesting());
}

#[test]
fn test_second_capture_overwrites_first() {
    let mut controller = DeleteController::new();

    controller.capture_intent("first".to_string());
    controller.capture_intent("second".to_string());

    // Last write wins, no queue
    assert_eq!(controller.pending(), Some("second"));
    assert_eq!(controller.confirm().as_deref(), Some("second"));
    // The first intent was dropped entirely
    assert!(controller.confirm().is_none());
}

#[test]
fn test_abandon_clears_intent() {
    let mut controller = DeleteController::new();

    controller.capture_intent("42".to_string());
    controller.abandon();

    assert_eq!(controller.cycle(), DeleteCycle::Idle);
    assert!(controller.confirm().is_none());
}

#[test]
fn test_finish_request_releases_busy() {
    let mut controller = DeleteController::new();

    controller.capture_intent("42".to_string());
    controller.confirm();
    assert!(controller.is_requesting());

    controller.finish_request();
    assert!(!controller.is_requesting());
    assert_eq!(controller.cycle(), DeleteCycle::Idle);
}

#[test]
fn test_capture_while_requesting() {
    let mut controller = DeleteController::new();

    controller.capture_intent("old".to_string());
    controller.confirm();

    // A fresh intent during the in-flight request starts a new cycle but
    // leaves the busy state alone
    controller.capture_intent("new".to_string());
    assert_eq!(controller.cycle(), DeleteCycle::AwaitingConfirmation);
    assert!(controller.is_requesting());

    // Confirming during that window acts on the newer id
    assert_eq!(controller.confirm().as_deref(), Some("new"));
}

#[test]
fn test_abandon_does_not_release_busy() {
    let mut controller = DeleteController::new();

    controller.capture_intent("42".to_string());
    controller.confirm();
    controller.abandon();

    // Dismissing the dialog never cancels the in-flight request
    assert!(controller.is_requesting());
}

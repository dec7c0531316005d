use portal::services::demo_classes::DemoClassStatus;

use super::*;

#[test]
fn requested_classes_can_be_confirmed_or_declined() {
    assert_eq!(
        next_statuses(DemoClassStatus::Requested),
        &[DemoClassStatus::Scheduled, DemoClassStatus::Cancelled]
    );
}

#[test]
fn closed_classes_have_no_actions() {
    assert!(next_statuses(DemoClassStatus::Completed).is_empty());
    assert!(next_statuses(DemoClassStatus::Cancelled).is_empty());
}

#[test]
fn confirming_requires_meeting_link() {
    assert_eq!(
        status_change("d1", DemoClassStatus::Scheduled, "  "),
        Err("Add a meeting link before confirming.")
    );
    let change = status_change("d1", DemoClassStatus::Scheduled, " https://meet.test/abc ").unwrap();
    assert_eq!(change.meeting_url.as_deref(), Some("https://meet.test/abc"));
    assert_eq!(change.status, DemoClassStatus::Scheduled);
}

#[test]
fn other_transitions_ignore_link() {
    let change = status_change("d1", DemoClassStatus::Completed, "https://meet.test/abc").unwrap();
    assert_eq!(change, StatusChange { class_id: "d1".to_owned(), status: DemoClassStatus::Completed, meeting_url: None });
}

#[test]
fn action_labels() {
    assert_eq!(action_label(DemoClassStatus::Scheduled), "Confirm");
    assert_eq!(action_label(DemoClassStatus::Completed), "Mark completed");
}

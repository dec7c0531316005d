use portal::services::tutors::TutorStatus;

use super::*;

#[test]
fn pending_tutors_can_be_approved_or_rejected() {
    assert_eq!(moderation_actions(TutorStatus::Pending), &[TutorStatus::Approved, TutorStatus::Rejected]);
}

#[test]
fn approved_tutors_can_only_be_suspended() {
    assert_eq!(moderation_actions(TutorStatus::Approved), &[TutorStatus::Suspended]);
}

#[test]
fn suspended_and_rejected_tutors_can_be_reinstated() {
    assert_eq!(moderation_actions(TutorStatus::Suspended), &[TutorStatus::Approved]);
    assert_eq!(moderation_actions(TutorStatus::Rejected), &[TutorStatus::Approved]);
}

#[test]
fn status_filter_round_trips_select_values() {
    assert_eq!(parse_status_filter("approved"), Some(TutorStatus::Approved));
    assert_eq!(parse_status_filter(""), None);
    assert_eq!(parse_status_filter("bogus"), None);
    assert_eq!(filter_value(Some(TutorStatus::Pending)), "pending");
    assert_eq!(filter_value(None), "");
}

#[test]
fn moderation_labels() {
    assert_eq!(moderation_label(TutorStatus::Approved), "Approve");
    assert_eq!(moderation_label(TutorStatus::Suspended), "Suspend");
}

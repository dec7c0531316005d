use portal::ApiError;

use super::*;

#[test]
fn finish_replaces_items_and_clears_error() {
    let mut state = ListState { items: vec![1], loading: false, error: Some("old".to_owned()) };
    state.begin();
    assert!(state.loading);
    state.finish(Ok(vec![2, 3]));
    assert_eq!(state.items, vec![2, 3]);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn failure_keeps_previous_items() {
    let mut state = ListState { items: vec!["a"], loading: true, error: None };
    state.finish(Err(ApiError::Server { status: 503, message: None }));
    assert_eq!(state.items, vec!["a"]);
    assert_eq!(state.error.as_deref(), Some("server error (503)"));
}

#[test]
fn unauthorized_failure_shows_no_message() {
    let mut state = ListState::<u8>::default();
    state.finish(Err(ApiError::Unauthorized { message: None }));
    assert!(state.error.is_none());
    assert!(state.is_empty());
}

#[test]
fn transport_failures_get_friendly_messages() {
    assert_eq!(
        failure_message(&ApiError::Timeout).as_deref(),
        Some("The server took too long to respond. Try again.")
    );
    assert_eq!(
        failure_message(&ApiError::Network("dns".to_owned())).as_deref(),
        Some("Could not reach the server. Check your connection.")
    );
}

#[test]
fn rejection_shows_server_message() {
    let error = ApiError::Rejected { status: 409, message: "Category already exists".to_owned() };
    assert_eq!(failure_message(&error).as_deref(), Some("Category already exists"));
}

use std::sync::Mutex as StdMutex;

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::store::{TOKEN_KEY, USER_KEY};
use crate::testing::{MockTransport, client, ok, user};

fn controller() -> (SessionController<MockTransport, crate::store::MemoryStorage>, MockTransport) {
    let (client, transport) = client();
    (SessionController::new(client), transport)
}

fn auth_ok(token: &str, user: &User) -> serde_json::Value {
    ok(json!({ "token": token, "user": user }))
}

// =============================================================
// restore
// =============================================================

#[test]
fn starts_uninitialized_and_loading() {
    let (controller, _) = controller();
    let session = controller.session();
    assert_eq!(session.phase(), SessionPhase::Uninitialized);
    assert!(session.is_loading());
    assert!(session.user().is_none());
}

#[test]
fn restore_with_stored_pair_authenticates_without_network() {
    let (controller, transport) = controller();
    let storage = controller.client().store().storage();
    storage.set(TOKEN_KEY, "abc");
    storage.set(USER_KEY, r#"{"role":"tutor"}"#);

    assert_eq!(controller.restore(), SessionPhase::Authenticated);
    let session = controller.session();
    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(Role::Tutor));
    assert!(transport.requests().is_empty());
}

#[test]
fn restore_with_empty_store_is_anonymous() {
    let (controller, _) = controller();
    assert_eq!(controller.restore(), SessionPhase::Anonymous);
    assert!(!controller.session().is_loading());
}

#[test]
fn restore_with_corrupt_user_is_anonymous() {
    let (controller, _) = controller();
    let storage = controller.client().store().storage();
    storage.set(TOKEN_KEY, "abc");
    storage.set(USER_KEY, "][");
    assert_eq!(controller.restore(), SessionPhase::Anonymous);
}

#[test]
fn restore_runs_only_once() {
    let (controller, _) = controller();
    assert_eq!(controller.restore(), SessionPhase::Anonymous);
    controller.client().store().save("late", &user("u1", Role::Student));
    assert_eq!(controller.restore(), SessionPhase::Anonymous);
}

#[test]
fn restore_passes_through_restoring_phase() {
    let (controller, _) = controller();
    let seen = Arc::new(StdMutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    controller.subscribe(move |session| sink.lock().unwrap().push(session.phase()));
    controller.restore();
    assert_eq!(
        *seen.lock().unwrap(),
        vec![SessionPhase::Uninitialized, SessionPhase::Restoring, SessionPhase::Anonymous]
    );
}

// =============================================================
// sign_in / sign_up
// =============================================================

#[test]
fn sign_in_success_persists_pair_and_authenticates() {
    let (controller, transport) = controller();
    controller.restore();
    let student = user("s1", Role::Student);
    transport.respond(200, auth_ok("tok-s1", &student));

    let signed_in = block_on(controller.sign_in("s1@example.com", "pw")).unwrap();
    assert_eq!(signed_in, student);

    let session = controller.session();
    assert_eq!(session.phase(), SessionPhase::Authenticated);
    assert_eq!(session.user(), Some(&student));
    let stored = controller.client().store().load().unwrap();
    assert_eq!(stored.token, "tok-s1");
    assert_eq!(stored.user, student);

    let sent = &transport.requests()[0];
    assert_eq!(sent.url, "https://api.test/auth/login");
    assert_eq!(sent.body, Some(json!({ "email": "s1@example.com", "password": "pw" })));
}

#[test]
fn sign_in_with_wrong_password_surfaces_message_and_stays_anonymous() {
    let (controller, transport) = controller();
    controller.restore();
    transport.respond(401, json!({ "success": false, "error": "Invalid credentials" }));

    let err = block_on(controller.sign_in("a@b.com", "wrong")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");

    let session = controller.session();
    assert_eq!(session.phase(), SessionPhase::Anonymous);
    assert_eq!(session.error(), Some("Invalid credentials"));
    assert!(!session.is_expired());
    assert!(controller.client().store().storage().is_empty());
}

#[test]
fn sign_in_network_failure_leaves_no_partial_state() {
    let (controller, transport) = controller();
    controller.restore();
    transport.fail(crate::http::TransportError::Network("offline".to_owned()));

    let err = block_on(controller.sign_in("a@b.com", "pw")).unwrap_err();
    assert_eq!(err, AuthError::Api(ApiError::Network("offline".to_owned())));
    assert!(controller.client().store().storage().is_empty());
    assert!(controller.session().user().is_none());
}

#[test]
fn sign_in_with_empty_token_is_rejected() {
    let (controller, transport) = controller();
    controller.restore();
    transport.respond(200, auth_ok("", &user("u1", Role::Student)));
    let err = block_on(controller.sign_in("a@b.com", "pw")).unwrap_err();
    assert!(matches!(err, AuthError::Api(ApiError::Malformed(_))));
    assert!(controller.client().store().storage().is_empty());
}

#[test]
fn sign_in_shows_authenticating_while_in_flight() {
    let (controller, transport) = controller();
    controller.restore();
    let seen = Arc::new(StdMutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    controller.subscribe(move |session| sink.lock().unwrap().push(session.phase()));
    transport.respond(200, auth_ok("t", &user("u1", Role::Tutor)));

    block_on(controller.sign_in("u1@example.com", "pw")).unwrap();
    assert_eq!(
        *seen.lock().unwrap(),
        vec![SessionPhase::Anonymous, SessionPhase::Authenticating, SessionPhase::Authenticated]
    );
}

#[test]
fn sign_up_authenticates_new_account_immediately() {
    let (controller, transport) = controller();
    controller.restore();
    let tutor = user("t9", Role::Tutor);
    transport.respond(201, auth_ok("tok-t9", &tutor));

    let request = SignUpRequest {
        email: "t9@example.com".to_owned(),
        password: "secret".to_owned(),
        full_name: "Tess Nine".to_owned(),
        role: Role::Tutor,
    };
    let created = block_on(controller.sign_up(&request)).unwrap();
    assert_eq!(created, tutor);
    assert!(controller.session().is_authenticated());
    assert_eq!(controller.client().store().token().as_deref(), Some("tok-t9"));

    let sent = &transport.requests()[0];
    assert_eq!(sent.url, "https://api.test/auth/register");
    assert_eq!(
        sent.body,
        Some(json!({ "email": "t9@example.com", "password": "secret", "fullName": "Tess Nine", "role": "tutor" }))
    );
}

#[test]
fn sign_up_conflict_surfaces_message() {
    let (controller, transport) = controller();
    controller.restore();
    transport.respond(409, json!({ "success": false, "message": "Email already registered" }));
    let request = SignUpRequest {
        email: "dup@example.com".to_owned(),
        password: "pw".to_owned(),
        full_name: "Dup".to_owned(),
        role: Role::Student,
    };
    let err = block_on(controller.sign_up(&request)).unwrap_err();
    assert_eq!(err.to_string(), "Email already registered");
    assert_eq!(controller.session().phase(), SessionPhase::Anonymous);
}

// =============================================================
// sign_out / forced logout
// =============================================================

#[test]
fn sign_out_clears_store_and_session() {
    let (controller, transport) = controller();
    controller.restore();
    transport.respond(200, auth_ok("t", &user("u1", Role::Admin)));
    block_on(controller.sign_in("u1@example.com", "pw")).unwrap();

    controller.sign_out();
    assert_eq!(controller.session(), Session::anonymous());
    assert_eq!(controller.client().store().load(), None);
}

#[test]
fn sign_out_twice_matches_once() {
    let (controller, _) = controller();
    controller.client().store().save("t", &user("u1", Role::Student));
    controller.restore();

    controller.sign_out();
    let once = (controller.session(), controller.client().store().load());
    controller.sign_out();
    let twice = (controller.session(), controller.client().store().load());
    assert_eq!(once, twice);
    assert_eq!(twice.0.phase(), SessionPhase::Anonymous);
}

#[test]
fn unauthorized_service_call_forces_logout() {
    let (controller, transport) = controller();
    controller.client().store().save("stale", &user("u1", Role::Student));
    controller.restore();
    transport.respond(401, json!({ "success": false, "message": "token expired" }));

    let result = block_on(crate::services::courses::list(controller.client(), &Default::default()));
    assert!(result.unwrap_err().is_unauthorized());

    let session = controller.session();
    assert_eq!(session.phase(), SessionPhase::Anonymous);
    assert!(session.is_expired());
    assert_eq!(controller.client().store().load(), None);
}

#[test]
fn next_sign_in_clears_expired_flag() {
    let (controller, transport) = controller();
    controller.client().store().save("stale", &user("u1", Role::Student));
    controller.restore();
    transport.respond(401, json!({ "success": false }));
    assert!(block_on(crate::services::categories::list(controller.client())).is_err());
    assert!(controller.session().is_expired());

    transport.respond(200, auth_ok("fresh", &user("u1", Role::Student)));
    block_on(controller.sign_in("u1@example.com", "pw")).unwrap();
    assert!(!controller.session().is_expired());
}

// =============================================================
// ordering
// =============================================================

#[test]
fn sign_out_wins_over_in_flight_sign_in() {
    let (controller, _) = controller();
    controller.restore();
    let ticket = controller.begin_authenticating();
    controller.sign_out();

    let late = AuthPayload { token: "late".to_owned(), user: user("u1", Role::Student) };
    let result = controller.finish_authenticating(ticket, Ok(late));
    assert_eq!(result, Err(AuthError::Superseded));
    assert_eq!(controller.session(), Session::anonymous());
    assert!(controller.client().store().storage().is_empty());
}

#[test]
fn newest_sign_in_wins_over_older_one() {
    let (controller, _) = controller();
    controller.restore();
    let first = controller.begin_authenticating();
    let second = controller.begin_authenticating();

    let newer = AuthPayload { token: "second".to_owned(), user: user("u2", Role::Tutor) };
    controller.finish_authenticating(second, Ok(newer)).unwrap();

    let older = AuthPayload { token: "first".to_owned(), user: user("u1", Role::Student) };
    assert_eq!(controller.finish_authenticating(first, Ok(older)), Err(AuthError::Superseded));

    assert_eq!(controller.session().role(), Some(Role::Tutor));
    assert_eq!(controller.client().store().token().as_deref(), Some("second"));
}

#[test]
fn failed_re_sign_in_keeps_existing_session() {
    let (controller, transport) = controller();
    let admin = user("a1", Role::Admin);
    controller.client().store().save("tok", &admin);
    controller.restore();
    transport.respond(401, json!({ "success": false, "error": "Invalid credentials" }));

    assert!(block_on(controller.sign_in("other@example.com", "bad")).is_err());
    let session = controller.session();
    assert_eq!(session.user(), Some(&admin));
    assert_eq!(session.error(), Some("Invalid credentials"));
    assert_eq!(controller.client().store().token().as_deref(), Some("tok"));
}

#[test]
fn clones_share_session_state() {
    let (controller, _) = controller();
    let other = controller.clone();
    controller.client().store().save("t", &user("u1", Role::Tutor));
    controller.restore();
    assert!(other.session().is_authenticated());
    other.sign_out();
    assert!(!controller.session().is_authenticated());
}

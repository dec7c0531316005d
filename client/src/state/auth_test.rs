use portal::guard::paths;
use portal::{Role, Session, User};

use super::*;

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        full_name: "Ada".to_owned(),
        role,
        avatar_url: None,
    }
}

#[test]
fn default_auth_state_is_loading_free_and_anonymous() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn default_auth_state_holds_guarded_pages() {
    // The wrapped session is still uninitialized, which guards treat as loading.
    assert_eq!(AuthState::default().decision(&PageAccess::student()), GuardDecision::Loading);
}

#[test]
fn projection_copies_user_and_loading() {
    let state = AuthState::from(&Session::authenticated(user(Role::Tutor)));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
    assert!(!state.loading);
    assert_eq!(state.role(), Some(Role::Tutor));
    assert!(state.is_authenticated());
}

#[test]
fn restoring_session_projects_as_loading() {
    let state = AuthState::from(&Session::restoring());
    assert!(state.loading);
    assert_eq!(state.decision(&PageAccess::tutor()), GuardDecision::Loading);
}

#[test]
fn decision_redirects_wrong_role_to_its_landing() {
    let state = AuthState::from(&Session::authenticated(user(Role::Student)));
    assert_eq!(state.decision(&PageAccess::admin_tier()), GuardDecision::Redirect(paths::STUDENT_HOME));
    assert_eq!(state.decision(&PageAccess::student()), GuardDecision::Render);
}

#[test]
fn anonymous_session_redirects_to_entry() {
    let state = AuthState::from(&Session::anonymous());
    assert_eq!(state.decision(&PageAccess::admin_tier()), GuardDecision::Redirect(paths::ADMIN_LOGIN));
}

use super::*;
use crate::testing::user;

fn signed_in(role: Role) -> Session {
    Session::authenticated(user("u1", role))
}

#[test]
fn public_pages_always_render() {
    for session in [Session::default(), Session::restoring(), Session::anonymous(), signed_in(Role::Tutor)] {
        assert_eq!(evaluate(&session, &PageAccess::public()), GuardDecision::Render);
    }
}

#[test]
fn loading_sessions_show_placeholder() {
    let admin_page = PageAccess::admin_tier();
    assert_eq!(evaluate(&Session::default(), &admin_page), GuardDecision::Loading);
    assert_eq!(evaluate(&Session::restoring(), &admin_page), GuardDecision::Loading);
    assert_eq!(
        evaluate(&Session::authenticating(Some(user("s1", Role::Student))), &admin_page),
        GuardDecision::Loading
    );
}

#[test]
fn anonymous_visitor_goes_to_portal_entry() {
    let anonymous = Session::anonymous();
    assert_eq!(evaluate(&anonymous, &PageAccess::student()), GuardDecision::Redirect(paths::LOGIN));
    assert_eq!(evaluate(&anonymous, &PageAccess::tutor()), GuardDecision::Redirect(paths::LOGIN));
    assert_eq!(
        evaluate(&anonymous, &PageAccess::admin_tier()),
        GuardDecision::Redirect(paths::ADMIN_LOGIN)
    );
}

#[test]
fn student_on_admin_page_is_sent_to_student_portal() {
    assert_eq!(
        evaluate(&signed_in(Role::Student), &PageAccess::admin_tier()),
        GuardDecision::Redirect(paths::STUDENT_HOME)
    );
}

#[test]
fn student_never_renders_admin_page_outside_loading() {
    let student = user("s1", Role::Student);
    let sessions = [Session::anonymous(), Session::authenticated(student)];
    for session in sessions {
        assert!(matches!(evaluate(&session, &PageAccess::admin_tier()), GuardDecision::Redirect(_)));
    }
}

#[test]
fn tutor_on_admin_page_is_sent_to_tutor_portal() {
    assert_eq!(
        evaluate(&signed_in(Role::Tutor), &PageAccess::admin_tier()),
        GuardDecision::Redirect(paths::TUTOR_HOME)
    );
}

#[test]
fn staff_on_student_page_is_sent_to_admin_portal() {
    for role in [Role::Admin, Role::Manager, Role::SuperAdmin] {
        assert_eq!(
            evaluate(&signed_in(role), &PageAccess::student()),
            GuardDecision::Redirect(paths::ADMIN_HOME)
        );
    }
}

#[test]
fn matching_roles_render() {
    assert_eq!(evaluate(&signed_in(Role::Student), &PageAccess::student()), GuardDecision::Render);
    assert_eq!(evaluate(&signed_in(Role::Tutor), &PageAccess::tutor()), GuardDecision::Render);
    for role in [Role::Admin, Role::Manager, Role::SuperAdmin] {
        assert_eq!(evaluate(&signed_in(role), &PageAccess::admin_tier()), GuardDecision::Render);
    }
}

#[test]
fn any_authenticated_policy_admits_every_role() {
    for role in Role::ALL {
        assert_eq!(evaluate(&signed_in(role), &PageAccess::signed_in()), GuardDecision::Render);
    }
    assert_eq!(
        evaluate(&Session::anonymous(), &PageAccess::signed_in()),
        GuardDecision::Redirect(paths::LOGIN)
    );
}

#[test]
fn staff_subset_excludes_other_admin_tiers() {
    let page = PageAccess::staff(&[Role::SuperAdmin]);
    assert_eq!(evaluate(&signed_in(Role::SuperAdmin), &page), GuardDecision::Render);
    assert_eq!(evaluate(&signed_in(Role::Manager), &page), GuardDecision::Redirect(paths::ADMIN_HOME));
}

#[test]
fn landing_pages_per_role() {
    assert_eq!(landing_for(Role::Student), "/student");
    assert_eq!(landing_for(Role::Tutor), "/tutor");
    assert_eq!(landing_for(Role::Manager), "/admin");
}

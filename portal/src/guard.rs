//! Role-gated page access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages declare a [`PageAccess`]; the UI evaluates it against the current
//! [`Session`] every time the session changes and either renders, shows a
//! placeholder, or navigates. Keeping the decision pure lets both portals and
//! tests share one policy table.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::Session;
use crate::types::Role;

/// Fixed redirect targets.
pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const SIGNUP: &str = "/signup";
    pub const ADMIN_LOGIN: &str = "/admin/login";
    pub const STUDENT_HOME: &str = "/student";
    pub const TUTOR_HOME: &str = "/tutor";
    pub const ADMIN_HOME: &str = "/admin";
}

/// Who may see a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessPolicy {
    Public,
    Authenticated,
    Roles(&'static [Role]),
    AdminTier,
}

impl AccessPolicy {
    #[must_use]
    pub fn allows(self, role: Role) -> bool {
        match self {
            AccessPolicy::Public | AccessPolicy::Authenticated => true,
            AccessPolicy::Roles(roles) => roles.contains(&role),
            AccessPolicy::AdminTier => role.is_admin_tier(),
        }
    }
}

/// A page's policy plus where anonymous visitors are sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageAccess {
    pub policy: AccessPolicy,
    pub entry: &'static str,
}

impl PageAccess {
    #[must_use]
    pub const fn new(policy: AccessPolicy, entry: &'static str) -> Self {
        Self { policy, entry }
    }

    #[must_use]
    pub const fn public() -> Self {
        Self::new(AccessPolicy::Public, paths::HOME)
    }

    #[must_use]
    pub const fn signed_in() -> Self {
        Self::new(AccessPolicy::Authenticated, paths::LOGIN)
    }

    #[must_use]
    pub const fn student() -> Self {
        Self::new(AccessPolicy::Roles(&[Role::Student]), paths::LOGIN)
    }

    #[must_use]
    pub const fn tutor() -> Self {
        Self::new(AccessPolicy::Roles(&[Role::Tutor]), paths::LOGIN)
    }

    #[must_use]
    pub const fn admin_tier() -> Self {
        Self::new(AccessPolicy::AdminTier, paths::ADMIN_LOGIN)
    }

    /// Admin-portal page restricted to a subset of staff roles.
    #[must_use]
    pub const fn staff(roles: &'static [Role]) -> Self {
        Self::new(AccessPolicy::Roles(roles), paths::ADMIN_LOGIN)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Loading,
    Redirect(&'static str),
}

/// Default landing page of a role's own portal.
#[must_use]
pub fn landing_for(role: Role) -> &'static str {
    match role {
        Role::Student => paths::STUDENT_HOME,
        Role::Tutor => paths::TUTOR_HOME,
        Role::Admin | Role::Manager | Role::SuperAdmin => paths::ADMIN_HOME,
    }
}

/// Decide what a page should do for `session`.
#[must_use]
pub fn evaluate(session: &Session, access: &PageAccess) -> GuardDecision {
    if access.policy == AccessPolicy::Public {
        return GuardDecision::Render;
    }
    if session.is_loading() {
        return GuardDecision::Loading;
    }
    let Some(role) = session.role() else {
        return GuardDecision::Redirect(access.entry);
    };
    if access.policy.allows(role) {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(landing_for(role))
    }
}

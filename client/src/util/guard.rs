//! Route guard and session-expiry redirects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page declares a [`PageAccess`] and goes through
//! [`install_role_guard`], so anonymous and wrong-role visitors are handled
//! identically everywhere. The decision itself is `portal::guard::evaluate`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use portal::guard::{GuardDecision, PageAccess, landing_for, paths};

use crate::state::auth::AuthState;

/// Track the guard decision for `access` and navigate whenever it says redirect.
pub fn install_role_guard<F>(auth: RwSignal<AuthState>, access: PageAccess, navigate: F) -> Memo<GuardDecision>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let decision = Memo::new(move |_| auth.with(|state| state.decision(&access)));
    Effect::new(move || {
        if let GuardDecision::Redirect(target) = decision.get() {
            navigate(target, replace());
        }
    });
    decision
}

/// Send already signed-in visitors of a sign-in page to their own portal.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = auth.with(signed_in_landing) {
            navigate(target, replace());
        }
    });
}

/// Landing page for a settled, signed-in session.
pub fn signed_in_landing(state: &AuthState) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    state.is_authenticated().then(|| state.role().map(landing_for)).flatten()
}

/// Sign-in page to return to after a forced logout on `current_path`.
pub fn sign_in_entry_for(current_path: &str) -> &'static str {
    if current_path == paths::ADMIN_HOME || current_path.starts_with("/admin/") {
        paths::ADMIN_LOGIN
    } else {
        paths::LOGIN
    }
}

/// Text shown in place of a page whose guard has not said render.
pub fn placeholder_text(decision: GuardDecision) -> &'static str {
    match decision {
        GuardDecision::Render => "",
        GuardDecision::Loading => "Loading...",
        GuardDecision::Redirect(_) => "Redirecting...",
    }
}

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

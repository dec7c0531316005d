//! Header bar for the student, tutor, and admin portals.
//!
//! Shows who is signed in and owns the sign-out action.

#[cfg(test)]
#[path = "portal_header_test.rs"]
mod portal_header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use portal::Role;

use crate::state::auth::{AuthState, PortalSession};
use crate::util::guard::sign_in_entry_for;

#[component]
pub fn PortalHeader(
    title: &'static str,
    /// `(href, label)` pairs rendered as section links.
    #[prop(optional)]
    links: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<PortalSession>();
    let location = use_location();
    let navigate = use_navigate();

    let identity = move || {
        auth.get()
            .user
            .map(|user| (user.display_name().to_owned(), role_label(user.role)))
            .unwrap_or_default()
    };

    let on_sign_out = move |_| {
        let entry = sign_in_entry_for(&location.pathname.get_untracked());
        session.sign_out();
        navigate(entry, NavigateOptions::default());
    };

    view! {
        <header class="portal-header">
            <h1 class="portal-header__title">{title}</h1>
            <nav class="portal-header__nav">
                {links
                    .into_iter()
                    .map(|(href, label)| view! { <a class="portal-header__link" href=href>{label}</a> })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="portal-header__identity">
                <span class="portal-header__name">{move || identity().0}</span>
                <span class="portal-header__role">{move || identity().1}</span>
                <button class="btn" on:click=on_sign_out>"Sign out"</button>
            </div>
        </header>
    }
}

/// Human-readable role name for the header badge.
pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::Student => "Student",
        Role::Tutor => "Tutor",
        Role::Admin => "Admin",
        Role::Manager => "Manager",
        Role::SuperAdmin => "Super admin",
    }
}

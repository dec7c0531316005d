//! Sign-in pages: `/login` for students and tutors, `/admin/login` for staff.
//!
//! Both pages share one form; on success the signed-in redirect sends the
//! user to their role's landing page.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use portal::AuthError;
use portal::guard::paths;

use crate::state::auth::{AuthState, PortalSession};
use crate::state::listing::failure_message;
use crate::util::guard::install_signed_in_redirect;

const EXPIRED_NOTICE: &str = "Your session has expired. Please sign in again.";

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <SignInForm heading="Welcome back" subtitle="Sign in as a student or tutor" show_signup=true/> }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! { <SignInForm heading="TutorHub Admin" subtitle="Staff sign in" show_signup=false/> }
}

#[component]
fn SignInForm(heading: &'static str, subtitle: &'static str, show_signup: bool) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<PortalSession>();
    install_signed_in_redirect(auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_sign_in_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match session.sign_in(&email_value, &password_value).await {
                    Ok(_) => {
                        password.set(String::new());
                        info.set(String::new());
                    }
                    Err(error) => {
                        if let Some(message) = sign_in_failure(&error) {
                            info.set(message);
                        }
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{heading}</h1>
                <p class="login-card__subtitle">{subtitle}</p>
                <Show when=move || auth.with(|a| a.expired)>
                    <p class="login-message login-message--warning">{EXPIRED_NOTICE}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || show_signup>
                    <p class="login-card__footer">
                        "New here? "
                        <a href=paths::SIGNUP>"Create an account"</a>
                    </p>
                </Show>
            </div>
        </div>
    }
}

/// Trim and check the sign-in form before it reaches the backend.
pub fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Shape check only; the backend owns real validation.
pub(crate) fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !value.contains(char::is_whitespace),
        None => false,
    }
}

/// Message for a failed sign-in or sign-up; `None` when a newer attempt
/// replaced this one.
pub(crate) fn sign_in_failure(error: &AuthError) -> Option<String> {
    match error {
        AuthError::Superseded => None,
        AuthError::Api(api) => Some(failure_message(api).unwrap_or_else(|| api.to_string())),
    }
}

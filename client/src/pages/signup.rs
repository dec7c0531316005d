//! Registration page (`/signup`) for new students and tutors.
//!
//! Staff accounts are provisioned by the backend and cannot self-register.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use portal::Role;
use portal::guard::paths;
use portal::services::auth::SignUpRequest;

use super::sign_in::looks_like_email;
use crate::state::auth::{AuthState, PortalSession};
use crate::util::guard::install_signed_in_redirect;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Raw form values as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub role: Role,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm: String::new(),
            role: Role::Student,
        }
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<PortalSession>();
    install_signed_in_redirect(auth, use_navigate());

    let form = RwSignal::new(SignUpForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(validate_sign_up_input) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match session.sign_up(&request).await {
                    Ok(_) => info.set(String::new()),
                    Err(error) => {
                        if let Some(message) = super::sign_in::sign_in_failure(&error) {
                            info.set(message);
                        }
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, request);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Join TutorHub"</h1>
                <p class="login-card__subtitle">"Learn or teach, one demo class at a time"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || form.with(|f| f.confirm.clone())
                        on:input=move |ev| form.update(|f| f.confirm = event_target_value(&ev))
                    />
                    <div class="login-role">
                        <label>
                            <input
                                type="radio"
                                name="role"
                                prop:checked=move || form.with(|f| f.role == Role::Student)
                                on:change=move |_| form.update(|f| f.role = Role::Student)
                            />
                            "I want to learn"
                        </label>
                        <label>
                            <input
                                type="radio"
                                name="role"
                                prop:checked=move || form.with(|f| f.role == Role::Tutor)
                                on:change=move |_| form.update(|f| f.role = Role::Tutor)
                            />
                            "I want to teach"
                        </label>
                    </div>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href=paths::LOGIN>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

/// Check the form and build the registration payload.
pub fn validate_sign_up_input(form: &SignUpForm) -> Result<SignUpRequest, &'static str> {
    let full_name = form.full_name.trim();
    if full_name.is_empty() {
        return Err("Enter your full name.");
    }
    let email = form.email.trim();
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if form.password != form.confirm {
        return Err("Passwords do not match.");
    }
    if !matches!(form.role, Role::Student | Role::Tutor) {
        return Err("Choose whether you want to learn or teach.");
    }
    Ok(SignUpRequest {
        email: email.to_owned(),
        password: form.password.clone(),
        full_name: full_name.to_owned(),
        role: form.role,
    })
}

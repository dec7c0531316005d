//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin::AdminPage, admin_categories::CategoriesPage, admin_history::AuditLogPage, admin_media::MediaPage,
    admin_tutors::TutorsPage, home::HomePage, sign_in::AdminLoginPage, sign_in::LoginPage, signup::SignupPage,
    student::StudentPage, tutor::TutorPage,
};
use crate::state::auth::{AuthState, new_session};
use crate::util::guard::sign_in_entry_for;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session controller, mirrors its snapshots into the
/// `RwSignal<AuthState>` context, and restores any stored session once the
/// app is running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = new_session();
    let auth = RwSignal::new(AuthState::default());
    session.subscribe(move |snapshot| auth.set(AuthState::from(snapshot)));

    provide_context(session.clone());
    provide_context(auth);

    // Effects only run in the browser, where stored credentials exist.
    Effect::new(move || {
        session.restore();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/tutorhub.css"/>
        <Title text="TutorHub"/>

        <Router>
            <SessionExpiryRedirect/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("student") view=StudentPage/>
                <Route path=StaticSegment("tutor") view=TutorPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("categories")) view=CategoriesPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("tutors")) view=TutorsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("media")) view=MediaPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("history")) view=AuditLogPage/>
            </Routes>
        </Router>
    }
}

/// Sends the user to sign-in when the backend rejects the stored token.
///
/// Lives inside the router so it can navigate; the request client only
/// clears the session and raises the flag.
#[component]
fn SessionExpiryRedirect() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        if !auth.with(|a| a.expired) {
            return;
        }
        let entry = sign_in_entry_for(&location.pathname.get_untracked());
        if location.pathname.get_untracked() != entry {
            leptos::logging::warn!("session expired; redirecting to {entry}");
            navigate(entry, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

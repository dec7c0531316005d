//! Wrapper that renders its children only when the page guard allows it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use portal::guard::{GuardDecision, PageAccess};

use crate::state::auth::AuthState;
use crate::util::guard::{install_role_guard, placeholder_text};

/// Gate `children` behind `access`; shows a placeholder while loading or
/// redirecting.
#[component]
pub fn Guarded(access: PageAccess, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = install_role_guard(auth, access, use_navigate());

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                view! {
                    <div class="page-placeholder">
                        <p>{move || placeholder_text(decision.get())}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}

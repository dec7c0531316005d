//! Admin portal landing (`/admin`) and the navigation shared by admin pages.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use portal::Role;
use portal::guard::PageAccess;
use portal::services::categories::Category;
use portal::services::demo_classes::DemoClass;
use portal::services::tutors::{Tutor, TutorStatus};

use crate::components::guarded::Guarded;
use crate::components::portal_header::PortalHeader;
use crate::state::auth::{AuthState, PortalSession};
use crate::state::listing::ListState;

pub const CATEGORIES_PATH: &str = "/admin/categories";
pub const TUTORS_PATH: &str = "/admin/tutors";
pub const MEDIA_PATH: &str = "/admin/media";
pub const HISTORY_PATH: &str = "/admin/history";

/// The audit log is limited to senior staff.
pub const HISTORY_ACCESS: PageAccess = PageAccess::staff(&[Role::Manager, Role::SuperAdmin]);

/// Section links visible to `role` in the admin header.
pub fn admin_links(role: Option<Role>) -> Vec<(&'static str, &'static str)> {
    let mut links = vec![(CATEGORIES_PATH, "Categories"), (TUTORS_PATH, "Tutors"), (MEDIA_PATH, "Featured media")];
    if role.is_some_and(|r| HISTORY_ACCESS.policy.allows(r)) {
        links.push((HISTORY_PATH, "History"));
    }
    links
}

/// Admin header with the section links for the signed-in role.
#[component]
pub fn AdminHeader(title: &'static str) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let links = auth.with_untracked(|a| admin_links(a.role()));
    view! { <PortalHeader title=title links=links/> }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <Guarded access=PageAccess::admin_tier()>
            <AdminOverview/>
        </Guarded>
    }
}

#[component]
fn AdminOverview() -> impl IntoView {
    let session = expect_context::<PortalSession>();
    let tutors = RwSignal::new(ListState::<Tutor>::default());
    let categories = RwSignal::new(ListState::<Category>::default());
    let classes = RwSignal::new(ListState::<DemoClass>::default());

    #[cfg(feature = "hydrate")]
    {
        tutors.update(ListState::begin);
        categories.update(ListState::begin);
        classes.update(ListState::begin);
        leptos::task::spawn_local(async move {
            let client = session.client();
            let query = portal::services::tutors::TutorQuery {
                status: Some(TutorStatus::Pending),
                ..Default::default()
            };
            let result = portal::services::tutors::list(client, &query).await;
            tutors.update(|s| s.finish(result));
            let result = portal::services::categories::list(client).await;
            categories.update(|s| s.finish(result));
            let result = portal::services::demo_classes::list(client, &Default::default()).await;
            classes.update(|s| s.finish(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }

    let pending = move || tutors.with(|t| pending_count(&t.items));
    let open_classes = move || classes.with(|c| c.items.iter().filter(|d| d.status.is_open()).count());
    let active_categories = move || categories.with(|c| c.items.iter().filter(|c| c.is_active).count());

    view! {
        <div class="portal-page">
            <AdminHeader title="TutorHub Admin"/>
            <section class="stat-grid">
                <a class="stat-card" href=TUTORS_PATH>
                    <span class="stat-card__value">{pending}</span>
                    <span class="stat-card__label">"Tutors awaiting review"</span>
                </a>
                <a class="stat-card" href=CATEGORIES_PATH>
                    <span class="stat-card__value">{active_categories}</span>
                    <span class="stat-card__label">"Active categories"</span>
                </a>
                <div class="stat-card">
                    <span class="stat-card__value">{open_classes}</span>
                    <span class="stat-card__label">"Open demo classes"</span>
                </div>
            </section>
        </div>
    }
}

pub fn pending_count(tutors: &[Tutor]) -> usize {
    tutors.iter().filter(|t| t.status == TutorStatus::Pending).count()
}

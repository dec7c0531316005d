//! Public landing page (`/`): featured media carousel and subject catalogue.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use portal::guard::{landing_for, paths};
use portal::services::categories::Category;
use portal::services::media::{FeaturedMedia, MediaKind};

use crate::state::auth::{AuthState, PortalSession};
use crate::state::listing::ListState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<PortalSession>();
    let media = RwSignal::new(ListState::<FeaturedMedia>::default());
    let categories = RwSignal::new(ListState::<Category>::default());

    #[cfg(feature = "hydrate")]
    {
        media.update(ListState::begin);
        categories.update(ListState::begin);
        leptos::task::spawn_local(async move {
            let client = session.client();
            let result = portal::services::media::list_active(client).await;
            media.update(|s| s.finish(result));
            let result = portal::services::categories::list(client).await.map(visible_categories);
            categories.update(|s| s.finish(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }

    let portal_link = move || auth.with(|a| a.role().map(landing_for));

    view! {
        <div class="home-page">
            <header class="home-hero">
                <h1>"TutorHub"</h1>
                <p>"Find a tutor, book a free demo class, start learning."</p>
                <div class="home-hero__actions">
                    {move || match portal_link() {
                        Some(href) => view! { <a class="btn btn--primary" href=href>"Go to my portal"</a> }.into_any(),
                        None => view! {
                            <a class="btn btn--primary" href=paths::SIGNUP>"Get started"</a>
                            <a class="btn" href=paths::LOGIN>"Sign in"</a>
                        }
                        .into_any(),
                    }}
                </div>
            </header>
            <section class="home-media">
                {move || {
                    media
                        .get()
                        .items
                        .into_iter()
                        .map(|item| {
                            let href = item.link_url.clone().unwrap_or_else(|| item.url.clone());
                            view! {
                                <a class="media-card" href=href>
                                    <img src=preview_src(&item) alt=item.title.clone()/>
                                    <span class="media-card__title">{item.title}</span>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </section>
            <section class="home-categories">
                <h2>"Browse subjects"</h2>
                <Show when=move || categories.with(|c| c.error.is_some())>
                    <p class="page-error">{move || categories.get().error.unwrap_or_default()}</p>
                </Show>
                <div class="category-grid">
                    {move || {
                        categories
                            .get()
                            .items
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <div class="category-card">
                                        <span class="category-card__name">{category.name}</span>
                                        <span class="category-card__count">
                                            {tutor_count_label(category.tutor_count)}
                                        </span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>
        </div>
    }
}

/// Inactive categories stay hidden from the public catalogue.
pub fn visible_categories(mut categories: Vec<Category>) -> Vec<Category> {
    categories.retain(|c| c.is_active);
    categories.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    categories
}

/// Image shown for a media card; videos fall back to their thumbnail.
pub fn preview_src(item: &FeaturedMedia) -> String {
    match item.kind {
        MediaKind::Image => item.url.clone(),
        MediaKind::Video => item.thumbnail_url.clone().unwrap_or_default(),
    }
}

pub fn tutor_count_label(count: u32) -> String {
    match count {
        0 => "No tutors yet".to_owned(),
        1 => "1 tutor".to_owned(),
        n => format!("{n} tutors"),
    }
}

//! Audit log (`/admin/history`), paged and filterable by entity kind.

#[cfg(test)]
#[path = "admin_history_test.rs"]
mod admin_history_test;

use leptos::prelude::*;
use portal::services::history::{EntityKind, HistoryPage, HistoryQuery};

use super::admin::{AdminHeader, HISTORY_ACCESS};
use crate::components::guarded::Guarded;
use crate::state::auth::PortalSession;

#[component]
pub fn AuditLogPage() -> impl IntoView {
    view! {
        <Guarded access=HISTORY_ACCESS>
            <HistoryLog/>
        </Guarded>
    }
}

#[component]
fn HistoryLog() -> impl IntoView {
    let session = expect_context::<PortalSession>();
    let query = RwSignal::new(HistoryQuery::default());
    let page = RwSignal::new(None::<HistoryPage>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let current = query.get();
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match portal::services::history::list(session.client(), &current).await {
                    Ok(loaded) => {
                        page.set(Some(loaded));
                        error.set(None);
                    }
                    Err(e) => error.set(crate::state::listing::failure_message(&e)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, current);
        }
    });

    let has_more = move || page.with(|p| p.as_ref().is_some_and(HistoryPage::has_more));
    let on_prev = move |_| query.update(|q| q.page = q.page.saturating_sub(1).max(1));
    let on_next = move |_| query.update(|q| q.page += 1);

    view! {
        <div class="portal-page">
            <AdminHeader title="History"/>
            <section class="portal-section">
                <select
                    prop:value=move || query.with(|q| q.entity_type.map_or("", EntityKind::as_str))
                    on:change=move |ev| {
                        let kind = parse_entity_filter(&event_target_value(&ev));
                        query.update(|q| {
                            q.entity_type = kind;
                            q.page = 1;
                        });
                    }
                >
                    <option value="">"All records"</option>
                    {EntityKind::ALL
                        .into_iter()
                        .map(|kind| view! { <option value=kind.as_str()>{entity_label(kind)}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <Show when=move || error.with(Option::is_some)>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </section>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"When"</th>
                        <th>"Who"</th>
                        <th>"Action"</th>
                        <th>"Record"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        page.get()
                            .map(|p| p.entries)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|entry| {
                                let who = entry.actor_name.clone().unwrap_or_else(|| "system".to_owned());
                                let record = format!("{} {}", entity_label(entry.entity_type), entry.entity_id.clone().unwrap_or_default());
                                view! {
                                    <tr>
                                        <td>{entry.created_at}</td>
                                        <td>{who}</td>
                                        <td>{entry.description.unwrap_or(entry.action)}</td>
                                        <td>{record}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <div class="pager">
                <button class="btn" on:click=on_prev disabled=move || query.with(|q| q.page <= 1)>
                    "Previous"
                </button>
                <span>{move || page.with(|p| p.as_ref().map(page_summary).unwrap_or_default())}</span>
                <button class="btn" on:click=on_next disabled=move || !has_more()>
                    "Next"
                </button>
            </div>
        </div>
    }
}

pub fn parse_entity_filter(value: &str) -> Option<EntityKind> {
    EntityKind::ALL.into_iter().find(|kind| kind.as_str() == value)
}

pub fn entity_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Category => "Category",
        EntityKind::Tutor => "Tutor",
        EntityKind::Course => "Course",
        EntityKind::DemoClass => "Demo class",
        EntityKind::FeaturedMedia => "Featured media",
        EntityKind::User => "User",
    }
}

pub fn total_pages(total: u64, limit: u32) -> u64 {
    total.div_ceil(u64::from(limit.max(1))).max(1)
}

/// "Page 2 of 3 (41 entries)".
pub fn page_summary(page: &HistoryPage) -> String {
    format!("Page {} of {} ({} entries)", page.page, total_pages(page.total, page.limit), page.total)
}

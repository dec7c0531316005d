//! Tutor moderation (`/admin/tutors`).

#[cfg(test)]
#[path = "admin_tutors_test.rs"]
mod admin_tutors_test;

use leptos::prelude::*;
use portal::guard::PageAccess;
use portal::services::tutors::{Tutor, TutorQuery, TutorStatus};

use super::admin::AdminHeader;
use crate::components::guarded::Guarded;
use crate::state::auth::PortalSession;
use crate::state::listing::ListState;

const STATUS_FILTERS: [TutorStatus; 4] =
    [TutorStatus::Pending, TutorStatus::Approved, TutorStatus::Rejected, TutorStatus::Suspended];

#[component]
pub fn TutorsPage() -> impl IntoView {
    view! {
        <Guarded access=PageAccess::admin_tier()>
            <TutorModeration/>
        </Guarded>
    }
}

#[component]
fn TutorModeration() -> impl IntoView {
    let session = expect_context::<PortalSession>();
    let tutors = RwSignal::new(ListState::<Tutor>::default());
    let filter = RwSignal::new(Some(TutorStatus::Pending));
    let info = RwSignal::new(String::new());

    let reload = {
        let session = session.clone();
        move || {
            tutors.update(ListState::begin);
            let query = TutorQuery { status: filter.get_untracked(), ..TutorQuery::default() };
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    let result = portal::services::tutors::list(session.client(), &query).await;
                    tutors.update(|s| s.finish(result));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&session, query);
            }
        }
    };

    // Reload whenever the status filter changes (and once on mount).
    let reload_on_filter = reload.clone();
    Effect::new(move || {
        filter.track();
        reload_on_filter();
    });

    let on_moderate = Callback::new(move |(id, status): (String, TutorStatus)| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let reload = reload.clone();
            leptos::task::spawn_local(async move {
                match portal::services::tutors::set_status(session.client(), &id, status).await {
                    Ok(tutor) => {
                        info.set(format!("{} is now {}.", tutor.full_name, tutor.status));
                        reload();
                    }
                    Err(error) => info.set(crate::state::listing::failure_message(&error).unwrap_or_default()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &reload, id, status);
        }
    });

    view! {
        <div class="portal-page">
            <AdminHeader title="Tutors"/>
            <section class="portal-section">
                <select
                    prop:value=move || filter_value(filter.get())
                    on:change=move |ev| filter.set(parse_status_filter(&event_target_value(&ev)))
                >
                    <option value="">"All tutors"</option>
                    {STATUS_FILTERS
                        .into_iter()
                        .map(|status| view! { <option value=status.as_str()>{status.as_str()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <Show when=move || !info.get().is_empty()>
                    <p class="page-message">{move || info.get()}</p>
                </Show>
                <Show when=move || tutors.with(|t| t.error.is_some())>
                    <p class="page-error">{move || tutors.get().error.unwrap_or_default()}</p>
                </Show>
            </section>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Subjects"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        tutors
                            .get()
                            .items
                            .into_iter()
                            .map(|tutor| {
                                let actions = moderation_actions(tutor.status)
                                    .iter()
                                    .map(|&target| {
                                        let id = tutor.id.clone();
                                        view! {
                                            <button class="btn" on:click=move |_| on_moderate.run((id.clone(), target))>
                                                {moderation_label(target)}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>();
                                view! {
                                    <tr>
                                        <td>{tutor.full_name.clone()}</td>
                                        <td>{tutor.email.clone()}</td>
                                        <td>{tutor.subjects.join(", ")}</td>
                                        <td>{tutor.status.as_str()}</td>
                                        <td>{actions}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Moderation transitions offered for a tutor in `status`.
pub fn moderation_actions(status: TutorStatus) -> &'static [TutorStatus] {
    match status {
        TutorStatus::Pending => &[TutorStatus::Approved, TutorStatus::Rejected],
        TutorStatus::Approved => &[TutorStatus::Suspended],
        TutorStatus::Rejected | TutorStatus::Suspended => &[TutorStatus::Approved],
    }
}

pub fn moderation_label(target: TutorStatus) -> &'static str {
    match target {
        TutorStatus::Pending => "Reset",
        TutorStatus::Approved => "Approve",
        TutorStatus::Rejected => "Reject",
        TutorStatus::Suspended => "Suspend",
    }
}

/// Parse the filter `<select>` value; empty means all statuses.
pub fn parse_status_filter(value: &str) -> Option<TutorStatus> {
    STATUS_FILTERS.into_iter().find(|status| status.as_str() == value)
}

fn filter_value(filter: Option<TutorStatus>) -> &'static str {
    filter.map_or("", TutorStatus::as_str)
}

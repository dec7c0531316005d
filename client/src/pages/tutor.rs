//! Tutor portal (`/tutor`): incoming demo class requests and own courses.

#[cfg(test)]
#[path = "tutor_test.rs"]
mod tutor_test;

use leptos::prelude::*;
use portal::guard::PageAccess;
use portal::services::courses::Course;
use portal::services::demo_classes::{DemoClass, DemoClassStatus};

use crate::components::guarded::Guarded;
use crate::components::portal_header::PortalHeader;
use crate::state::auth::{AuthState, PortalSession};
use crate::state::listing::ListState;

/// A status change requested from a demo class row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusChange {
    pub class_id: String,
    pub status: DemoClassStatus,
    pub meeting_url: Option<String>,
}

#[component]
pub fn TutorPage() -> impl IntoView {
    view! {
        <Guarded access=PageAccess::tutor()>
            <TutorDashboard/>
        </Guarded>
    }
}

#[component]
fn TutorDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<PortalSession>();
    let classes = RwSignal::new(ListState::<DemoClass>::default());
    let courses = RwSignal::new(ListState::<Course>::default());
    let info = RwSignal::new(String::new());
    let tutor_id = auth.with_untracked(|a| a.user.as_ref().map(|u| u.id.clone())).unwrap_or_default();

    let reload = {
        let session = session.clone();
        let tutor_id = tutor_id.clone();
        move || {
            classes.update(ListState::begin);
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                let tutor_id = tutor_id.clone();
                leptos::task::spawn_local(async move {
                    let query = portal::services::demo_classes::DemoClassQuery {
                        tutor_id: Some(tutor_id),
                        ..Default::default()
                    };
                    let result = portal::services::demo_classes::list(session.client(), &query).await;
                    classes.update(|s| s.finish(result));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&session, &tutor_id);
            }
        }
    };
    reload();

    #[cfg(feature = "hydrate")]
    {
        courses.update(ListState::begin);
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let query = portal::services::courses::CourseQuery { tutor_id: Some(tutor_id), ..Default::default() };
            let result = portal::services::courses::list(session.client(), &query).await;
            courses.update(|s| s.finish(result));
        });
    }

    let on_change = Callback::new(move |change: StatusChange| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let reload = reload.clone();
            leptos::task::spawn_local(async move {
                let result = portal::services::demo_classes::update_status(
                    session.client(),
                    &change.class_id,
                    change.status,
                    change.meeting_url.as_deref(),
                )
                .await;
                match result {
                    Ok(updated) => {
                        info.set(format!("Demo class marked {}.", updated.status));
                        reload();
                    }
                    Err(error) => info.set(crate::state::listing::failure_message(&error).unwrap_or_default()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &reload, change);
        }
    });

    view! {
        <div class="portal-page">
            <PortalHeader title="My teaching"/>
            <section class="portal-section">
                <h2>"Demo classes"</h2>
                <Show when=move || classes.with(|c| c.error.is_some())>
                    <p class="page-error">{move || classes.get().error.unwrap_or_default()}</p>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="page-message">{move || info.get()}</p>
                </Show>
                <ul class="demo-class-list">
                    {move || {
                        classes
                            .get()
                            .items
                            .into_iter()
                            .map(|booking| view! { <RequestRow booking=booking on_change=on_change info=info/> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </section>
            <section class="portal-section">
                <h2>"My courses"</h2>
                <ul>
                    {move || {
                        courses
                            .get()
                            .items
                            .into_iter()
                            .map(|course| {
                                let state = if course.is_published { "published" } else { "draft" };
                                view! { <li>{course.title}" ("{state}")"</li> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </section>
        </div>
    }
}

#[component]
fn RequestRow(booking: DemoClass, on_change: Callback<StatusChange>, info: RwSignal<String>) -> impl IntoView {
    let link = RwSignal::new(booking.meeting_url.clone().unwrap_or_default());
    let status = booking.status;
    let id = booking.id.clone();
    let actions = next_statuses(status)
        .iter()
        .map(|&target| {
            let id = id.clone();
            let on_click = move |_| match status_change(&id, target, &link.get_untracked()) {
                Ok(change) => on_change.run(change),
                Err(message) => info.set(message.to_owned()),
            };
            view! { <button class="btn" on:click=on_click>{action_label(target)}</button> }
        })
        .collect::<Vec<_>>();

    view! {
        <li class="demo-class-row">
            <span class="demo-class-row__when">{booking.scheduled_at.clone()}</span>
            <span class="demo-class-row__length">{format!("{} min", booking.duration_minutes)}</span>
            <span class="demo-class-row__status">{status.as_str()}</span>
            {booking.notes.clone().map(|notes| view! { <p class="demo-class-row__notes">{notes}</p> })}
            <Show when=move || status == DemoClassStatus::Requested>
                <input
                    class="demo-class-row__link"
                    type="url"
                    placeholder="https://meet.example.com/..."
                    prop:value=move || link.get()
                    on:input=move |ev| link.set(event_target_value(&ev))
                />
            </Show>
            <div class="demo-class-row__actions">{actions}</div>
        </li>
    }
}

/// Statuses a tutor can move a class to from `status`.
pub fn next_statuses(status: DemoClassStatus) -> &'static [DemoClassStatus] {
    match status {
        DemoClassStatus::Requested => &[DemoClassStatus::Scheduled, DemoClassStatus::Cancelled],
        DemoClassStatus::Scheduled => &[DemoClassStatus::Completed, DemoClassStatus::Cancelled],
        DemoClassStatus::Completed | DemoClassStatus::Cancelled => &[],
    }
}

pub fn action_label(target: DemoClassStatus) -> &'static str {
    match target {
        DemoClassStatus::Requested => "Reopen",
        DemoClassStatus::Scheduled => "Confirm",
        DemoClassStatus::Completed => "Mark completed",
        DemoClassStatus::Cancelled => "Cancel",
    }
}

/// Build a status change; confirming a class requires a meeting link.
pub fn status_change(class_id: &str, target: DemoClassStatus, link: &str) -> Result<StatusChange, &'static str> {
    let link = link.trim();
    let meeting_url = if target == DemoClassStatus::Scheduled {
        if !(link.starts_with("https://") || link.starts_with("http://")) {
            return Err("Add a meeting link before confirming.");
        }
        Some(link.to_owned())
    } else {
        None
    };
    Ok(StatusChange { class_id: class_id.to_owned(), status: target, meeting_url })
}

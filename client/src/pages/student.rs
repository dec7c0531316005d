//! Student portal (`/student`): demo class bookings and the course catalogue.

#[cfg(test)]
#[path = "student_test.rs"]
mod student_test;

use leptos::prelude::*;
use portal::guard::PageAccess;
use portal::services::courses::Course;
use portal::services::demo_classes::{DemoClass, DemoClassBooking};
use portal::services::tutors::Tutor;
use time::PrimitiveDateTime;
use time::macros::format_description;

use crate::components::guarded::Guarded;
use crate::components::portal_header::PortalHeader;
use crate::state::auth::{AuthState, PortalSession};
use crate::state::listing::ListState;

pub const DURATION_CHOICES: [u32; 3] = [30, 45, 60];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingForm {
    pub tutor_id: String,
    pub scheduled_at: String,
    pub duration_minutes: u32,
    pub notes: String,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self { tutor_id: String::new(), scheduled_at: String::new(), duration_minutes: 30, notes: String::new() }
    }
}

#[component]
pub fn StudentPage() -> impl IntoView {
    view! {
        <Guarded access=PageAccess::student()>
            <StudentDashboard/>
        </Guarded>
    }
}

#[component]
fn StudentDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<PortalSession>();
    let classes = RwSignal::new(ListState::<DemoClass>::default());
    let courses = RwSignal::new(ListState::<Course>::default());
    let tutors = RwSignal::new(ListState::<Tutor>::default());
    let form = RwSignal::new(BookingForm::default());
    let info = RwSignal::new(String::new());
    let student_id = auth.with_untracked(|a| a.user.as_ref().map(|u| u.id.clone())).unwrap_or_default();

    let reload = {
        let session = session.clone();
        let student_id = student_id.clone();
        move || {
            classes.update(ListState::begin);
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                let student_id = student_id.clone();
                leptos::task::spawn_local(async move {
                    let query = portal::services::demo_classes::DemoClassQuery {
                        student_id: Some(student_id),
                        ..Default::default()
                    };
                    let result = portal::services::demo_classes::list(session.client(), &query).await;
                    classes.update(|s| s.finish(result));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&session, &student_id);
            }
        }
    };
    reload();

    #[cfg(feature = "hydrate")]
    {
        courses.update(ListState::begin);
        tutors.update(ListState::begin);
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let client = session.client();
            let query = portal::services::courses::CourseQuery { published: Some(true), ..Default::default() };
            let result = portal::services::courses::list(client, &query).await;
            courses.update(|s| s.finish(result));
            let query = portal::services::tutors::TutorQuery {
                status: Some(portal::services::tutors::TutorStatus::Approved),
                ..Default::default()
            };
            let result = portal::services::tutors::list(client, &query).await;
            tutors.update(|s| s.finish(result));
        });
    }

    let on_book = {
        let session = session.clone();
        let reload = reload.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let booking = match form.with_untracked(booking_from_form) {
                Ok(booking) => booking,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
            info.set("Requesting demo class...".to_owned());
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                let reload = reload.clone();
                leptos::task::spawn_local(async move {
                    match portal::services::demo_classes::book(session.client(), &booking).await {
                        Ok(_) => {
                            info.set("Demo class requested. Your tutor will confirm the time.".to_owned());
                            form.set(BookingForm::default());
                            reload();
                        }
                        Err(error) => {
                            info.set(crate::state::listing::failure_message(&error).unwrap_or_default());
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&session, &reload, booking);
            }
        }
    };

    let on_cancel = Callback::new(move |class_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let reload = reload.clone();
            leptos::task::spawn_local(async move {
                let result = portal::services::demo_classes::update_status(
                    session.client(),
                    &class_id,
                    portal::services::demo_classes::DemoClassStatus::Cancelled,
                    None,
                )
                .await;
                match result {
                    Ok(_) => reload(),
                    Err(error) => info.set(crate::state::listing::failure_message(&error).unwrap_or_default()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &reload, class_id);
        }
    });

    view! {
        <div class="portal-page">
            <PortalHeader title="My learning"/>
            <section class="portal-section">
                <h2>"My demo classes"</h2>
                <Show when=move || classes.with(|c| c.loading && c.is_empty())>
                    <p>"Loading..."</p>
                </Show>
                <Show when=move || classes.with(|c| c.error.is_some())>
                    <p class="page-error">{move || classes.get().error.unwrap_or_default()}</p>
                </Show>
                <ul class="demo-class-list">
                    {move || {
                        classes
                            .get()
                            .items
                            .into_iter()
                            .map(|booking| view! { <DemoClassRow booking=booking on_cancel=on_cancel/> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </section>
            <section class="portal-section">
                <h2>"Book a free demo class"</h2>
                <form class="booking-form" on:submit=on_book>
                    <select
                        class="booking-form__tutor"
                        on:change=move |ev| form.update(|f| f.tutor_id = event_target_value(&ev))
                        prop:value=move || form.with(|f| f.tutor_id.clone())
                    >
                        <option value="">"Choose a tutor"</option>
                        {move || {
                            tutors
                                .get()
                                .items
                                .into_iter()
                                .map(|tutor| view! { <option value=tutor.id>{tutor.full_name}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                    <input
                        type="datetime-local"
                        prop:value=move || form.with(|f| f.scheduled_at.clone())
                        on:input=move |ev| form.update(|f| f.scheduled_at = event_target_value(&ev))
                    />
                    <select
                        on:change=move |ev| {
                            let minutes = event_target_value(&ev).parse().unwrap_or(DURATION_CHOICES[0]);
                            form.update(|f| f.duration_minutes = minutes);
                        }
                        prop:value=move || form.with(|f| f.duration_minutes.to_string())
                    >
                        {DURATION_CHOICES
                            .into_iter()
                            .map(|m| view! { <option value=m.to_string()>{format!("{m} minutes")}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <textarea
                        placeholder="What would you like to cover?"
                        prop:value=move || form.with(|f| f.notes.clone())
                        on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit">"Request demo"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="page-message">{move || info.get()}</p>
                </Show>
            </section>
            <section class="portal-section">
                <h2>"Courses"</h2>
                <div class="course-grid">
                    {move || {
                        courses
                            .get()
                            .items
                            .into_iter()
                            .map(|course| {
                                view! {
                                    <div class="course-card">
                                        <span class="course-card__title">{course.title.clone()}</span>
                                        <span class="course-card__price">{price_label(course.price)}</span>
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

#[component]
fn DemoClassRow(booking: DemoClass, on_cancel: Callback<String>) -> impl IntoView {
    let open = booking.status.is_open();
    let id = booking.id.clone();
    view! {
        <li class="demo-class-row">
            <span class="demo-class-row__when">{booking.scheduled_at.clone()}</span>
            <span class="demo-class-row__status">{booking.status.as_str()}</span>
            {booking.meeting_url.clone().map(|url| view! { <a class="demo-class-row__join" href=url>"Join"</a> })}
            <Show when=move || open>
                <button
                    class="btn btn--danger"
                    on:click={
                        let id = id.clone();
                        move |_| on_cancel.run(id.clone())
                    }
                >
                    "Cancel"
                </button>
            </Show>
        </li>
    }
}

/// Validate the booking form into a request.
pub fn booking_from_form(form: &BookingForm) -> Result<DemoClassBooking, &'static str> {
    if form.tutor_id.trim().is_empty() {
        return Err("Choose a tutor.");
    }
    let Some(scheduled_at) = normalize_schedule(&form.scheduled_at) else {
        return Err("Pick a date and time.");
    };
    if !DURATION_CHOICES.contains(&form.duration_minutes) {
        return Err("Pick a class length.");
    }
    let notes = form.notes.trim();
    Ok(DemoClassBooking {
        tutor_id: form.tutor_id.trim().to_owned(),
        course_id: None,
        scheduled_at,
        duration_minutes: form.duration_minutes,
        notes: (!notes.is_empty()).then(|| notes.to_owned()),
    })
}

/// `datetime-local` inputs omit seconds; add them so the backend gets a full
/// timestamp. Anything that is not a real calendar date and time is rejected.
pub fn normalize_schedule(value: &str) -> Option<String> {
    let input = format_description!("[year]-[month]-[day]T[hour]:[minute][optional [:[second]]]");
    let output = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let parsed = PrimitiveDateTime::parse(value.trim(), input).ok()?;
    parsed.format(output).ok()
}

pub fn price_label(price: Option<f64>) -> String {
    match price {
        Some(p) if p > 0.0 => format!("${p:.2}"),
        _ => "Free".to_owned(),
    }
}

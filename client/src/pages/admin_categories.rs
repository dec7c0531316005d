//! Category management (`/admin/categories`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Tutor counts change as tutors are approved elsewhere, so the listing
//! refreshes on a fixed interval while the page is mounted.

#[cfg(test)]
#[path = "admin_categories_test.rs"]
mod admin_categories_test;

use leptos::prelude::*;
use portal::guard::PageAccess;
use portal::services::categories::{Category, CategoryInput};

use super::admin::AdminHeader;
use crate::components::guarded::Guarded;
use crate::state::auth::PortalSession;
use crate::state::listing::ListState;

pub const POLL_INTERVAL_SECS: u64 = 30;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryForm {
    /// Category being edited, or `None` when creating.
    pub editing: Option<String>,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub is_active: bool,
}

impl CategoryForm {
    pub fn blank() -> Self {
        Self { is_active: true, ..Self::default() }
    }

    pub fn edit(category: &Category) -> Self {
        Self {
            editing: Some(category.id.clone()),
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
            icon: category.icon.clone().unwrap_or_default(),
            is_active: category.is_active,
        }
    }
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    view! {
        <Guarded access=PageAccess::admin_tier()>
            <CategoryManager/>
        </Guarded>
    }
}

#[component]
fn CategoryManager() -> impl IntoView {
    let session = expect_context::<PortalSession>();
    let categories = RwSignal::new(ListState::<Category>::default());
    let form = RwSignal::new(CategoryForm::blank());
    let info = RwSignal::new(String::new());

    let reload = {
        let session = session.clone();
        move || {
            categories.update(ListState::begin);
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    let result = portal::services::categories::list(session.client()).await;
                    categories.update(|s| s.finish(result));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &session;
            }
        }
    };
    reload();

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let reload_poll = reload.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_INTERVAL_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if categories.get_untracked().loading {
                    continue;
                }
                reload_poll();
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_save = {
        let session = session.clone();
        let reload = reload.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let current = form.get_untracked();
            let input = match category_input(&current) {
                Ok(input) => input,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                let reload = reload.clone();
                leptos::task::spawn_local(async move {
                    let client = session.client();
                    let result = match current.editing.as_deref() {
                        Some(id) => portal::services::categories::update(client, id, &input).await,
                        None => portal::services::categories::create(client, &input).await,
                    };
                    match result {
                        Ok(saved) => {
                            info.set(format!("Saved {}.", saved.name));
                            form.set(CategoryForm::blank());
                            reload();
                        }
                        Err(error) => info.set(crate::state::listing::failure_message(&error).unwrap_or_default()),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&session, &reload, current, input);
            }
        }
    };

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let reload = reload.clone();
            leptos::task::spawn_local(async move {
                match portal::services::categories::delete(session.client(), &id).await {
                    Ok(()) => reload(),
                    Err(error) => info.set(crate::state::listing::failure_message(&error).unwrap_or_default()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &reload, id);
        }
    });
    let on_edit = Callback::new(move |category: Category| form.set(CategoryForm::edit(&category)));

    view! {
        <div class="portal-page">
            <AdminHeader title="Categories"/>
            <section class="portal-section">
                <form class="category-form" on:submit=on_save>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Description"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Icon"
                        prop:value=move || form.with(|f| f.icon.clone())
                        on:input=move |ev| form.update(|f| f.icon = event_target_value(&ev))
                    />
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_active)
                            on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                        />
                        "Active"
                    </label>
                    <button class="btn btn--primary" type="submit">
                        {move || if form.with(|f| f.editing.is_some()) { "Update" } else { "Create" }}
                    </button>
                    <Show when=move || form.with(|f| f.editing.is_some())>
                        <button class="btn" type="button" on:click=move |_| form.set(CategoryForm::blank())>
                            "Cancel"
                        </button>
                    </Show>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="page-message">{move || info.get()}</p>
                </Show>
                <Show when=move || categories.with(|c| c.error.is_some())>
                    <p class="page-error">{move || categories.get().error.unwrap_or_default()}</p>
                </Show>
            </section>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Tutors"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        categories
                            .get()
                            .items
                            .into_iter()
                            .map(|category| {
                                let id = category.id.clone();
                                let name = category.name.clone();
                                let tutor_count = category.tutor_count;
                                let status = if category.is_active { "active" } else { "hidden" };
                                view! {
                                    <tr>
                                        <td>{name}</td>
                                        <td>{tutor_count}</td>
                                        <td>{status}</td>
                                        <td>
                                            <button class="btn" on:click=move |_| on_edit.run(category.clone())>
                                                "Edit"
                                            </button>
                                            <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>
                                                "Delete"
                                            </button>
                                        </td>
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

/// Validate the form into a create/update payload.
pub fn category_input(form: &CategoryForm) -> Result<CategoryInput, &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("Enter a category name.");
    }
    Ok(CategoryInput {
        name: name.to_owned(),
        description: non_blank(&form.description),
        icon: non_blank(&form.icon),
        is_active: form.is_active,
    })
}

pub(crate) fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

//! Featured media management (`/admin/media`).

#[cfg(test)]
#[path = "admin_media_test.rs"]
mod admin_media_test;

use leptos::prelude::*;
use portal::guard::PageAccess;
use portal::services::media::{FeaturedMedia, MediaInput, MediaKind};

use super::admin::AdminHeader;
use super::admin_categories::non_blank;
use crate::components::guarded::Guarded;
use crate::state::auth::PortalSession;
use crate::state::listing::ListState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaForm {
    pub title: String,
    pub kind: MediaKind,
    pub url: String,
    pub thumbnail_url: String,
    pub link_url: String,
    pub position: String,
}

impl Default for MediaForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: MediaKind::Image,
            url: String::new(),
            thumbnail_url: String::new(),
            link_url: String::new(),
            position: "0".to_owned(),
        }
    }
}

#[component]
pub fn MediaPage() -> impl IntoView {
    view! {
        <Guarded access=PageAccess::admin_tier()>
            <MediaManager/>
        </Guarded>
    }
}

#[component]
fn MediaManager() -> impl IntoView {
    let session = expect_context::<PortalSession>();
    let items = RwSignal::new(ListState::<FeaturedMedia>::default());
    let form = RwSignal::new(MediaForm::default());
    let info = RwSignal::new(String::new());

    let reload = {
        let session = session.clone();
        move || {
            items.update(ListState::begin);
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    let result = portal::services::media::list(session.client()).await.map(|mut list| {
                        list.sort_by_key(|m| m.position);
                        list
                    });
                    items.update(|s| s.finish(result));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &session;
            }
        }
    };
    reload();

    let on_create = {
        let session = session.clone();
        let reload = reload.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let input = match form.with_untracked(media_input) {
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
                    match portal::services::media::create(session.client(), &input).await {
                        Ok(created) => {
                            info.set(format!("Added {}.", created.title));
                            form.set(MediaForm::default());
                            reload();
                        }
                        Err(error) => info.set(crate::state::listing::failure_message(&error).unwrap_or_default()),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&session, &reload, input);
            }
        }
    };

    let on_toggle = {
        let session = session.clone();
        let reload = reload.clone();
        Callback::new(move |item: FeaturedMedia| {
            let input = toggled_input(&item);
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                let reload = reload.clone();
                leptos::task::spawn_local(async move {
                    match portal::services::media::update(session.client(), &item.id, &input).await {
                        Ok(_) => reload(),
                        Err(error) => info.set(crate::state::listing::failure_message(&error).unwrap_or_default()),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&session, &reload, input);
            }
        })
    };

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let reload = reload.clone();
            leptos::task::spawn_local(async move {
                match portal::services::media::delete(session.client(), &id).await {
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

    view! {
        <div class="portal-page">
            <AdminHeader title="Featured media"/>
            <section class="portal-section">
                <form class="media-form" on:submit=on_create>
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                    <select
                        prop:value=move || form.with(|f| kind_value(f.kind))
                        on:change=move |ev| {
                            let kind = if event_target_value(&ev) == "video" { MediaKind::Video } else { MediaKind::Image };
                            form.update(|f| f.kind = kind);
                        }
                    >
                        <option value="image">"Image"</option>
                        <option value="video">"Video"</option>
                    </select>
                    <input
                        type="url"
                        placeholder="Media URL"
                        prop:value=move || form.with(|f| f.url.clone())
                        on:input=move |ev| form.update(|f| f.url = event_target_value(&ev))
                    />
                    <input
                        type="url"
                        placeholder="Thumbnail URL"
                        prop:value=move || form.with(|f| f.thumbnail_url.clone())
                        on:input=move |ev| form.update(|f| f.thumbnail_url = event_target_value(&ev))
                    />
                    <input
                        type="url"
                        placeholder="Link URL"
                        prop:value=move || form.with(|f| f.link_url.clone())
                        on:input=move |ev| form.update(|f| f.link_url = event_target_value(&ev))
                    />
                    <input
                        type="number"
                        prop:value=move || form.with(|f| f.position.clone())
                        on:input=move |ev| form.update(|f| f.position = event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Add"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="page-message">{move || info.get()}</p>
                </Show>
                <Show when=move || items.with(|i| i.error.is_some())>
                    <p class="page-error">{move || items.get().error.unwrap_or_default()}</p>
                </Show>
            </section>
            <table class="admin-table">
                <tbody>
                    {move || {
                        items
                            .get()
                            .items
                            .into_iter()
                            .map(|item| {
                                let id = item.id.clone();
                                let toggle_label = if item.is_active { "Hide" } else { "Show" };
                                let title = item.title.clone();
                                let position = item.position;
                                let kind = kind_value(item.kind);
                                view! {
                                    <tr>
                                        <td>{position}</td>
                                        <td>{title}</td>
                                        <td>{kind}</td>
                                        <td>
                                            <button class="btn" on:click=move |_| on_toggle.run(item.clone())>
                                                {toggle_label}
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

fn kind_value(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => "image",
        MediaKind::Video => "video",
    }
}

/// Validate the create form.
pub fn media_input(form: &MediaForm) -> Result<MediaInput, &'static str> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err("Enter a title.");
    }
    let url = form.url.trim();
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err("Enter the media URL (https://...).");
    }
    let Ok(position) = form.position.trim().parse::<i32>() else {
        return Err("Position must be a whole number.");
    };
    Ok(MediaInput {
        title: title.to_owned(),
        kind: form.kind,
        url: url.to_owned(),
        thumbnail_url: non_blank(&form.thumbnail_url),
        link_url: non_blank(&form.link_url),
        position,
        is_active: true,
    })
}

/// Update payload that flips an item's visibility and keeps everything else.
pub fn toggled_input(item: &FeaturedMedia) -> MediaInput {
    MediaInput {
        title: item.title.clone(),
        kind: item.kind,
        url: item.url.clone(),
        thumbnail_url: item.thumbnail_url.clone(),
        link_url: item.link_url.clone(),
        position: item.position,
        is_active: !item.is_active,
    }
}

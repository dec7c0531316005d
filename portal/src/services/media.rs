//! Featured media shown on the public home page (`/featured-media`).

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use serde::{Deserialize, Serialize};

use super::item_path;
use crate::client::{ApiClient, ApiError};
use crate::http::Transport;
use crate::store::KeyValueStorage;

pub const MEDIA_PATH: &str = "/featured-media";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedMedia {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "mediaType")]
    pub kind: MediaKind,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaInput {
    pub title: String,
    #[serde(rename = "mediaType")]
    pub kind: MediaKind,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    pub position: i32,
    pub is_active: bool,
}

pub async fn list<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
) -> Result<Vec<FeaturedMedia>, ApiError> {
    client.get(MEDIA_PATH).await
}

/// Active items only, ordered by `position`.
pub async fn list_active<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
) -> Result<Vec<FeaturedMedia>, ApiError> {
    let mut items: Vec<FeaturedMedia> = client.get(&format!("{MEDIA_PATH}?active=true")).await?;
    items.retain(|item| item.is_active);
    items.sort_by_key(|item| item.position);
    Ok(items)
}

pub async fn create<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    input: &MediaInput,
) -> Result<FeaturedMedia, ApiError> {
    client.post(MEDIA_PATH, input).await
}

pub async fn update<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    id: &str,
    input: &MediaInput,
) -> Result<FeaturedMedia, ApiError> {
    client.put(&item_path(MEDIA_PATH, id), input).await
}

pub async fn delete<T: Transport, S: KeyValueStorage>(client: &ApiClient<T, S>, id: &str) -> Result<(), ApiError> {
    client.delete(&item_path(MEDIA_PATH, id)).await
}

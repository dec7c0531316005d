//! Subject categories (`/categories`).

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use serde::{Deserialize, Serialize};

use super::item_path;
use crate::client::{ApiClient, ApiError};
use crate::http::Transport;
use crate::store::KeyValueStorage;

pub const CATEGORIES_PATH: &str = "/categories";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub tutor_count: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/update payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub is_active: bool,
}

pub async fn list<T: Transport, S: KeyValueStorage>(client: &ApiClient<T, S>) -> Result<Vec<Category>, ApiError> {
    client.get(CATEGORIES_PATH).await
}

pub async fn get<T: Transport, S: KeyValueStorage>(client: &ApiClient<T, S>, id: &str) -> Result<Category, ApiError> {
    client.get(&item_path(CATEGORIES_PATH, id)).await
}

pub async fn create<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    input: &CategoryInput,
) -> Result<Category, ApiError> {
    client.post(CATEGORIES_PATH, input).await
}

pub async fn update<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    id: &str,
    input: &CategoryInput,
) -> Result<Category, ApiError> {
    client.put(&item_path(CATEGORIES_PATH, id), input).await
}

pub async fn delete<T: Transport, S: KeyValueStorage>(client: &ApiClient<T, S>, id: &str) -> Result<(), ApiError> {
    client.delete(&item_path(CATEGORIES_PATH, id)).await
}

//! Tutor directory and moderation (`/tutors`).

#[cfg(test)]
#[path = "tutors_test.rs"]
mod tutors_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Query, item_path};
use crate::client::{ApiClient, ApiError};
use crate::http::Transport;
use crate::store::KeyValueStorage;

pub const TUTORS_PATH: &str = "/tutors";

/// Moderation state of a tutor profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TutorStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Suspended,
}

impl TutorStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TutorStatus::Pending => "pending",
            TutorStatus::Approved => "approved",
            TutorStatus::Rejected => "rejected",
            TutorStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for TutorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutor {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub category_ids: Vec<String>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub status: TutorStatus,
}

/// Create/update payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorInput {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub subjects: Vec<String>,
    pub category_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
}

/// Listing filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TutorQuery {
    pub status: Option<TutorStatus>,
    pub category_id: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl TutorQuery {
    fn to_path(&self) -> String {
        Query::new()
            .push_opt("status", self.status)
            .push_opt("categoryId", self.category_id.as_deref())
            .push_opt("page", self.page)
            .push_opt("limit", self.limit)
            .to_path(TUTORS_PATH)
    }
}

#[derive(Serialize)]
struct StatusBody {
    status: TutorStatus,
}

pub async fn list<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    query: &TutorQuery,
) -> Result<Vec<Tutor>, ApiError> {
    client.get(&query.to_path()).await
}

pub async fn get<T: Transport, S: KeyValueStorage>(client: &ApiClient<T, S>, id: &str) -> Result<Tutor, ApiError> {
    client.get(&item_path(TUTORS_PATH, id)).await
}

pub async fn create<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    input: &TutorInput,
) -> Result<Tutor, ApiError> {
    client.post(TUTORS_PATH, input).await
}

pub async fn update<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    id: &str,
    input: &TutorInput,
) -> Result<Tutor, ApiError> {
    client.put(&item_path(TUTORS_PATH, id), input).await
}

/// `PATCH /tutors/{id}/status`: approve, reject or suspend a tutor.
pub async fn set_status<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    id: &str,
    status: TutorStatus,
) -> Result<Tutor, ApiError> {
    let path = format!("{}/status", item_path(TUTORS_PATH, id));
    client.patch(&path, &StatusBody { status }).await
}

pub async fn delete<T: Transport, S: KeyValueStorage>(client: &ApiClient<T, S>, id: &str) -> Result<(), ApiError> {
    client.delete(&item_path(TUTORS_PATH, id)).await
}

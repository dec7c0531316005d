//! Trial lessons booked by students with tutors (`/demo-classes`).

#[cfg(test)]
#[path = "demo_classes_test.rs"]
mod demo_classes_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Query, item_path};
use crate::client::{ApiClient, ApiError};
use crate::http::Transport;
use crate::store::KeyValueStorage;

pub const DEMO_CLASSES_PATH: &str = "/demo-classes";

fn default_duration() -> u32 {
    30
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoClassStatus {
    #[default]
    Requested,
    Scheduled,
    Completed,
    Cancelled,
}

impl DemoClassStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DemoClassStatus::Requested => "requested",
            DemoClassStatus::Scheduled => "scheduled",
            DemoClassStatus::Completed => "completed",
            DemoClassStatus::Cancelled => "cancelled",
        }
    }

    /// Whether the class can still change state.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, DemoClassStatus::Requested | DemoClassStatus::Scheduled)
    }
}

impl fmt::Display for DemoClassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoClass {
    #[serde(alias = "_id")]
    pub id: String,
    pub tutor_id: String,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub title: String,
    /// RFC 3339 start time as sent by the backend.
    pub scheduled_at: String,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub status: DemoClassStatus,
    #[serde(default)]
    pub meeting_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Booking request from a student.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoClassBooking {
    pub tutor_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    pub scheduled_at: String,
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoClassQuery {
    pub tutor_id: Option<String>,
    pub student_id: Option<String>,
    pub status: Option<DemoClassStatus>,
}

impl DemoClassQuery {
    fn to_path(&self) -> String {
        Query::new()
            .push_opt("tutorId", self.tutor_id.as_deref())
            .push_opt("studentId", self.student_id.as_deref())
            .push_opt("status", self.status)
            .to_path(DEMO_CLASSES_PATH)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusBody<'a> {
    status: DemoClassStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    meeting_url: Option<&'a str>,
}

pub async fn list<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    query: &DemoClassQuery,
) -> Result<Vec<DemoClass>, ApiError> {
    client.get(&query.to_path()).await
}

pub async fn get<T: Transport, S: KeyValueStorage>(client: &ApiClient<T, S>, id: &str) -> Result<DemoClass, ApiError> {
    client.get(&item_path(DEMO_CLASSES_PATH, id)).await
}

pub async fn book<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    booking: &DemoClassBooking,
) -> Result<DemoClass, ApiError> {
    client.post(DEMO_CLASSES_PATH, booking).await
}

/// `PATCH /demo-classes/{id}/status`, optionally attaching a meeting link
/// when a tutor confirms.
pub async fn update_status<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    id: &str,
    status: DemoClassStatus,
    meeting_url: Option<&str>,
) -> Result<DemoClass, ApiError> {
    let path = format!("{}/status", item_path(DEMO_CLASSES_PATH, id));
    client.patch(&path, &StatusBody { status, meeting_url }).await
}

pub async fn delete<T: Transport, S: KeyValueStorage>(client: &ApiClient<T, S>, id: &str) -> Result<(), ApiError> {
    client.delete(&item_path(DEMO_CLASSES_PATH, id)).await
}

//! Course catalogue (`/courses`).

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Query, item_path};
use crate::client::{ApiClient, ApiError};
use crate::http::Transport;
use crate::store::KeyValueStorage;

pub const COURSES_PATH: &str = "/courses";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CourseLevel::Beginner => "beginner",
            CourseLevel::Intermediate => "intermediate",
            CourseLevel::Advanced => "advanced",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub tutor_id: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub level: Option<CourseLevel>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tutor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<CourseLevel>,
    pub is_published: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseQuery {
    pub category_id: Option<String>,
    pub tutor_id: Option<String>,
    pub published: Option<bool>,
}

impl CourseQuery {
    fn to_path(&self) -> String {
        Query::new()
            .push_opt("categoryId", self.category_id.as_deref())
            .push_opt("tutorId", self.tutor_id.as_deref())
            .push_opt("published", self.published)
            .to_path(COURSES_PATH)
    }
}

pub async fn list<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    query: &CourseQuery,
) -> Result<Vec<Course>, ApiError> {
    client.get(&query.to_path()).await
}

pub async fn get<T: Transport, S: KeyValueStorage>(client: &ApiClient<T, S>, id: &str) -> Result<Course, ApiError> {
    client.get(&item_path(COURSES_PATH, id)).await
}

pub async fn create<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    input: &CourseInput,
) -> Result<Course, ApiError> {
    client.post(COURSES_PATH, input).await
}

pub async fn update<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    id: &str,
    input: &CourseInput,
) -> Result<Course, ApiError> {
    client.put(&item_path(COURSES_PATH, id), input).await
}

pub async fn delete<T: Transport, S: KeyValueStorage>(client: &ApiClient<T, S>, id: &str) -> Result<(), ApiError> {
    client.delete(&item_path(COURSES_PATH, id)).await
}

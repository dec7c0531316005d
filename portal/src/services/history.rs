//! Audit log (`/history`).
//!
//! Read-only: entries are written by the backend as a side effect of other
//! operations.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Query;
use crate::client::{ApiClient, ApiError};
use crate::http::Transport;
use crate::store::KeyValueStorage;
use crate::types::Role;

pub const HISTORY_PATH: &str = "/history";
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Kind of record an audit entry refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Category,
    Tutor,
    Course,
    DemoClass,
    FeaturedMedia,
    User,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Category,
        EntityKind::Tutor,
        EntityKind::Course,
        EntityKind::DemoClass,
        EntityKind::FeaturedMedia,
        EntityKind::User,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Category => "category",
            EntityKind::Tutor => "tutor",
            EntityKind::Course => "course",
            EntityKind::DemoClass => "demo_class",
            EntityKind::FeaturedMedia => "featured_media",
            EntityKind::User => "user",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(alias = "_id")]
    pub id: String,
    /// Free-form verb recorded by the backend (`create`, `status_change`, ...).
    pub action: String,
    pub entity_type: EntityKind,
    #[serde(default)]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub actor_id: Option<String>,
    #[serde(default)]
    pub actor_name: Option<String>,
    #[serde(default)]
    pub actor_role: Option<Role>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
}

/// One page of audit entries.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HistoryPage {
    #[serde(alias = "items")]
    pub entries: Vec<HistoryEntry>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub limit: u32,
}

impl HistoryPage {
    /// Whether another page follows this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.page) * u64::from(self.limit) < self.total
    }
}

fn first_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryQuery {
    pub entity_type: Option<EntityKind>,
    pub actor_id: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self { entity_type: None, actor_id: None, page: 1, limit: DEFAULT_PAGE_SIZE }
    }
}

impl HistoryQuery {
    fn to_path(&self) -> String {
        Query::new()
            .push_opt("entityType", self.entity_type)
            .push_opt("actorId", self.actor_id.as_deref())
            .push("page", self.page.max(1))
            .push("limit", self.limit.clamp(1, 100))
            .to_path(HISTORY_PATH)
    }
}

pub async fn list<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    query: &HistoryQuery,
) -> Result<HistoryPage, ApiError> {
    client.get(&query.to_path()).await
}

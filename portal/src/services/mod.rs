//! Typed façades over individual backend resources.
//!
//! Each module exposes one async function per backend operation. They build
//! the resource path, hand it to [`crate::client::ApiClient`], and decode the
//! envelope payload into a DTO; there is no business logic here.

pub mod auth;
pub mod categories;
pub mod courses;
pub mod demo_classes;
pub mod history;
pub mod media;
pub mod tutors;

use std::fmt::Display;

/// Query-string builder. Values are percent-encoded, so an id can never add
/// parameters of its own.
#[derive(Debug, Default)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: &'static str, value: impl Display) -> &mut Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    pub(crate) fn push_opt(&mut self, key: &'static str, value: Option<impl Display>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub(crate) fn to_path(&self, base: &str) -> String {
        if self.pairs.is_empty() {
            return base.to_owned();
        }
        let joined = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{base}?{joined}")
    }
}

/// `{base}/{id}` with `id` confined to a single path segment.
pub(crate) fn item_path(base: &str, id: &str) -> String {
    format!("{base}/{}", path_segment(id))
}

/// Percent-encode one path segment. Dot segments are escaped too, since
/// `.` is unreserved and `..` would otherwise climb out of `base`.
fn path_segment(raw: &str) -> String {
    if !raw.is_empty() && raw.chars().all(|c| c == '.') {
        return raw.replace('.', "%2E");
    }
    urlencoding::encode(raw).into_owned()
}

pub(crate) fn default_true() -> bool {
    true
}

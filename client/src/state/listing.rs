//! Load state for backend-backed lists (categories, tutors, demo classes, ...).

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use portal::ApiError;

/// Items plus the status of the request that produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None }
    }
}

impl<T> ListState<T> {
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Apply a finished fetch. A failure keeps the previous items so a
    /// transient error during polling does not blank the page.
    pub fn finish(&mut self, result: Result<Vec<T>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(error) => self.error = failure_message(&error),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Message to show for a failed call, or `None` when the session expired
/// and the app is already redirecting to sign-in.
pub fn failure_message(error: &ApiError) -> Option<String> {
    if error.is_unauthorized() {
        return None;
    }
    Some(match error {
        ApiError::Timeout => "The server took too long to respond. Try again.".to_owned(),
        ApiError::Network(_) => "Could not reach the server. Check your connection.".to_owned(),
        other => other.to_string(),
    })
}

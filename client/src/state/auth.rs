//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `portal` session controller is the single source of truth; it pushes
//! a snapshot into an `RwSignal<AuthState>` on every transition. Route guards
//! and user-aware components read only the signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use portal::guard::{GuardDecision, PageAccess, evaluate};
use portal::{ApiClient, Role, Session, SessionController, User};

use crate::config;
use crate::net::transport::GlooTransport;
use crate::util::storage::BrowserStorage;

/// Request client wired to the browser transport and storage.
pub type PortalClient = ApiClient<GlooTransport, BrowserStorage>;

/// Session controller provided through context.
pub type PortalSession = SessionController<GlooTransport, BrowserStorage>;

/// Build the app-wide session controller.
pub fn new_session() -> PortalSession {
    SessionController::new(ApiClient::new(config::client_config(), GlooTransport, BrowserStorage))
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
    pub expired: bool,
    session: Session,
}

impl From<&Session> for AuthState {
    fn from(session: &Session) -> Self {
        Self {
            user: session.user().cloned(),
            loading: session.is_loading(),
            error: session.error().map(str::to_owned),
            expired: session.is_expired(),
            session: session.clone(),
        }
    }
}

impl AuthState {
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Guard outcome for a page declared with `access`.
    pub fn decision(&self, access: &PageAccess) -> GuardDecision {
        evaluate(&self.session, access)
    }
}

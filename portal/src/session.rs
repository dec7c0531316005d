//! Session/auth controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller is the single writer of [`Session`]. Pages read snapshots
//! (directly or through the observer the UI installs) and ask the controller
//! to sign in, sign up, or sign out. The request client reports server-side
//! token rejection through a hook wired up in [`SessionController::new`].
//!
//! STATE MACHINE
//! =============
//! `Uninitialized -> Restoring -> {Anonymous, Authenticated}`; sign-in and
//! sign-up pass through `Authenticating`; sign-out and forced logout land in
//! `Anonymous`.
//!
//! ORDERING
//! ========
//! Each auth operation captures an epoch when it starts. Sign-out, forced
//! logout, and newer auth operations advance the epoch. A response that
//! resolves under an old epoch is dropped without touching state or storage.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

use crate::client::{ApiClient, ApiError};
use crate::http::Transport;
use crate::services::auth::{self, AuthPayload, SignUpRequest};
use crate::store::KeyValueStorage;
use crate::types::{Role, User};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    Restoring,
    Anonymous,
    Authenticating,
    Authenticated,
}

/// Snapshot of who is signed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    phase: SessionPhase,
    user: Option<User>,
    error: Option<String>,
    expired: bool,
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self { phase: SessionPhase::Anonymous, ..Self::default() }
    }

    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self { phase: SessionPhase::Authenticated, user: Some(user), ..Self::default() }
    }

    #[must_use]
    pub fn restoring() -> Self {
        Self { phase: SessionPhase::Restoring, ..Self::default() }
    }

    /// An auth operation in flight, keeping whichever user was signed in.
    #[must_use]
    pub fn authenticating(user: Option<User>) -> Self {
        Self { phase: SessionPhase::Authenticating, user, ..Self::default() }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    /// Message from the last failed sign-in/sign-up.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True after the backend rejected the stored token.
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::Uninitialized | SessionPhase::Restoring | SessionPhase::Authenticating
        )
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated && self.user.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("superseded by a newer session change")]
    Superseded,
}

type Observer = Arc<dyn Fn(&Session) + Send + Sync>;

#[derive(Default)]
struct State {
    session: Session,
    epoch: u64,
}

#[derive(Default)]
struct Shared {
    state: Mutex<State>,
    observer: Mutex<Option<Observer>>,
}

impl Shared {
    /// Apply `change` under the lock, then notify the observer if the
    /// snapshot moved.
    fn transition<R>(&self, change: impl FnOnce(&mut State) -> R) -> R {
        let (result, changed) = {
            let mut state = crate::lock(&self.state);
            let before = state.session.clone();
            let result = change(&mut state);
            let changed = (state.session != before).then(|| state.session.clone());
            (result, changed)
        };
        if let Some(snapshot) = changed {
            self.notify(&snapshot);
        }
        result
    }

    fn notify(&self, snapshot: &Session) {
        let observer = crate::lock(&self.observer).clone();
        if let Some(observer) = observer {
            observer(snapshot);
        }
    }

    fn force_logout(&self) {
        self.transition(|state| {
            state.epoch += 1;
            state.session = Session { expired: true, ..Session::anonymous() };
        });
        log::info!("session expired; signed out");
    }
}

pub struct SessionController<T, S> {
    client: ApiClient<T, S>,
    shared: Arc<Shared>,
}

impl<T: Clone, S> Clone for SessionController<T, S> {
    fn clone(&self) -> Self {
        Self { client: self.client.clone(), shared: Arc::clone(&self.shared) }
    }
}

impl<T: Transport, S: KeyValueStorage> SessionController<T, S> {
    /// Take ownership of `client` and route its session-invalid signal into
    /// this controller.
    pub fn new(mut client: ApiClient<T, S>) -> Self {
        let shared = Arc::new(Shared::default());
        let hook_target = Arc::clone(&shared);
        client.set_session_invalid_hook(move || hook_target.force_logout());
        Self { client, shared }
    }

    /// Client for service calls; shares this controller's token store.
    pub fn client(&self) -> &ApiClient<T, S> {
        &self.client
    }

    pub fn session(&self) -> Session {
        crate::lock(&self.shared.state).session.clone()
    }

    /// Register the observer that receives every new snapshot. It is called
    /// once immediately with the current one.
    pub fn subscribe(&self, observer: impl Fn(&Session) + Send + Sync + 'static) {
        let observer: Observer = Arc::new(observer);
        *crate::lock(&self.shared.observer) = Some(Arc::clone(&observer));
        observer(&self.session());
    }

    /// Adopt the stored credentials, if any. Trusts local presence: the
    /// token is not revalidated until the backend rejects a later request.
    /// Only the first call does anything.
    pub fn restore(&self) -> SessionPhase {
        let started = self.shared.transition(|state| {
            if state.session.phase != SessionPhase::Uninitialized {
                return false;
            }
            state.session = Session::restoring();
            true
        });
        if !started {
            return self.session().phase;
        }

        self.shared.transition(|state| {
            state.session = match self.client.store().load() {
                Some(stored) => {
                    log::info!("restored session for {} ({})", stored.user.display_name(), stored.user.role);
                    Session::authenticated(stored.user)
                }
                None => Session::anonymous(),
            };
            state.session.phase
        })
    }

    /// Exchange email and password for a session.
    ///
    /// # Errors
    ///
    /// [`AuthError::Api`] carries the backend's message verbatim;
    /// [`AuthError::Superseded`] means a sign-out or newer sign-in happened
    /// while this one was in flight and its result was dropped.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let ticket = self.begin_authenticating();
        let outcome = auth::login(&self.client, email, password).await;
        self.finish_authenticating(ticket, outcome)
    }

    /// Register a new account and sign straight into it.
    ///
    /// # Errors
    ///
    /// Same as [`SessionController::sign_in`].
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<User, AuthError> {
        let ticket = self.begin_authenticating();
        let outcome = auth::register(&self.client, request).await;
        self.finish_authenticating(ticket, outcome)
    }

    /// Forget the session locally. Never fails and is idempotent.
    pub fn sign_out(&self) {
        self.shared.transition(|state| {
            state.epoch += 1;
            self.client.store().clear();
            state.session = Session::anonymous();
        });
        log::info!("signed out");
    }

    fn begin_authenticating(&self) -> u64 {
        self.shared.transition(|state| {
            state.epoch += 1;
            state.session = Session::authenticating(state.session.user.take());
            state.epoch
        })
    }

    fn finish_authenticating(&self, ticket: u64, outcome: Result<AuthPayload, ApiError>) -> Result<User, AuthError> {
        self.shared.transition(|state| {
            if state.epoch != ticket {
                log::info!("dropping stale auth response (ticket {ticket}, epoch {})", state.epoch);
                return Err(AuthError::Superseded);
            }
            match outcome {
                Ok(payload) => {
                    self.client.store().save(&payload.token, &payload.user);
                    log::info!("signed in as {} ({})", payload.user.display_name(), payload.user.role);
                    state.session = Session::authenticated(payload.user.clone());
                    Ok(payload.user)
                }
                Err(err) => {
                    let mut session = match self.client.store().load() {
                        Some(stored) => Session::authenticated(stored.user),
                        None => Session::anonymous(),
                    };
                    session.error = Some(err.to_string());
                    state.session = session;
                    Err(AuthError::Api(err))
                }
            }
        })
    }
}

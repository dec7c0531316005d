//! # portal
//!
//! Framework-free session core shared by the TutorHub web client and CLI.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client (Leptos) and the terminal client both talk to the same
//! external REST backend. Everything that decides *who* is signed in, *how* a
//! request is authorized, and *where* a principal may go lives here, so the
//! two front-ends only supply a transport and a storage backend.
//!
//! LAYERS
//! ======
//! - `store`: token + user persistence behind a swappable key/value backend.
//! - `http` / `client`: transport seam and the authenticated request client.
//! - `session`: the sign-in/sign-up/sign-out state machine.
//! - `guard`: declarative page access policy.
//! - `services`: typed façades over individual backend resources.

pub mod client;
pub mod config;
pub mod guard;
pub mod http;
pub mod services;
pub mod session;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use client::{Access, ApiClient, ApiError};
pub use config::ClientConfig;
pub use guard::{AccessPolicy, GuardDecision, PageAccess};
pub use http::{HttpRequest, HttpResponse, Method, Transport, TransportError};
pub use session::{AuthError, Session, SessionController, SessionPhase};
pub use store::{KeyValueStorage, MemoryStorage, StoredCredentials, TokenStore};
pub use types::{Role, User};

/// Lock a mutex, recovering the inner value if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

//! Authenticated request client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call goes through [`ApiClient`]. It resolves URLs against the
//! configured base, attaches the stored bearer token, unwraps the backend's
//! `{success, data, error?, message?}` envelope, and classifies failures.
//!
//! SESSION EXPIRY
//! ==============
//! A 401 on a bearer request means the stored token is dead. The client clears
//! the token store before returning, so no later call can reuse it, then fires
//! the session-invalid hook. Navigation is left to whoever installed the hook.
//! Credential exchanges (sign-in/sign-up) are exempt: there a 401 only means
//! the password was wrong.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::config::ClientConfig;
use crate::http::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use crate::store::{KeyValueStorage, TokenStore};

/// How a request is authorized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Attach the stored token when present; a 401 invalidates the session.
    Bearer,
    /// Credential exchange: never sends a token, a 401 is a plain rejection.
    Credentials,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("{}", .message.as_deref().unwrap_or("session expired"))]
    Unauthorized { message: Option<String> },
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("server error ({status})")]
    Server { status: u16, message: Option<String> },
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// HTTP status behind the error, when a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Rejected { status, .. } | ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout(_) => ApiError::Timeout,
            TransportError::Network(message) => ApiError::Network(message),
        }
    }
}

/// Backend response wrapper.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: serde_json::Value,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl Envelope {
    fn server_message(&self) -> Option<String> {
        self.error
            .iter()
            .chain(self.message.iter())
            .find(|text| !text.trim().is_empty())
            .cloned()
    }
}

type SessionInvalidHook = Arc<dyn Fn() + Send + Sync>;

pub struct ApiClient<T, S> {
    config: ClientConfig,
    transport: T,
    store: Arc<TokenStore<S>>,
    on_session_invalid: Option<SessionInvalidHook>,
}

impl<T: Clone, S> Clone for ApiClient<T, S> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            transport: self.transport.clone(),
            store: Arc::clone(&self.store),
            on_session_invalid: self.on_session_invalid.clone(),
        }
    }
}

impl<T: Transport, S: KeyValueStorage> ApiClient<T, S> {
    pub fn new(config: ClientConfig, transport: T, storage: S) -> Self {
        Self { config, transport, store: Arc::new(TokenStore::new(storage)), on_session_invalid: None }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn store(&self) -> &TokenStore<S> {
        &self.store
    }

    /// Install the single listener told about server-side session rejection.
    pub fn set_session_invalid_hook(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.on_session_invalid = Some(Arc::new(hook));
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Get, path, None, Access::Bearer).await
    }

    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        self.request(Method::Post, path, Some(encode(body)?), Access::Bearer).await
    }

    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        self.request(Method::Put, path, Some(encode(body)?), Access::Bearer).await
    }

    pub async fn patch<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        self.request(Method::Patch, path, Some(encode(body)?), Access::Bearer).await
    }

    /// Delete a resource, ignoring whatever payload the backend echoes back.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request::<IgnoredAny>(Method::Delete, path, None, Access::Bearer)
            .await
            .map(|_| ())
    }

    /// Credential exchange: POST without a bearer token.
    pub async fn exchange<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.request(Method::Post, path, Some(encode(body)?), Access::Credentials).await
    }

    /// Send a request and decode the envelope's `data` as `R`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`]; a 401 under [`Access::Bearer`] additionally clears
    /// the token store and fires the session-invalid hook.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        access: Access,
    ) -> Result<R, ApiError> {
        let url = self.config.url(path);
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        if access == Access::Bearer {
            if let Some(token) = self.store.token() {
                headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
            }
        }

        log::debug!("{} {url}", method.as_str());
        let request = HttpRequest { method, url, headers, body, timeout: self.config.timeout };
        let response = self.transport.send(request).await.map_err(|err| {
            log::warn!("{} {path} failed: {err}", method.as_str());
            ApiError::from(err)
        })?;
        self.interpret(response, access)
    }

    fn interpret<R: DeserializeOwned>(&self, response: HttpResponse, access: Access) -> Result<R, ApiError> {
        let status = response.status;
        let envelope = serde_json::from_str::<Envelope>(&response.body);

        if status == 401 && access == Access::Bearer {
            let message = envelope.as_ref().map_or(None, Envelope::server_message);
            self.invalidate_session();
            return Err(ApiError::Unauthorized { message });
        }

        if !response.is_success() {
            let message = envelope.as_ref().map_or(None, Envelope::server_message);
            if status >= 500 {
                return Err(ApiError::Server { status, message });
            }
            let message = message.unwrap_or_else(|| format!("request failed ({status})"));
            return Err(ApiError::Rejected { status, message });
        }

        let envelope = envelope.map_err(|err| ApiError::Malformed(err.to_string()))?;
        if !envelope.success {
            let message = envelope.server_message().unwrap_or_else(|| "request failed".to_owned());
            return Err(ApiError::Rejected { status, message });
        }
        serde_json::from_value(envelope.data).map_err(|err| ApiError::Malformed(err.to_string()))
    }

    fn invalidate_session(&self) {
        log::warn!("backend rejected the stored token; clearing session");
        self.store.clear();
        if let Some(hook) = &self.on_session_invalid {
            hook();
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|err| ApiError::Encode(err.to_string()))
}

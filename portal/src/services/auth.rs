//! Credential exchange endpoints.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ApiError};
use crate::http::Transport;
use crate::store::KeyValueStorage;
use crate::types::{Role, User};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Registration form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

/// Token and profile returned by a successful exchange.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

impl AuthPayload {
    fn validated(self) -> Result<Self, ApiError> {
        if self.token.trim().is_empty() {
            return Err(ApiError::Malformed("auth response carried an empty token".to_owned()));
        }
        Ok(self)
    }
}

/// `POST /auth/login`.
pub async fn login<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    email: &str,
    password: &str,
) -> Result<AuthPayload, ApiError> {
    let body = LoginBody { email: email.trim(), password };
    client.exchange::<_, AuthPayload>(LOGIN_PATH, &body).await?.validated()
}

/// `POST /auth/register`.
pub async fn register<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    request: &SignUpRequest,
) -> Result<AuthPayload, ApiError> {
    client.exchange::<_, AuthPayload>(REGISTER_PATH, request).await?.validated()
}

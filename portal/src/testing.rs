//! Scripted transport and fixtures for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::http::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::store::MemoryStorage;
use crate::types::{Role, User};

#[derive(Default)]
struct Script {
    responses: VecDeque<Result<HttpResponse, TransportError>>,
    requests: Vec<HttpRequest>,
}

/// Replays queued responses in order and records every request it sees.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    script: Arc<Mutex<Script>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
        self.respond_raw(status, &body.to_string())
    }

    pub(crate) fn respond_raw(&self, status: u16, body: &str) -> &Self {
        crate::lock(&self.script)
            .responses
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub(crate) fn fail(&self, err: TransportError) -> &Self {
        crate::lock(&self.script).responses.push_back(Err(err));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        crate::lock(&self.script).requests.clone()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut script = crate::lock(&self.script);
        script.requests.push(request);
        script
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_owned())))
    }
}

pub(crate) fn client() -> (ApiClient<MockTransport, MemoryStorage>, MockTransport) {
    let transport = MockTransport::new();
    let client = ApiClient::new(ClientConfig::new("https://api.test"), transport.clone(), MemoryStorage::new());
    (client, transport)
}

pub(crate) fn user(id: &str, role: Role) -> User {
    User {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        full_name: format!("User {id}"),
        role,
        avatar_url: None,
    }
}

pub(crate) fn ok(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "success": true, "data": data })
}

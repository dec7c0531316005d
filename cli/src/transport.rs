//! `reqwest`-backed [`Transport`] for the terminal client.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use portal::{HttpRequest, HttpResponse, Method, Transport, TransportError};

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tutorhub-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let timeout = request.timeout;
        let mut builder = self.client.request(reqwest_method(request.method), &request.url).timeout(timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");
        let response = builder.send().await.map_err(|e| classify(&e, timeout))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| classify(&e, timeout))?;
        tracing::debug!(status, bytes = body.len(), "received response");
        Ok(HttpResponse { status, body })
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn classify(error: &reqwest::Error, timeout: Duration) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout(timeout)
    } else {
        TransportError::Network(error.to_string())
    }
}

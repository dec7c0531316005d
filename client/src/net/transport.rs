//! `fetch`-backed [`Transport`] for the browser.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` deadline so a stalled request resolves as a timeout.
//! Server-side (SSR): every call fails with a network error, since the
//! backend is only ever contacted from the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use portal::{HttpRequest, HttpResponse, Transport, TransportError};

/// Browser transport. Stateless, so it is freely shared through context.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};

            let timeout = request.timeout;
            let exchange = Box::pin(exchange(request));
            let deadline = Box::pin(gloo_timers::future::sleep(timeout));
            match select(exchange, deadline).await {
                Either::Left((result, _)) => result,
                Either::Right(_) => Err(TransportError::Timeout(timeout)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Network(SERVER_SIDE_MESSAGE.to_owned()))
        }
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
const SERVER_SIDE_MESSAGE: &str = "backend requests are only issued from the browser";

#[cfg(feature = "hydrate")]
async fn exchange(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    use gloo_net::http::Request;
    use portal::Method;

    let url = request.url.as_str();
    let mut builder = match request.method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let prepared = match &request.body {
        Some(body) => builder.body(body.to_string()),
        None => builder.build(),
    }
    .map_err(network_error)?;

    let response = prepared.send().await.map_err(network_error)?;
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;
    Ok(HttpResponse { status, body })
}

#[cfg(feature = "hydrate")]
fn network_error(error: gloo_net::Error) -> TransportError {
    leptos::logging::warn!("request failed: {error}");
    TransportError::Network(error.to_string())
}

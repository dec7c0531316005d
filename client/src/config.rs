//! Build-time client configuration.
//!
//! The WASM bundle has no process environment at runtime, so the backend
//! base URL is baked in when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use portal::ClientConfig;
use portal::config::DEFAULT_API_BASE_URL;

/// Backend base URL, from `TUTORHUB_API_BASE_URL` at build time.
pub fn api_base_url() -> &'static str {
    option_env!("TUTORHUB_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

pub fn client_config() -> ClientConfig {
    ClientConfig::new(api_base_url())
}

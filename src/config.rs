//! Host settings read from the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
}

impl HostConfig {
    /// # Errors
    ///
    /// Returns [`HostError::InvalidPort`] when `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, HostError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { port })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

pub(crate) fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| HostError::InvalidPort(value.to_owned())),
    }
}

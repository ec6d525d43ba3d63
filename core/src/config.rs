//! Client configuration read from the process environment.
//!
//! Fetch code never touches `std::env`; values are read once here and
//! passed down explicitly.

use std::time::Duration;

use crate::client::ListClient;
use crate::transport::UreqTransport;

/// Variable naming the hosted development environment, if any.
pub const CODESPACE_NAME_VAR: &str = "CODESPACE_NAME";

/// Optional override for the HTTP timeout, in milliseconds.
pub const HTTP_TIMEOUT_VAR: &str = "OCTOFIT_HTTP_TIMEOUT_MS";

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Where the backend is hosted. Absence of a codespace name means local
/// development.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    codespace_name: Option<String>,
}

impl Environment {
    pub fn local() -> Self {
        Self::default()
    }

    /// An empty name is treated as absent; any other name is used as given.
    pub fn codespace(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            codespace_name: (!name.is_empty()).then_some(name),
        }
    }

    pub fn from_env() -> Self {
        Self::from_var(std::env::var(CODESPACE_NAME_VAR).ok())
    }

    fn from_var(value: Option<String>) -> Self {
        value.map(Self::codespace).unwrap_or_default()
    }

    pub fn codespace_name(&self) -> Option<&str> {
        self.codespace_name.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub environment: Environment,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::local(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(CODESPACE_NAME_VAR).ok(),
            std::env::var(HTTP_TIMEOUT_VAR).ok(),
        )
    }

    fn from_vars(codespace_name: Option<String>, timeout_ms: Option<String>) -> Self {
        let timeout = match timeout_ms {
            Some(raw) => parse_timeout(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "ignoring invalid {HTTP_TIMEOUT_VAR}");
                Duration::from_millis(DEFAULT_TIMEOUT_MS)
            }),
            None => Duration::from_millis(DEFAULT_TIMEOUT_MS),
        };
        Self {
            environment: Environment::from_var(codespace_name),
            timeout,
        }
    }

    pub fn client(&self) -> ListClient {
        ListClient::new(self.environment.clone())
    }

    pub fn transport(&self) -> UreqTransport {
        UreqTransport::new(self.timeout)
    }
}

fn parse_timeout(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(ms) => Some(Duration::from_millis(ms)),
    }
}

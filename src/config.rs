//! Client configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`). The account address may additionally be given on the
//! command line ([`crate::cli::Cli`]), see [`ClientConfig::with_address`].

use std::str::FromStr;

use crate::error::ClientError;
use crate::ws::endpoint::{Endpoint, Scheme};

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ClientError::Config(format!("unknown log format `{other}`"))),
        }
    }
}

/// Top-level client configuration.
///
/// Loaded once at startup via [`ClientConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Account address rendered into the page's `address` attribute.
    pub address: Option<String>,

    /// Event server endpoint.
    pub endpoint: Endpoint,

    /// Initial title text of the page.
    pub title: String,

    /// Tracing output format.
    pub log_format: LogFormat,
}

impl ClientConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if `EVENT_TAIL_WS_SCHEME` or
    /// `LOG_FORMAT` hold an unknown value.
    pub fn from_env() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let address = lookup("EVENT_TAIL_ADDRESS");

        let scheme: Scheme = parse_or("EVENT_TAIL_WS_SCHEME", &lookup, Scheme::Ws)?;
        let host =
            lookup("EVENT_TAIL_WS_HOST").unwrap_or_else(|| Endpoint::DEFAULT_HOST.to_string());
        let path =
            lookup("EVENT_TAIL_WS_PATH").unwrap_or_else(|| Endpoint::DEFAULT_PATH.to_string());

        let title = lookup("EVENT_TAIL_TITLE").unwrap_or_else(|| "Account storage".to_string());
        let log_format = parse_or("LOG_FORMAT", &lookup, LogFormat::Pretty)?;

        Ok(Self {
            address,
            endpoint: Endpoint::new(scheme, host, path),
            title,
            log_format,
        })
    }

    /// Overrides the address when `address` is `Some`.
    #[must_use]
    pub fn with_address(mut self, address: Option<String>) -> Self {
        if address.is_some() {
            self.address = address;
        }
        self
    }
}

/// Parses `key` with [`FromStr`], returning `default` when it is unset.
fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T, ClientError>
where
    T: FromStr<Err = ClientError>,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value.parse(),
        None => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ClientConfig, ClientError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ClientConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_local_server() {
        let Ok(config) = load(&[]) else {
            panic!("empty environment must load");
        };
        assert_eq!(config.address, None);
        assert_eq!(config.endpoint, Endpoint::default());
        assert_eq!(config.title, "Account storage");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn reads_every_variable() {
        let Ok(config) = load(&[
            ("EVENT_TAIL_ADDRESS", "0x1654653399040a61"),
            ("EVENT_TAIL_WS_SCHEME", "wss"),
            ("EVENT_TAIL_WS_HOST", "events.example.org"),
            ("EVENT_TAIL_WS_PATH", "/stream"),
            ("EVENT_TAIL_TITLE", "Storage of"),
            ("LOG_FORMAT", "JSON"),
        ]) else {
            panic!("valid environment must load");
        };
        assert_eq!(config.address.as_deref(), Some("0x1654653399040a61"));
        assert_eq!(config.endpoint.scheme(), Scheme::Wss);
        assert_eq!(config.endpoint.host(), "events.example.org");
        assert_eq!(config.endpoint.path(), "/stream");
        assert_eq!(config.title, "Storage of");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn unknown_scheme_is_a_config_error() {
        let result = load(&[("EVENT_TAIL_WS_SCHEME", "http")]);
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn unknown_log_format_is_a_config_error() {
        let result = load(&[("LOG_FORMAT", "xml")]);
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn argument_overrides_environment_address() {
        let Ok(config) = load(&[("EVENT_TAIL_ADDRESS", "0x01")]) else {
            panic!("valid environment must load");
        };
        let config = config.with_address(Some("0x02".to_string()));
        assert_eq!(config.address.as_deref(), Some("0x02"));

        let config = config.with_address(None);
        assert_eq!(config.address.as_deref(), Some("0x02"));
    }
}

//! Event server endpoint and subscription URL construction.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::error::ClientError;
use crate::session::Address;

/// Characters escaped inside a query parameter value.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// WebSocket URL scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Plain-text WebSocket.
    #[default]
    Ws,
    /// WebSocket over TLS.
    Wss,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ws => f.write_str("ws"),
            Self::Wss => f.write_str("wss"),
        }
    }
}

impl FromStr for Scheme {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ws" => Ok(Self::Ws),
            "wss" => Ok(Self::Wss),
            other => Err(ClientError::Config(format!(
                "unknown websocket scheme `{other}`"
            ))),
        }
    }
}

/// Location of the event server's WebSocket endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    scheme: Scheme,
    host: String,
    path: String,
}

impl Endpoint {
    /// Host used when none is configured.
    pub const DEFAULT_HOST: &'static str = "localhost:8080";
    /// Path used when none is configured.
    pub const DEFAULT_PATH: &'static str = "/ws";

    /// Creates an endpoint. A missing leading `/` is added to `path`.
    #[must_use]
    pub fn new(scheme: Scheme, host: impl Into<String>, path: impl Into<String>) -> Self {
        let mut path = path.into();
        if !path.starts_with('/') {
            path.insert(0, '/');
        }
        Self {
            scheme,
            host: host.into(),
            path,
        }
    }

    /// Returns the URL scheme.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Returns the `host[:port]` part.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the path, always starting with `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Builds the subscription URL for `address`.
    ///
    /// The address is passed as the `address` query parameter.
    #[must_use]
    pub fn url_for(&self, address: &Address) -> String {
        format!(
            "{}://{}{}?address={}",
            self.scheme,
            self.host,
            self.path,
            utf8_percent_encode(address.as_str(), QUERY_VALUE)
        )
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(Scheme::Ws, Self::DEFAULT_HOST, Self::DEFAULT_PATH)
    }
}

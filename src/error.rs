//! Client error types.
//!
//! [`ClientError`] is the central error type of the client. Each variant
//! belongs to one category of the error taxonomy:
//!
//! | Category      | Variants                  | Handling                         |
//! |---------------|---------------------------|----------------------------------|
//! | Capability    | `Unsupported`             | fatal, reported on stderr        |
//! | Configuration | `Config`, `MissingAddress`| fatal / rendered as a page line  |
//! | Inbound frame | `Decode`                  | logged and ignored               |
//! | Connection    | `Connect`, `Transport`    | treated as a close               |
//! | Output        | `Io`                      | logged                           |

/// Client-side error enum.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The connector cannot speak the endpoint's scheme.
    #[error("websocket scheme `{0}` is not supported by this client")]
    Unsupported(String),

    /// The page carries no address to subscribe to.
    #[error("An app error occurred. Address is expected to not be empty at this point.")]
    MissingAddress,

    /// A configuration value could not be interpreted.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A second session start was attempted on the same page.
    #[error("a session is already active for this page")]
    AlreadyStarted,

    /// The WebSocket handshake failed.
    #[error("could not connect to {url}: {reason}")]
    Connect {
        /// Endpoint that was dialed.
        url: String,
        /// Underlying failure.
        reason: String,
    },

    /// The connection failed after being established.
    #[error("transport error: {0}")]
    Transport(String),

    /// An inbound frame could not be decoded into an event.
    #[error("malformed frame: {0}")]
    Decode(#[from] serde_json::Error),

    /// Writing to the display failed.
    #[error("display error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Returns `true` when the error must halt the client before any
    /// connection is attempted.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Unsupported(_) | Self::Config(_))
    }
}

impl From<tokio_tungstenite::tungstenite::Error> for ClientError {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn capability_and_config_errors_are_fatal() {
        assert!(ClientError::Unsupported("wss".to_string()).is_fatal());
        assert!(ClientError::Config("bad".to_string()).is_fatal());
    }

    #[test]
    fn connection_errors_are_not_fatal() {
        assert!(!ClientError::MissingAddress.is_fatal());
        assert!(!ClientError::Transport("reset".to_string()).is_fatal());
        assert!(
            !ClientError::Connect {
                url: "ws://localhost:8080/ws".to_string(),
                reason: "refused".to_string(),
            }
            .is_fatal()
        );
    }

    #[test]
    fn missing_address_message_is_the_page_line() {
        assert_eq!(
            ClientError::MissingAddress.to_string(),
            "An app error occurred. Address is expected to not be empty at this point."
        );
    }

    #[test]
    fn json_errors_convert_to_decode() {
        let err = serde_json::from_str::<serde_json::Value>("{").err();
        let Some(err) = err else {
            panic!("expected a parse error");
        };
        assert!(matches!(ClientError::from(err), ClientError::Decode(_)));
    }
}

//! Inbound WebSocket message types.
//!
//! The server pushes one JSON object per text frame, discriminated by its
//! `type` field. The client never sends application messages.

use serde::Deserialize;

use crate::error::ClientError;

/// Event pushed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// One account register, rendered as a header line and a body line.
    Register {
        /// Register key and its decoded form.
        register_header: String,
        /// Hex dump of the register value.
        register: String,
    },
    /// Storage usage summary.
    Storage {
        /// Human-readable summary line.
        storage_message: String,
    },
    /// Block height the registers were read at.
    Block {
        /// Pre-formatted height text.
        block_height: String,
    },
    /// Server-side failure.
    Error {
        /// Error description.
        error: String,
    },
    /// Any `type` this client does not know about.
    #[serde(other)]
    Unknown,
}

impl ServerEvent {
    /// Decodes a text frame.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] if the frame is not a JSON object
    /// with a `type` field and the fields that type requires.
    pub fn from_frame(text: &str) -> Result<Self, ClientError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Returns the wire name of the event type.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Register { .. } => "register",
            Self::Storage { .. } => "storage",
            Self::Block { .. } => "block",
            Self::Error { .. } => "error",
            Self::Unknown => "unknown",
        }
    }
}

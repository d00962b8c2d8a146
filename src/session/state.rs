//! Session lifecycle state machine.
//!
//! ```text
//! Idle ──Start──▶ Connecting ──Open/Message──▶ Connected
//!                     │                            │
//!                     └──────────Close─────────────┴──▶ Closed
//! ```
//!
//! `Closed` is terminal: there is no way back to `Connecting`.

use std::fmt;

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Created, no connection attempted.
    #[default]
    Idle,
    /// Connection requested, nothing received yet.
    Connecting,
    /// Connection open or at least one frame received.
    Connected,
    /// Connection closed by the server or lost.
    Closed,
}

/// Input driving a [`SessionState`] transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    /// Session started with a valid address.
    Start,
    /// Transport reported the connection as open.
    Open,
    /// A frame arrived.
    Message,
    /// Transport reported the connection as closed.
    Close,
}

impl SessionState {
    /// Returns the state after `input`, or `None` if `input` is not
    /// accepted in this state.
    #[must_use]
    pub const fn next(self, input: SessionInput) -> Option<Self> {
        match (self, input) {
            (Self::Idle, SessionInput::Start) => Some(Self::Connecting),
            (Self::Connecting | Self::Connected, SessionInput::Open | SessionInput::Message) => {
                Some(Self::Connected)
            }
            (Self::Connecting | Self::Connected, SessionInput::Close) => Some(Self::Closed),
            _ => None,
        }
    }

    /// Returns `true` once the session has closed.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Closed => "closed",
        };
        f.write_str(name)
    }
}

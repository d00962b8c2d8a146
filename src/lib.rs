//! # event-tail
//!
//! WebSocket client that subscribes to an event server for one account
//! address and renders the pushed events as text lines.
//!
//! ## Architecture
//!
//! ```text
//! Event server (ws://<host>/ws?address=<address>)
//!     │
//!     ├── Connector (ws/)          dials once, yields frames
//!     │
//!     ├── Session (session/)       state machine + event dispatch
//!     │
//!     └── Page (display/)          title, append-only container, caret
//! ```
//!
//! No reconnection, no outbound messages: when the server closes the
//! connection the page gets a final `done` line and the client exits.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod session;
pub mod ws;

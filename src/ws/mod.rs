//! WebSocket layer: endpoint, inbound messages, connection handling.
//!
//! The client dials `<scheme>://<host>/ws?address=<address>` once and only
//! ever reads from the socket.

pub mod connection;
pub mod endpoint;
pub mod messages;

pub use connection::{Connector, Frame, TungsteniteConnector, run_session};
pub use endpoint::{Endpoint, Scheme};
pub use messages::ServerEvent;

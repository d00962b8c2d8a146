//! Session layer: address, lifecycle state machine, and the event sink.
//!
//! A [`Session`] owns the page it renders into and is driven by
//! [`SessionEvent`]s coming from the transport. Transition rules live in
//! [`SessionState`]; rendering lives in [`Session`].

pub mod address;
pub mod client;
pub mod state;

pub use address::Address;
pub use client::{Session, SessionEvent};
pub use state::{SessionInput, SessionState};

//! WebSocket transport and the session driver.
//!
//! [`Connector`] is the connection factory a session is run against;
//! [`TungsteniteConnector`] is the real one. [`run_session`] pumps frames
//! from the connection into a [`Session`] until the connection ends.

use std::future::Future;

use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use super::endpoint::{Endpoint, Scheme};
use crate::display::Page;
use crate::error::ClientError;
use crate::session::{Session, SessionEvent};

/// Frame read from a connection, reduced to what the session cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// UTF-8 text frame.
    Text(String),
    /// Close frame.
    Close,
    /// Binary, ping, or pong frame.
    Other,
}

/// Opens WebSocket connections.
pub trait Connector {
    /// Stream of frames of an open connection.
    type Stream: futures_util::Stream<Item = Result<Frame, ClientError>> + Unpin;

    /// Returns `true` if this connector can dial `scheme`.
    fn supports(&self, scheme: Scheme) -> bool;

    /// Dials `url`. No sub-protocol and no extra headers are sent.
    fn connect(&self, url: &str) -> impl Future<Output = Result<Self::Stream, ClientError>> + Send;
}

/// [`Connector`] backed by `tokio-tungstenite`.
///
/// Built without a TLS backend, so only `ws://` endpoints are supported.
#[derive(Debug, Clone, Copy, Default)]
pub struct TungsteniteConnector;

impl Connector for TungsteniteConnector {
    type Stream = BoxStream<'static, Result<Frame, ClientError>>;

    fn supports(&self, scheme: Scheme) -> bool {
        scheme == Scheme::Ws
    }

    async fn connect(&self, url: &str) -> Result<Self::Stream, ClientError> {
        let (socket, response) = connect_async(url).await.map_err(|err| ClientError::Connect {
            url: url.to_owned(),
            reason: err.to_string(),
        })?;
        tracing::debug!(status = %response.status(), "websocket handshake complete");

        let frames = socket.map(|msg| match msg {
            Ok(Message::Text(text)) => Ok(Frame::Text(text.as_str().to_owned())),
            Ok(Message::Close(_)) => Ok(Frame::Close),
            Ok(_) => Ok(Frame::Other),
            Err(err) => Err(ClientError::from(err)),
        });
        Ok(frames.boxed())
    }
}

/// Runs `session` against a connection made by `connector`.
///
/// A failed connection attempt, a read error, and a close frame all end
/// the session the same way.
///
/// # Errors
///
/// - [`ClientError::Unsupported`] if the connector cannot dial the
///   endpoint's scheme. Nothing is rendered and no connection is tried.
/// - Any error from [`Session::start`]. No connection is tried.
pub async fn run_session<C, P>(
    connector: &C,
    session: &mut Session<P>,
    endpoint: &Endpoint,
) -> Result<(), ClientError>
where
    C: Connector,
    P: Page,
{
    if !connector.supports(endpoint.scheme()) {
        return Err(ClientError::Unsupported(endpoint.scheme().to_string()));
    }

    let url = session.start(endpoint)?;

    let mut frames = match connector.connect(&url).await {
        Ok(frames) => frames,
        Err(err) => {
            tracing::warn!(session_id = %session.id(), error = %err, "connection failed");
            session.handle(SessionEvent::Close);
            return Ok(());
        }
    };
    session.handle(SessionEvent::Open);

    while let Some(frame) = frames.next().await {
        match frame {
            Ok(Frame::Text(text)) => session.handle(SessionEvent::Message(text)),
            Ok(Frame::Other) => {}
            Ok(Frame::Close) => break,
            Err(err) => {
                tracing::warn!(session_id = %session.id(), error = %err, "connection lost");
                break;
            }
        }
    }

    session.handle(SessionEvent::Close);
    Ok(())
}

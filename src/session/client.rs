//! Event display session.

use chrono::{DateTime, Utc};

use super::{Address, SessionInput, SessionState};
use crate::display::Page;
use crate::error::ClientError;
use crate::ws::endpoint::Endpoint;
use crate::ws::messages::ServerEvent;

/// Line appended when the session closes.
pub const DONE_LINE: &str = "done";

/// Transport event fed into a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The connection is open.
    Open,
    /// A text frame arrived.
    Message(String),
    /// The connection closed, gracefully or not.
    Close,
}

impl SessionEvent {
    const fn input(&self) -> SessionInput {
        match self {
            Self::Open => SessionInput::Open,
            Self::Message(_) => SessionInput::Message,
            Self::Close => SessionInput::Close,
        }
    }
}

/// One WebSocket subscription rendering into a page.
///
/// Constructed once per page. [`Session::start`] reads the page's address
/// and yields the URL to dial; every transport event afterwards goes
/// through [`Session::handle`].
#[derive(Debug)]
pub struct Session<P: Page> {
    id: uuid::Uuid,
    page: P,
    state: SessionState,
    address: Option<Address>,
    opened_at: Option<DateTime<Utc>>,
    frames: u64,
}

impl<P: Page> Session<P> {
    /// Creates an idle session bound to `page`.
    #[must_use]
    pub fn new(page: P) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            page,
            state: SessionState::Idle,
            address: None,
            opened_at: None,
            frames: 0,
        }
    }

    /// Returns the session identifier used in logs.
    #[must_use]
    pub const fn id(&self) -> uuid::Uuid {
        self.id
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the address once the session has started.
    #[must_use]
    pub const fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Returns the number of text frames handled.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns the page.
    #[must_use]
    pub const fn page(&self) -> &P {
        &self.page
    }

    /// Consumes the session, returning the page.
    pub fn into_page(self) -> P {
        self.page
    }

    /// Reads the address from the page and moves to `Connecting`.
    ///
    /// Returns the URL the transport must dial.
    ///
    /// # Errors
    ///
    /// - [`ClientError::AlreadyStarted`] if the session left `Idle`.
    /// - [`ClientError::MissingAddress`] if the page has no address; the
    ///   error is also rendered as a page line and the session stays idle.
    pub fn start(&mut self, endpoint: &Endpoint) -> Result<String, ClientError> {
        let Some(next) = self.state.next(SessionInput::Start) else {
            return Err(ClientError::AlreadyStarted);
        };

        let address = match Address::parse(self.page.address()) {
            Ok(address) => address,
            Err(err) => {
                tracing::error!(session_id = %self.id, "page has no address");
                self.print(&err.to_string());
                return Err(err);
            }
        };

        let url = endpoint.url_for(&address);
        tracing::info!(session_id = %self.id, %address, %url, "connecting");
        self.address = Some(address);
        self.state = next;
        Ok(url)
    }

    /// Applies one transport event.
    ///
    /// Events the current state does not accept are dropped, which is how
    /// frames arriving after close are discarded.
    pub fn handle(&mut self, event: SessionEvent) {
        let Some(next) = self.state.next(event.input()) else {
            if self.state.is_terminal() {
                tracing::debug!(session_id = %self.id, ?event, "event after close ignored");
            } else {
                tracing::debug!(
                    session_id = %self.id,
                    state = %self.state,
                    ?event,
                    "event ignored"
                );
            }
            return;
        };
        let previous = std::mem::replace(&mut self.state, next);
        if previous != next {
            tracing::debug!(session_id = %self.id, from = %previous, to = %next, "state changed");
        }

        match event {
            SessionEvent::Open => {
                self.opened_at = Some(Utc::now());
                tracing::info!(session_id = %self.id, "connected");
            }
            SessionEvent::Message(text) => {
                self.frames += 1;
                self.render_frame(&text);
            }
            SessionEvent::Close => self.close(),
        }
    }

    fn render_frame(&mut self, text: &str) {
        let event = match ServerEvent::from_frame(text) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(session_id = %self.id, error = %err, "dropping malformed frame");
                return;
            }
        };

        tracing::trace!(session_id = %self.id, kind = event.kind(), "event received");
        match event {
            ServerEvent::Register {
                register_header,
                register,
            } => {
                self.print(&register_header);
                self.print(&register);
            }
            ServerEvent::Storage { storage_message } => self.print(&storage_message),
            ServerEvent::Block { block_height } => {
                if let Err(err) = self.page.append_title(&format!(" {block_height}")) {
                    tracing::warn!(session_id = %self.id, error = %err, "title update failed");
                }
            }
            ServerEvent::Error { error } => {
                tracing::warn!(session_id = %self.id, %error, "server reported an error");
                self.print(&error);
            }
            ServerEvent::Unknown => {
                tracing::debug!(session_id = %self.id, "ignoring unknown event type");
            }
        }
    }

    fn close(&mut self) {
        if let Err(err) = self.page.remove_caret() {
            tracing::warn!(session_id = %self.id, error = %err, "caret removal failed");
        }
        self.print(DONE_LINE);

        let duration_ms = self
            .opened_at
            .map(|opened| (Utc::now() - opened).num_milliseconds());
        tracing::info!(
            session_id = %self.id,
            frames = self.frames,
            ?duration_ms,
            "session closed"
        );
    }

    /// Appends a container line and keeps the caret in view.
    fn print(&mut self, line: &str) {
        let result = self
            .page
            .append_line(line)
            .and_then(|()| self.page.scroll_to_caret());
        if let Err(err) = result {
            tracing::warn!(session_id = %self.id, error = %err, "page write failed");
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::display::BufferPage;

    const ADDRESS: &str = "0x1654653399040a61";

    fn started() -> Session<BufferPage> {
        let mut session = Session::new(BufferPage::new("Storage", Some(ADDRESS.to_string())));
        let Ok(_) = session.start(&Endpoint::default()) else {
            panic!("session with address must start");
        };
        session.handle(SessionEvent::Open);
        session
    }

    fn message(json: &str) -> SessionEvent {
        SessionEvent::Message(json.to_string())
    }

    #[test]
    fn start_returns_subscription_url() {
        let mut session = Session::new(BufferPage::new("Storage", Some(ADDRESS.to_string())));
        let url = session.start(&Endpoint::default());
        assert_eq!(
            url.ok().as_deref(),
            Some("ws://localhost:8080/ws?address=0x1654653399040a61")
        );
        assert_eq!(session.state(), SessionState::Connecting);
        assert_eq!(session.address().map(Address::as_str), Some(ADDRESS));
        assert!(session.page().lines().is_empty());
    }

    #[test]
    fn start_without_address_prints_one_error_line() {
        let mut session = Session::new(BufferPage::new("Storage", None));
        let result = session.start(&Endpoint::default());
        assert!(matches!(result, Err(ClientError::MissingAddress)));
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(
            session.page().lines(),
            ["An app error occurred. Address is expected to not be empty at this point."
                .to_string()]
        );
    }

    #[test]
    fn second_start_is_rejected() {
        let mut session = started();
        let result = session.start(&Endpoint::default());
        assert!(matches!(result, Err(ClientError::AlreadyStarted)));
        assert_eq!(session.address().map(Address::as_str), Some(ADDRESS));
    }

    #[test]
    fn storage_appends_one_line() {
        let mut session = started();
        session.handle(message(r#"{"type":"storage","storage_message":"ok"}"#));
        assert_eq!(session.page().lines(), ["ok".to_string()]);
        assert_eq!(session.page().scrolls(), 1);
    }

    #[test]
    fn register_appends_header_then_body() {
        let mut session = started();
        session.handle(message(
            r#"{"type":"register","register_header":"H","register":"R"}"#,
        ));
        assert_eq!(session.page().lines(), ["H".to_string(), "R".to_string()]);
    }

    #[test]
    fn block_suffixes_title_without_new_line() {
        let mut session = started();
        session.handle(message(r#"{"type":"block","block_height":"42"}"#));
        assert_eq!(session.page().title(), "Storage 42");
        assert!(session.page().lines().is_empty());
    }

    #[test]
    fn error_appends_one_line() {
        let mut session = started();
        session.handle(message(r#"{"type":"error","error":"archive unavailable"}"#));
        assert_eq!(session.page().lines(), ["archive unavailable".to_string()]);
    }

    #[test]
    fn unknown_type_is_ignored() {
        let mut session = started();
        session.handle(message(r#"{"type":"heartbeat"}"#));
        assert!(session.page().lines().is_empty());
        assert_eq!(session.page().title(), "Storage");
        assert_eq!(session.frames(), 1);
    }

    #[test]
    fn malformed_frame_is_dropped_and_session_continues() {
        let mut session = started();
        session.handle(message("{not json"));
        session.handle(message(r#"{"type":"storage"}"#));
        assert!(session.page().lines().is_empty());
        assert_eq!(session.state(), SessionState::Connected);

        session.handle(message(r#"{"type":"storage","storage_message":"ok"}"#));
        assert_eq!(session.page().lines(), ["ok".to_string()]);
    }

    #[test]
    fn close_removes_caret_and_prints_done_once() {
        let mut session = started();
        session.handle(message(r#"{"type":"storage","storage_message":"ok"}"#));
        session.handle(SessionEvent::Close);
        session.handle(SessionEvent::Close);

        assert_eq!(session.state(), SessionState::Closed);
        assert!(!session.page().has_caret());
        assert_eq!(
            session.page().lines(),
            ["ok".to_string(), DONE_LINE.to_string()]
        );
    }

    #[test]
    fn frames_after_close_are_not_processed() {
        let mut session = started();
        session.handle(SessionEvent::Close);
        session.handle(message(r#"{"type":"storage","storage_message":"late"}"#));
        session.handle(message(r#"{"type":"block","block_height":"9"}"#));

        assert_eq!(session.page().lines(), [DONE_LINE.to_string()]);
        assert_eq!(session.page().title(), "Storage");
        assert_eq!(session.frames(), 0);
    }

    #[test]
    fn events_before_start_are_ignored() {
        let mut session = Session::new(BufferPage::new("Storage", Some(ADDRESS.to_string())));
        session.handle(message(r#"{"type":"storage","storage_message":"ok"}"#));
        session.handle(SessionEvent::Close);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.page().lines().is_empty());
        assert!(session.page().has_caret());
    }

    #[test]
    fn first_message_connects() {
        let mut session = Session::new(BufferPage::new("Storage", Some(ADDRESS.to_string())));
        assert!(session.start(&Endpoint::default()).is_ok());
        session.handle(message(r#"{"type":"storage","storage_message":"ok"}"#));
        assert_eq!(session.state(), SessionState::Connected);
    }

    #[test]
    fn lines_keep_arrival_order() {
        let mut session = started();
        for frame in [
            r#"{"type":"block","block_height":"@ block height: 3"}"#,
            r#"{"type":"register","register_header":"h1","register":"r1"}"#,
            r#"{"type":"register","register_header":"h2","register":"r2"}"#,
            r#"{"type":"storage","storage_message":"That is everything (64 bytes)"}"#,
        ] {
            session.handle(message(frame));
        }
        session.handle(SessionEvent::Close);

        let page = session.into_page();
        assert_eq!(page.title(), "Storage @ block height: 3");
        assert_eq!(
            page.lines(),
            [
                "h1",
                "r1",
                "h2",
                "r2",
                "That is everything (64 bytes)",
                DONE_LINE
            ]
            .map(str::to_string)
        );
    }
}

//! Display layer: the page the session renders into.
//!
//! A page has a title element carrying the account `address` attribute, an
//! append-only text container, and a caret marking the end of the output.
//! [`BufferPage`] keeps everything in memory; [`TerminalPage`] writes the
//! container to one stream and the title to another.

pub mod buffer;
pub mod terminal;

pub use buffer::BufferPage;
pub use terminal::TerminalPage;

use crate::error::ClientError;

/// Rendering surface driven by a [`crate::session::Session`].
///
/// The container is append-only: lines are never edited or removed.
pub trait Page {
    /// Returns the `address` attribute of the title element, if any.
    fn address(&self) -> Option<&str>;

    /// Returns the current title text.
    fn title(&self) -> &str;

    /// Appends one line to the container.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] if the underlying output fails.
    fn append_line(&mut self, line: &str) -> Result<(), ClientError>;

    /// Appends `suffix` to the title in place.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] if the underlying output fails.
    fn append_title(&mut self, suffix: &str) -> Result<(), ClientError>;

    /// Brings the caret into view.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] if the underlying output fails.
    fn scroll_to_caret(&mut self) -> Result<(), ClientError>;

    /// Removes the caret. Removing it twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] if the underlying output fails.
    fn remove_caret(&mut self) -> Result<(), ClientError>;
}

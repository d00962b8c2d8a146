//! In-memory page.

use super::Page;
use crate::error::ClientError;

/// Page that records everything rendered into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferPage {
    title: String,
    address: Option<String>,
    lines: Vec<String>,
    caret: bool,
    scrolls: usize,
}

impl BufferPage {
    /// Creates a page with the given title and `address` attribute.
    #[must_use]
    pub fn new(title: impl Into<String>, address: Option<String>) -> Self {
        Self {
            title: title.into(),
            address,
            lines: Vec::new(),
            caret: true,
            scrolls: 0,
        }
    }

    /// Returns the container lines in append order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns `true` while the caret is still on the page.
    #[must_use]
    pub const fn has_caret(&self) -> bool {
        self.caret
    }

    /// Returns how many times the caret was scrolled into view.
    #[must_use]
    pub const fn scrolls(&self) -> usize {
        self.scrolls
    }
}

impl Page for BufferPage {
    fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn append_line(&mut self, line: &str) -> Result<(), ClientError> {
        self.lines.push(line.to_owned());
        Ok(())
    }

    fn append_title(&mut self, suffix: &str) -> Result<(), ClientError> {
        self.title.push_str(suffix);
        Ok(())
    }

    fn scroll_to_caret(&mut self) -> Result<(), ClientError> {
        if self.caret {
            self.scrolls += 1;
        }
        Ok(())
    }

    fn remove_caret(&mut self) -> Result<(), ClientError> {
        self.caret = false;
        Ok(())
    }
}

//! Page rendered to byte streams.
//!
//! Container lines go to `out` (stdout in the binary), title updates go to
//! `status` (stderr) so piping the output keeps only the event lines.
//!
//! The binary also sends tracing output to stderr, so `# <title>` lines
//! appear between log records there. Use `LOG_FORMAT=json` or redirect
//! stderr to keep them apart.

use std::io::Write;

use super::Page;
use crate::error::ClientError;

/// Page that writes to two [`Write`] streams.
#[derive(Debug)]
pub struct TerminalPage<O: Write, S: Write> {
    out: O,
    status: S,
    title: String,
    address: Option<String>,
    caret: bool,
}

impl<O: Write, S: Write> TerminalPage<O, S> {
    /// Creates the page and renders its initial title.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] if the title cannot be written.
    pub fn open(
        out: O,
        status: S,
        title: impl Into<String>,
        address: Option<String>,
    ) -> Result<Self, ClientError> {
        let mut page = Self {
            out,
            status,
            title: title.into(),
            address,
            caret: true,
        };
        page.render_title()?;
        Ok(page)
    }

    /// Consumes the page, returning both streams.
    pub fn into_inner(self) -> (O, S) {
        (self.out, self.status)
    }

    fn render_title(&mut self) -> Result<(), ClientError> {
        match &self.address {
            Some(address) => writeln!(self.status, "# {} [{address}]", self.title)?,
            None => writeln!(self.status, "# {}", self.title)?,
        }
        self.status.flush()?;
        Ok(())
    }
}

impl<O: Write, S: Write> Page for TerminalPage<O, S> {
    fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn append_line(&mut self, line: &str) -> Result<(), ClientError> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn append_title(&mut self, suffix: &str) -> Result<(), ClientError> {
        self.title.push_str(suffix);
        self.render_title()
    }

    fn scroll_to_caret(&mut self) -> Result<(), ClientError> {
        if self.caret {
            self.out.flush()?;
        }
        Ok(())
    }

    fn remove_caret(&mut self) -> Result<(), ClientError> {
        self.caret = false;
        self.out.flush()?;
        Ok(())
    }
}

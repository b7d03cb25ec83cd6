//! Line parser and export ingestion.
//!
//! [`LineParser`] turns raw export text into [`Message`]s:
//!
//! 1. The header line is dropped (see [`ParserConfig::skip_header`]).
//! 2. Each line is classified as a message start or a continuation
//!    ([`is_message_start`]).
//! 3. Continuations are appended to the pending message's body.
//! 4. Once a message is complete its body is classified.
//!
//! No line ever aborts ingestion: unreadable timestamps become `None`,
//! lines without a sender separator keep an empty body, and continuation
//! lines before the first message are dropped and counted.
//!
//! # Example
//!
//! ```rust
//! use chatstats::{LineParser, MessageKind};
//! use chatstats::config::ParserConfig;
//!
//! let export = "\
//! [7/2/24, 9:15:03 AM] Alice: Hello there
//! [7/2/24, 9:16:10 AM] Bob: first line
//! second line
//! [7/2/24, 9:20:00 AM] Bob: Llamada de voz · 4 min";
//!
//! let parser = LineParser::with_config(ParserConfig::new().with_skip_header(false));
//! let messages = parser.parse_str(export);
//!
//! assert_eq!(messages.len(), 3);
//! assert_eq!(messages[1].body(), "first line\nsecond line");
//! assert_eq!(messages[2].kind(), MessageKind::Call);
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::Message;
use crate::config::ParserConfig;
use crate::core::store::MessageStore;
use crate::error::{ChatstatsError, Result};
use crate::parsing::line::MessageHead;
use crate::parsing::markers::is_message_start;

/// Counters collected during one ingestion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    /// Lines examined, excluding a skipped header
    pub lines: usize,
    /// Messages produced
    pub messages: usize,
    /// Lines merged into a preceding message
    pub continuation_lines: usize,
    /// Continuation lines with no message to attach to
    pub orphan_lines: usize,
    /// Messages whose timestamp could not be parsed
    pub missing_timestamps: usize,
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatstats::LineParser;
///
/// let parser = LineParser::new();
/// let messages = parser.parse("_chat.txt".as_ref())?;
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    config: ParserConfig,
}

impl LineParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a single message start line.
    ///
    /// Continuation lines are not accepted here; use
    /// [`parse_lines`](Self::parse_lines) for whole exports.
    ///
    /// ```rust
    /// use chatstats::{LineParser, MessageKind};
    ///
    /// let msg = LineParser::new().parse_line("[7/2/24, 9:15:03 AM] Alice: Hello there")?;
    /// assert_eq!(msg.sender(), "Alice");
    /// assert_eq!(msg.body(), "Hello there");
    /// assert_eq!(msg.kind(), MessageKind::Text);
    ///
    /// assert!(LineParser::new().parse_line("just text").is_err());
    /// # Ok::<(), chatstats::ChatstatsError>(())
    /// ```
    pub fn parse_line(&self, line: &str) -> Result<Message> {
        if !is_message_start(line) {
            return Err(ChatstatsError::not_message_start(line));
        }
        Ok(MessageHead::parse(line).into_message())
    }

    /// Parses a sequence of export lines, merging continuation lines.
    pub fn parse_lines<'a, I>(&self, lines: I) -> Vec<Message>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.parse_lines_with_summary(lines).0
    }

    /// Like [`parse_lines`](Self::parse_lines), also returning ingestion counters.
    pub fn parse_lines_with_summary<'a, I>(&self, lines: I) -> (Vec<Message>, IngestSummary)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut lines = lines.into_iter();
        if self.config.skip_header {
            if let Some(header) = lines.next() {
                debug!(header = %header, "skipped export header");
            }
        }

        let mut summary = IngestSummary::default();
        let mut messages: Vec<Message> = Vec::new();
        let mut pending: Option<MessageHead> = None;

        for line in lines {
            summary.lines += 1;

            if is_message_start(line) {
                if let Some(head) = pending.take() {
                    messages.push(head.into_message());
                }
                pending = Some(MessageHead::parse(line));
            } else if let Some(head) = pending.as_mut() {
                head.push_continuation(line);
                summary.continuation_lines += 1;
            } else {
                debug!(line = %line, "dropping continuation line before first message");
                summary.orphan_lines += 1;
            }
        }

        if let Some(head) = pending {
            messages.push(head.into_message());
        }

        summary.messages = messages.len();
        summary.missing_timestamps = messages
            .iter()
            .filter(|m| m.timestamp().is_none())
            .count();

        debug!(
            lines = summary.lines,
            messages = summary.messages,
            continuation_lines = summary.continuation_lines,
            orphan_lines = summary.orphan_lines,
            missing_timestamps = summary.missing_timestamps,
            "ingestion finished"
        );

        (messages, summary)
    }

    /// Parses export text already held in memory.
    pub fn parse_str(&self, content: &str) -> Vec<Message> {
        self.parse_lines(content.lines())
    }

    /// Reads and parses an export file.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than rejected, so one
    /// damaged line does not lose the rest of the export.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let content = read_export(path)?;
        Ok(self.parse_str(&content))
    }

    /// Reads an export file into a fresh [`MessageStore`], with counters.
    pub fn parse_store(&self, path: &Path) -> Result<(MessageStore, IngestSummary)> {
        let content = read_export(path)?;
        let (messages, summary) = self.parse_lines_with_summary(content.lines());
        Ok((MessageStore::from_messages(messages), summary))
    }
}

/// Reads an export, decoding invalid UTF-8 lossily.
fn read_export(path: &Path) -> Result<String> {
    match String::from_utf8(fs::read(path)?) {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!(
                path = %path.display(),
                valid_up_to = err.utf8_error().valid_up_to(),
                "export is not valid UTF-8, replacing invalid bytes"
            );
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

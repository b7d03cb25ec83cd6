//! Combined message filter by sender, date window and body text.
//!
//! [`FilterConfig`] bundles several criteria so a caller (the CLI, for
//! instance) can narrow a [`MessageStore`] before building a report. For a
//! single criterion, the query methods on [`MessageStore`] are simpler.
//!
//! # Example
//!
//! ```
//! use chatstats::core::filter::FilterConfig;
//! use chatstats::{LineParser, MessageStore};
//! use chatstats::config::ParserConfig;
//!
//! # fn main() -> chatstats::Result<()> {
//! let export = "\
//! [1/1/24, 9:00:00 AM] Alice: Old
//! [6/15/24, 9:00:00 AM] Alice: New
//! [6/15/24, 9:05:00 AM] Bob: New too";
//! let parser = LineParser::with_config(ParserConfig::new().with_skip_header(false));
//! let store: MessageStore = parser.parse_str(export).into_iter().collect();
//!
//! let config = FilterConfig::new()
//!     .with_sender("Alice")
//!     .with_date_from("2024-06-01")?;
//!
//! let filtered = store.filtered(&config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered.messages()[0].body(), "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Messages without timestamps are **excluded** when date filters are active
//! - Sender matching is exact
//! - Multiple filters are combined with AND logic

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::Message;
use crate::core::store::MessageStore;
use crate::error::ChatstatsError;

/// Configuration for filtering messages.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages at or after this instant.
    pub after: Option<NaiveDateTime>,

    /// Include only messages at or before this instant.
    pub before: Option<NaiveDateTime>,

    /// Include only messages from this sender.
    pub from: Option<String>,

    /// Include only messages whose body contains this text.
    pub contains: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive, from 00:00:00).
    ///
    /// Date format: `YYYY-MM-DD`.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatstatsError> {
        let date = parse_date(date_str)?;
        self.after = Some(date.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the end date filter (inclusive, through 23:59:59).
    ///
    /// Date format: `YYYY-MM-DD`.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatstatsError> {
        let date = parse_date(date_str)?;
        let end_of_day =
            NaiveTime::from_hms_opt(23, 59, 59).ok_or_else(|| ChatstatsError::invalid_date(date_str))?;
        self.before = Some(date.and_time(end_of_day));
        Ok(self)
    }

    /// Sets the sender filter.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.from = Some(sender.into());
        self
    }

    /// Sets the body substring filter.
    #[must_use]
    pub fn with_contains(mut self, text: impl Into<String>) -> Self {
        self.contains = Some(text.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.from.is_some() || self.contains.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `msg` passes every active filter.
    pub fn matches(&self, msg: &Message) -> bool {
        if let Some(ref from) = self.from {
            if msg.sender() != from {
                return false;
            }
        }

        if let Some(ref needle) = self.contains {
            if !msg.body().contains(needle.as_str()) {
                return false;
            }
        }

        if self.has_date_filter() {
            let Some(ts) = msg.timestamp() else {
                return false;
            };
            if self.after.is_some_and(|after| ts < after) {
                return false;
            }
            if self.before.is_some_and(|before| ts > before) {
                return false;
            }
        }

        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, ChatstatsError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatstatsError::invalid_date(date_str))
}

/// Copies the messages of `store` that pass `config` into a new store.
pub fn apply_filters(store: &MessageStore, config: &FilterConfig) -> MessageStore {
    store
        .iter()
        .filter(|msg| config.matches(msg))
        .cloned()
        .collect()
}

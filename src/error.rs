//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! Most oddities in a chat export are *not* errors. A timestamp that fails to
//! parse, a line without a `:` separator or a call with a garbled duration all
//! degrade to an absent field and ingestion carries on. The variants below are
//! reserved for conditions where no sensible value exists.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::MessageStore;
///
/// fn average(store: &MessageStore) -> Result<f64> {
///     store.average_length()
/// }
///
/// assert!(average(&MessageStore::new()).is_err());
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred while reading an export.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A line handed to [`LineParser::parse_line`](crate::LineParser::parse_line)
    /// does not begin with the `[` start marker.
    #[error("Line does not start a message: '{line}'")]
    NotMessageStart {
        /// The offending line, truncated for display
        line: String,
    },

    /// A mean or extremum query ran against a store with no messages.
    #[error("Cannot compute {query} of an empty message store")]
    EmptyStore {
        /// Name of the query that was attempted
        query: &'static str,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// The requested output format is unknown or was compiled out.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// Which format was being selected
        format: &'static str,
        /// Details about the problem
        message: String,
    },

    /// JSON serialization error while rendering a report.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates a "not a message start" error, keeping at most 40 characters
    /// of the line.
    pub fn not_message_start(line: &str) -> Self {
        ChatstatsError::NotMessageStart {
            line: line.chars().take(40).collect(),
        }
    }

    /// Creates an empty store error for the named query.
    pub fn empty_store(query: &'static str) -> Self {
        ChatstatsError::EmptyStore { query }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatsError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this is an empty store error.
    pub fn is_empty_store(&self) -> bool {
        matches!(self, ChatstatsError::EmptyStore { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatsError::InvalidDate { .. })
    }
}

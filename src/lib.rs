//! # Chatstats
//!
//! A Rust library for parsing WhatsApp text exports and computing
//! descriptive statistics about the conversation.
//!
//! ## Overview
//!
//! An export is a plain text file where every message starts with a
//! bracketed timestamp:
//!
//! ```text
//! [7/2/24, 9:15:03 a. m.] Alice: Hola
//! [7/2/24, 9:16:10 a. m.] Bob: ‎imagen omitida
//! [7/2/24, 9:20:00 a. m.] Bob: ‎Llamada de voz · 12 min
//! ```
//!
//! Chatstats reads such files line by line, joins multi-line messages,
//! strips the invisible direction marks the exporter inserts, classifies
//! each message (text, image, video, sticker, call, videocall) and puts
//! everything in a [`MessageStore`] that answers the usual questions: who
//! writes the most, how long the calls were, which days were busiest.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = LineParser::new();
//!     let (store, _summary) = parser.parse_store("_chat.txt".as_ref())?;
//!
//!     for (sender, count) in store.count_by_sender() {
//!         println!("{sender}: {count}");
//!     }
//!     println!("call minutes: {}", store.total_call_minutes());
//!
//!     let report = Report::build(&store, &ReportConfig::new());
//!     println!("{report}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`LineParser`], ingestion of whole exports
//! - [`parsing`] - the pure per-line helpers (markers, timestamps, kinds)
//! - [`message`] - [`Message`] and [`MessageKind`]
//! - [`core`](crate::core) - [`MessageStore`], [`FilterConfig`](core::FilterConfig), aggregate types
//! - [`report`] - [`Report`](report::Report), a one-shot summary
//! - [`format`] - text/JSON rendering of reports
//! - [`config`] - parser and report configuration
//! - [`cli`] - clap argument types (feature `cli`)
//! - [`error`] - [`ChatstatsError`], [`Result`]
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod report;

// Re-export the main types at the crate root for convenience
pub use crate::core::store::MessageStore;
pub use error::{ChatstatsError, Result};
pub use message::{Message, MessageKind};
pub use parser::{IngestSummary, LineParser};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{Message, MessageKind, MessageStore};

    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Parsing
    pub use crate::parser::{IngestSummary, LineParser};

    // Configuration
    pub use crate::config::{ParserConfig, ReportConfig};

    // Filtering
    pub use crate::core::filter::{FilterConfig, apply_filters};

    // Aggregates
    pub use crate::core::stats::{KindCounts, YearMonth};

    // Reporting
    pub use crate::format::{OutputFormat, to_format_string};
    pub use crate::report::Report;
}

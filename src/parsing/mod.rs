//! Pure parsing helpers for WhatsApp text exports.
//!
//! - [`markers`] - invisible marker normalization and message start detection
//! - [`timestamp`] - the bracketed `[M/D/YY, H:MM:SS AP]` prefix
//! - [`line`] - sender/body split and the per-line field pipeline
//! - [`kind`] - message kind rules and call durations
//!
//! Nothing here touches the filesystem; [`LineParser`](crate::LineParser)
//! drives these functions over a whole export.

pub mod kind;
pub mod line;
pub mod markers;
pub mod timestamp;

pub use kind::{classify, parse_duration};
pub use line::{MessageHead, split_sender};
pub use markers::{is_message_start, normalize_markers, strip_leading_markers};
pub use timestamp::{parse_timestamp, split_timestamp};

//! Bracketed timestamp prefix: `[M/D/YY, H:MM:SS AP]`.
//!
//! The export locale writes the meridiem as `a.m.`/`p.m.` (sometimes
//! `a. m.` with a narrow no-break space inside), which chrono's `%p` does not
//! accept. The raw span is normalized to `AM`/`PM` before parsing.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::{Captures, Regex};
use tracing::warn;

use super::markers::{LEFT_TO_RIGHT_MARK, normalize_markers};

/// Formats tried in order against the normalized timestamp span.
pub const TIMESTAMP_FORMATS: &[&str] = &["%m/%d/%y, %I:%M:%S %p", "%m/%d/%y, %I:%M %p"];

static MERIDIEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*([ap])\.\s?m\.").expect("meridiem pattern is valid")
});

/// Rewrites a raw timestamp span into the shape [`TIMESTAMP_FORMATS`] expects.
///
/// ```
/// use chatstats::parsing::timestamp::normalize_timestamp;
///
/// assert_eq!(normalize_timestamp("7/2/24, 9:15:03\u{202F}p.m."), "7/2/24, 9:15:03 PM");
/// assert_eq!(normalize_timestamp("7/2/24,  9:15:03 a. m."), "7/2/24, 9:15:03 AM");
/// ```
pub fn normalize_timestamp(raw: &str) -> String {
    let spaced = normalize_markers(raw);
    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");

    MERIDIEM
        .replace_all(&collapsed, |caps: &Captures<'_>| {
            if caps[1].eq_ignore_ascii_case("a") {
                " AM"
            } else {
                " PM"
            }
        })
        .into_owned()
}

/// Parses the text between the brackets. Returns `None` if no format fits.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let normalized = normalize_timestamp(raw);

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())
}

/// Splits a message start line into its timestamp and the text after it.
///
/// `line` is expected to begin with `[`. The remainder starts after the
/// closing `]` and at most two separator characters (a space and an
/// optional left-to-right mark). A failed parse is logged and yields `None`;
/// the remainder is still returned so the rest of the line can be read.
/// Without a closing bracket, everything after `[` is the remainder.
pub fn split_timestamp(line: &str) -> (Option<NaiveDateTime>, &str) {
    let after_open = line.strip_prefix('[').unwrap_or(line);

    let Some(close) = after_open.find(']') else {
        warn!(line = %line, "message start has no closing bracket");
        return (None, after_open);
    };

    let span = &after_open[..close];
    let timestamp = parse_timestamp(span);
    if timestamp.is_none() {
        warn!(timestamp = %span, "could not parse message timestamp");
    }

    let separators: &[char] = &[' ', LEFT_TO_RIGHT_MARK];
    let mut rest = &after_open[close + 1..];
    for _ in 0..2 {
        match rest.strip_prefix(separators) {
            Some(stripped) => rest = stripped,
            None => break,
        }
    }

    (timestamp, rest)
}

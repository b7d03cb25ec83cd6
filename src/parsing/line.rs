//! Field extraction for a single message start line.
//!
//! Parsing is an explicit pipeline where every step returns what it read
//! plus the text it left behind:
//!
//! ```text
//! line ──normalize──▶ split_timestamp ──▶ (timestamp, rest)
//!                                             │
//!                          split_sender(rest) ▼
//!                                         (sender, body)
//! ```
//!
//! The order matters: the sender is only searched for after the timestamp
//! has been cut off, because the time itself contains `:`.

use chrono::NaiveDateTime;

use super::markers::{normalize_markers, strip_leading_markers};
use super::timestamp::split_timestamp;
use crate::message::Message;

/// Splits `Sender: body` at the first `:`.
///
/// One space after the colon is consumed. Without a colon the whole text is
/// the sender and the body is empty.
///
/// ```
/// use chatstats::parsing::line::split_sender;
///
/// assert_eq!(split_sender("Alice: Hello: world"), ("Alice", "Hello: world"));
/// assert_eq!(split_sender("Alice:Hi"), ("Alice", "Hi"));
/// assert_eq!(split_sender("no separator"), ("no separator", ""));
/// ```
pub fn split_sender(rest: &str) -> (&str, &str) {
    match rest.split_once(':') {
        Some((sender, body)) => (sender, body.strip_prefix(' ').unwrap_or(body)),
        None => (rest, ""),
    }
}

/// The fields of a message start line, before continuation lines are
/// appended and the body is classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHead {
    /// Parsed timestamp, `None` if the prefix was unreadable
    pub timestamp: Option<NaiveDateTime>,
    /// Sender display name
    pub sender: String,
    /// Body text so far
    pub body: String,
}

impl MessageHead {
    /// Runs the field pipeline over one message start line.
    pub fn parse(line: &str) -> Self {
        let normalized = normalize_markers(strip_leading_markers(line));
        let (timestamp, rest) = split_timestamp(&normalized);
        let (sender, body) = split_sender(rest);

        Self {
            timestamp,
            sender: sender.to_string(),
            body: body.to_string(),
        }
    }

    /// Appends a continuation line to the body, keeping the line break.
    pub fn push_continuation(&mut self, line: &str) {
        self.body.push('\n');
        self.body.push_str(&normalize_markers(line));
    }

    /// Classifies the complete body and freezes the message.
    pub fn into_message(self) -> Message {
        Message::with_metadata(self.timestamp, self.sender, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageKind;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_basic_line() {
        let head = MessageHead::parse("[7/2/24, 9:15:03 AM] Alice: Hello there");
        assert_eq!(head.sender, "Alice");
        assert_eq!(head.body, "Hello there");
        assert_eq!(
            head.timestamp,
            NaiveDate::from_ymd_opt(2024, 7, 2).and_then(|d| d.and_hms_opt(9, 15, 3))
        );
    }

    #[test]
    fn test_parse_ios_markers() {
        let line = "\u{200E}[7/2/24, 9:15:03\u{202F}a.m.] Bob: \u{200E}imagen omitida";
        let head = MessageHead::parse(line);
        assert!(head.timestamp.is_some());
        assert_eq!(head.sender, "Bob");
        assert_eq!(head.body, " imagen omitida");
    }

    #[test]
    fn test_sender_with_spaces_and_unicode() {
        let head = MessageHead::parse("[7/2/24, 9:15:03 PM] María José 🌸: ¿Qué tal?");
        assert_eq!(head.sender, "María José 🌸");
        assert_eq!(head.body, "¿Qué tal?");
    }

    #[test]
    fn test_body_keeps_later_colons() {
        let head = MessageHead::parse("[7/2/24, 9:15:03 PM] Alice: see you at 10:30: ok?");
        assert_eq!(head.body, "see you at 10:30: ok?");
    }

    #[test]
    fn test_no_colon_whole_rest_is_sender() {
        let head = MessageHead::parse("[7/2/24, 9:15:03 PM] Alice changed the subject");
        assert_eq!(head.sender, "Alice changed the subject");
        assert_eq!(head.body, "");
    }

    #[test]
    fn test_continuation_classified_with_full_body() {
        let mut head = MessageHead::parse("[7/2/24, 9:15:03 PM] Alice: first");
        head.push_continuation("second\u{202F}line");
        let msg = head.into_message();
        assert_eq!(msg.body(), "first\nsecond line");
        assert_eq!(msg.kind(), MessageKind::Text);
    }

    #[test]
    fn test_continuation_can_change_kind() {
        let mut head = MessageHead::parse("[7/2/24, 9:15:03 PM] Alice: mira");
        head.push_continuation("imagen omitida");
        assert_eq!(head.into_message().kind(), MessageKind::Image);
    }
}

//! Parsed chat message and its classified kind.
//!
//! A [`Message`] is built once from an export line and never changes
//! afterwards. Its [`MessageKind`] and call duration are derived from the body
//! at construction time, so the fields are private and only readable through
//! accessors.
//!
//! # Examples
//!
//! ```
//! use chatstats::{Message, MessageKind};
//!
//! let msg = Message::new("Alice", "Hello!");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.body(), "Hello!");
//! assert_eq!(msg.kind(), MessageKind::Text);
//!
//! let call = Message::new("Bob", "Llamada de voz · 12 min");
//! assert_eq!(call.kind(), MessageKind::Call);
//! assert_eq!(call.duration_minutes(), Some(12));
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::parsing::kind::{classify, parse_duration};

/// Category of a message, inferred from its body text.
///
/// Media and call placeholders in Spanish exports are plain text such as
/// `imagen omitida` or `Videollamada · 1 h`; see
/// [`classify`](crate::parsing::kind::classify) for the rule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Ordinary text
    Text,
    /// Omitted image placeholder
    Image,
    /// Omitted video placeholder
    Video,
    /// Omitted sticker placeholder
    Sticker,
    /// Voice call record
    Call,
    /// Video call record
    VideoCall,
}

impl MessageKind {
    /// Returns all kinds in display order.
    pub fn all() -> &'static [MessageKind] {
        &[
            MessageKind::Text,
            MessageKind::Image,
            MessageKind::Video,
            MessageKind::Sticker,
            MessageKind::Call,
            MessageKind::VideoCall,
        ]
    }

    /// Returns `true` for voice and video calls.
    pub fn is_call(self) -> bool {
        matches!(self, MessageKind::Call | MessageKind::VideoCall)
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageKind::Text => write!(f, "Text"),
            MessageKind::Image => write!(f, "Image"),
            MessageKind::Video => write!(f, "Video"),
            MessageKind::Sticker => write!(f, "Sticker"),
            MessageKind::Call => write!(f, "Call"),
            MessageKind::VideoCall => write!(f, "Videocall"),
        }
    }
}

/// A single parsed chat message.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `Option<NaiveDateTime>` | Local send time; `None` when the prefix did not parse |
/// | `sender` | `String` | Display name before the first `:` |
/// | `body` | `String` | Message text, continuation lines joined with `\n` |
/// | `kind` | [`MessageKind`] | Derived from `body` |
/// | `duration_minutes` | `Option<u32>` | Call length, calls only |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<NaiveDateTime>,
    sender: String,
    body: String,
    kind: MessageKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_minutes: Option<u32>,
}

impl Message {
    /// Creates a message without a timestamp, classifying the body.
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        let body = body.into();
        let kind = classify(&body);
        let duration_minutes = if kind.is_call() {
            parse_duration(&body)
        } else {
            None
        };

        Self {
            timestamp: None,
            sender: sender.into(),
            body,
            kind,
            duration_minutes,
        }
    }

    /// Creates a message with an optional timestamp.
    pub fn with_metadata(
        timestamp: Option<NaiveDateTime>,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            ..Self::new(sender, body)
        }
    }

    /// Builder method to set the timestamp.
    ///
    /// ```rust
    /// use chatstats::Message;
    /// use chrono::NaiveDate;
    ///
    /// let ts = NaiveDate::from_ymd_opt(2024, 7, 2)
    ///     .and_then(|d| d.and_hms_opt(9, 15, 3))
    ///     .unwrap();
    /// let msg = Message::new("Alice", "Hello").with_timestamp(ts);
    /// assert_eq!(msg.timestamp(), Some(ts));
    /// ```
    #[must_use]
    pub fn with_timestamp(mut self, ts: NaiveDateTime) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Returns the send time, if it parsed.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the classified kind.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Returns the call duration in minutes (calls with a readable duration only).
    pub fn duration_minutes(&self) -> Option<u32> {
        self.duration_minutes
    }

    /// Body length in Unicode scalar values.
    pub fn body_len(&self) -> usize {
        self.body.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_message_new() {
        let msg = Message::new("Alice", "Hello");
        assert_eq!(msg.sender(), "Alice");
        assert_eq!(msg.body(), "Hello");
        assert_eq!(msg.kind(), MessageKind::Text);
        assert!(msg.timestamp().is_none());
        assert!(msg.duration_minutes().is_none());
    }

    #[test]
    fn test_with_metadata() {
        let t = ts(2024, 7, 2, 9, 15, 3);
        let msg = Message::with_metadata(Some(t), "Alice", "imagen omitida");
        assert_eq!(msg.timestamp(), Some(t));
        assert_eq!(msg.kind(), MessageKind::Image);
    }

    #[test]
    fn test_call_has_duration() {
        let msg = Message::new("Bob", "Videollamada · 1 h");
        assert_eq!(msg.kind(), MessageKind::VideoCall);
        assert_eq!(msg.duration_minutes(), Some(60));
    }

    #[test]
    fn test_text_never_has_duration() {
        let msg = Message::new("Bob", "nos vemos en 5 min");
        assert_eq!(msg.kind(), MessageKind::Text);
        assert!(msg.duration_minutes().is_none());
    }

    #[test]
    fn test_body_len_counts_chars() {
        let msg = Message::new("Иван", "Привет");
        assert_eq!(msg.body_len(), 6);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(MessageKind::VideoCall.to_string(), "Videocall");
        assert_eq!(MessageKind::Sticker.to_string(), "Sticker");
        assert_eq!(MessageKind::all().len(), 6);
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new("Alice", "Hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"kind\":\"text\""));
        assert!(!json.contains("timestamp"));
        assert!(!json.contains("duration_minutes"));
    }
}

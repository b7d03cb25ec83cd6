//! In-memory message collection and its queries.
//!
//! Every query is a fresh linear scan; nothing is indexed or cached. Exports
//! hold tens of thousands of messages at most, so a scan is cheap and the
//! store stays a plain `Vec`.
//!
//! Messages without a timestamp take part in sender, kind and length
//! aggregates but are skipped by every date-based query.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};

use crate::Message;
use crate::core::filter::{FilterConfig, apply_filters};
use crate::core::stats::{KindCounts, YearMonth, tally};
use crate::error::{ChatstatsError, Result};
use crate::message::MessageKind;

/// Ordered collection of parsed messages (file order).
///
/// # Example
///
/// ```
/// use chatstats::{Message, MessageStore};
///
/// let store: MessageStore = vec![
///     Message::new("Alice", "Hi"),
///     Message::new("Bob", "Hello there"),
///     Message::new("Alice", "imagen omitida"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(store.len(), 3);
/// assert_eq!(store.by_sender("Alice").len(), 2);
/// assert_eq!(store.longest()?.sender(), "Alice");
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already parsed messages, keeping their order.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Total number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// `true` if the store holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// All messages in file order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Iterates in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    fn timestamped(&self) -> impl Iterator<Item = (NaiveDateTime, &Message)> {
        self.messages
            .iter()
            .filter_map(|m| m.timestamp().map(|ts| (ts, m)))
    }

    // =========================================================================
    // Filters
    // =========================================================================

    /// Messages sent by exactly `sender`.
    pub fn by_sender(&self, sender: &str) -> Vec<&Message> {
        self.messages
            .iter()
            .filter(|m| m.sender() == sender)
            .collect()
    }

    /// Messages sent on `date`, 00:00:00 through 23:59:59.
    pub fn on_date(&self, date: NaiveDate) -> Vec<&Message> {
        self.timestamped()
            .filter(|(ts, _)| ts.date() == date)
            .map(|(_, m)| m)
            .collect()
    }

    /// Messages with `start <= timestamp <= end`.
    pub fn between(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<&Message> {
        self.timestamped()
            .filter(|(ts, _)| (start..=end).contains(ts))
            .map(|(_, m)| m)
            .collect()
    }

    /// Messages whose body is exactly `text`.
    pub fn with_body(&self, text: &str) -> Vec<&Message> {
        self.messages.iter().filter(|m| m.body() == text).collect()
    }

    /// Messages whose body contains `needle`.
    pub fn containing(&self, needle: &str) -> Vec<&Message> {
        self.messages
            .iter()
            .filter(|m| m.body().contains(needle))
            .collect()
    }

    /// Copies the messages passing every criterion of `config` into a new store.
    pub fn filtered(&self, config: &FilterConfig) -> MessageStore {
        apply_filters(self, config)
    }

    // =========================================================================
    // Aggregates
    // =========================================================================

    /// Messages per sender, most active first; ties keep first appearance order.
    pub fn count_by_sender(&self) -> Vec<(String, usize)> {
        tally(self.messages.iter().map(|m| m.sender()))
            .into_iter()
            .map(|(sender, count)| (sender.to_string(), count))
            .collect()
    }

    /// Distinct sender names, sorted.
    pub fn senders(&self) -> BTreeSet<&str> {
        self.messages.iter().map(|m| m.sender()).collect()
    }

    /// The message with the longest body. Ties go to the earliest message.
    pub fn longest(&self) -> Result<&Message> {
        self.messages
            .iter()
            .reduce(|best, m| if m.body_len() > best.body_len() { m } else { best })
            .ok_or_else(|| ChatstatsError::empty_store("longest message"))
    }

    /// The message with the shortest body. Ties go to the earliest message.
    pub fn shortest(&self) -> Result<&Message> {
        self.messages
            .iter()
            .reduce(|best, m| if m.body_len() < best.body_len() { m } else { best })
            .ok_or_else(|| ChatstatsError::empty_store("shortest message"))
    }

    /// Mean body length in characters.
    pub fn average_length(&self) -> Result<f64> {
        if self.messages.is_empty() {
            return Err(ChatstatsError::empty_store("average length"));
        }
        let total: usize = self.messages.iter().map(Message::body_len).sum();
        Ok(total as f64 / self.messages.len() as f64)
    }

    /// Message counts for every kind.
    pub fn kind_counts(&self) -> KindCounts {
        KindCounts::from_kinds(self.messages.iter().map(Message::kind), self.len())
    }

    /// Number of messages of one kind.
    pub fn count_kind(&self, kind: MessageKind) -> usize {
        self.messages.iter().filter(|m| m.kind() == kind).count()
    }

    fn total_minutes(&self, kind: MessageKind) -> u64 {
        self.messages
            .iter()
            .filter(|m| m.kind() == kind)
            .filter_map(Message::duration_minutes)
            .map(u64::from)
            .sum()
    }

    /// Total voice call minutes. Calls without a readable duration are skipped.
    pub fn total_call_minutes(&self) -> u64 {
        self.total_minutes(MessageKind::Call)
    }

    /// Total video call minutes. Calls without a readable duration are skipped.
    pub fn total_videocall_minutes(&self) -> u64 {
        self.total_minutes(MessageKind::VideoCall)
    }

    /// Messages per calendar day, busiest first; ties keep first-seen order.
    pub fn messages_per_day(&self) -> Vec<(NaiveDate, usize)> {
        tally(self.timestamped().map(|(ts, _)| ts.date()))
    }

    /// Messages per calendar month, busiest first; ties keep first-seen order.
    pub fn messages_per_month(&self) -> Vec<(YearMonth, usize)> {
        tally(self.timestamped().map(|(ts, _)| YearMonth::of(ts)))
    }

    /// Earliest and latest timestamp, if any message has one.
    pub fn date_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        self.timestamped().fold(None, |range, (ts, _)| match range {
            None => Some((ts, ts)),
            Some((first, last)) => Some((first.min(ts), last.max(ts))),
        })
    }
}

impl FromIterator<Message> for MessageStore {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MessageStore {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

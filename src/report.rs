//! Summary report over a [`MessageStore`].
//!
//! A [`Report`] gathers the usual questions about a chat in one value: who
//! writes most, how many photos and calls there were, which days were the
//! busiest. It serializes to JSON and renders as plain text through
//! [`Display`](std::fmt::Display).
//!
//! # Example
//!
//! ```
//! use chatstats::config::ReportConfig;
//! use chatstats::report::Report;
//! use chatstats::{Message, MessageStore};
//!
//! let store: MessageStore = vec![
//!     Message::new("Alice", "Hola"),
//!     Message::new("Bob", "Videollamada · 1 h"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let report = Report::build(&store, &ReportConfig::new());
//! assert_eq!(report.total_messages, 2);
//! assert_eq!(report.videocall_minutes, 60);
//! assert!(report.to_string().contains("Alice"));
//! ```

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::Message;
use crate::config::ReportConfig;
use crate::core::stats::KindCounts;
use crate::core::store::MessageStore;
use crate::message::MessageKind;

/// A ranked entry: a key (sender, day or month) and its message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    /// Sender name, `YYYY-MM-DD` day or `YYYY-MM` month.
    pub key: String,
    /// Messages under this key.
    pub count: usize,
}

/// The interesting parts of one message, for length extremes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageSummary {
    /// Who wrote it.
    pub sender: String,
    /// Body length in characters.
    pub length: usize,
    /// When it was sent, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,
    /// Full message body.
    pub body: String,
}

impl From<&Message> for MessageSummary {
    fn from(msg: &Message) -> Self {
        Self {
            sender: msg.sender().to_string(),
            length: msg.body_len(),
            timestamp: msg.timestamp(),
            body: msg.body().to_string(),
        }
    }
}

/// Descriptive statistics for one chat.
///
/// Length fields are `None` for an empty store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Messages in the store.
    pub total_messages: usize,
    /// Earliest timestamp, if any message has one.
    pub first_message: Option<NaiveDateTime>,
    /// Latest timestamp.
    pub last_message: Option<NaiveDateTime>,
    /// Top senders by message count.
    pub senders: Vec<CountEntry>,
    /// Messages per kind.
    pub kinds: KindCounts,
    /// Total voice call minutes.
    pub call_minutes: u64,
    /// Total video call minutes.
    pub videocall_minutes: u64,
    /// Mean body length in characters.
    pub average_length: Option<f64>,
    /// First message with the longest body.
    pub longest: Option<MessageSummary>,
    /// First message with the shortest body.
    pub shortest: Option<MessageSummary>,
    /// Days with the most messages.
    pub busiest_days: Vec<CountEntry>,
    /// Months with the most messages.
    pub busiest_months: Vec<CountEntry>,
}

fn top_entries<K: ToString>(counts: Vec<(K, usize)>, top: usize) -> Vec<CountEntry> {
    counts
        .into_iter()
        .take(top)
        .map(|(key, count)| CountEntry {
            key: key.to_string(),
            count,
        })
        .collect()
}

impl Report {
    /// Runs every store query once and collects the results.
    pub fn build(store: &MessageStore, config: &ReportConfig) -> Self {
        let range = store.date_range();

        Self {
            total_messages: store.len(),
            first_message: range.map(|(first, _)| first),
            last_message: range.map(|(_, last)| last),
            senders: top_entries(store.count_by_sender(), config.top),
            kinds: store.kind_counts(),
            call_minutes: store.total_call_minutes(),
            videocall_minutes: store.total_videocall_minutes(),
            average_length: store.average_length().ok(),
            longest: store.longest().ok().map(MessageSummary::from),
            shortest: store.shortest().ok().map(MessageSummary::from),
            busiest_days: top_entries(store.messages_per_day(), config.top),
            busiest_months: top_entries(store.messages_per_month(), config.top),
        }
    }

    /// Pretty-printed JSON rendering.
    #[cfg(feature = "json-output")]
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn preview(body: &str) -> String {
    const MAX: usize = 60;
    let flat = body.replace('\n', " ");
    if flat.chars().count() > MAX {
        let cut: String = flat.chars().take(MAX).collect();
        format!("{cut}…")
    } else {
        flat
    }
}

fn write_ranking(f: &mut fmt::Formatter<'_>, title: &str, entries: &[CountEntry]) -> fmt::Result {
    writeln!(f, "{title}:")?;
    if entries.is_empty() {
        return writeln!(f, "  (none)");
    }
    let width = entries.iter().map(|e| e.key.chars().count()).max().unwrap_or(0);
    for entry in entries {
        writeln!(f, "  {:<width$}  {}", entry.key, entry.count, width = width)?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Messages: {}", self.total_messages)?;
        if let (Some(first), Some(last)) = (self.first_message, self.last_message) {
            writeln!(f, "Period:   {first} .. {last}")?;
        }
        writeln!(f)?;

        write_ranking(f, "Senders", &self.senders)?;
        writeln!(f)?;

        writeln!(f, "Kinds:")?;
        for &kind in MessageKind::all() {
            writeln!(f, "  {:<9}  {}", kind.to_string(), self.kinds.get(kind))?;
        }
        writeln!(f, "Call minutes:      {}", self.call_minutes)?;
        writeln!(f, "Videocall minutes: {}", self.videocall_minutes)?;
        writeln!(f)?;

        match self.average_length {
            Some(avg) => writeln!(f, "Average length: {avg:.1}")?,
            None => writeln!(f, "Average length: n/a")?,
        }
        if let Some(ref longest) = self.longest {
            writeln!(
                f,
                "Longest:  {} ({} chars): {}",
                longest.sender,
                longest.length,
                preview(&longest.body)
            )?;
        }
        if let Some(ref shortest) = self.shortest {
            writeln!(
                f,
                "Shortest: {} ({} chars): {}",
                shortest.sender,
                shortest.length,
                preview(&shortest.body)
            )?;
        }
        writeln!(f)?;

        write_ranking(f, "Busiest days", &self.busiest_days)?;
        writeln!(f)?;
        write_ranking(f, "Busiest months", &self.busiest_months)
    }
}

//! Aggregate value types and the counting helper shared by the store queries.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

use crate::message::MessageKind;

/// A calendar month, used as the grouping key for monthly counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct YearMonth {
    /// Calendar year, e.g. `2024`.
    pub year: i32,
    /// Month number, `1` through `12`.
    pub month: u32,
}

impl YearMonth {
    /// Creates a key from a year and a 1-based month.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month a timestamp falls in.
    pub fn of(ts: NaiveDateTime) -> Self {
        Self::new(ts.year(), ts.month())
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Number of messages per [`MessageKind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    /// Plain text messages.
    pub text: usize,
    /// Omitted images.
    pub image: usize,
    /// Omitted videos.
    pub video: usize,
    /// Omitted stickers.
    pub sticker: usize,
    /// Voice calls.
    pub call: usize,
    /// Video calls.
    pub video_call: usize,
}

impl KindCounts {
    /// Counts the non-text kinds and derives `text` from `total`.
    pub(crate) fn from_kinds<I>(kinds: I, total: usize) -> Self
    where
        I: IntoIterator<Item = MessageKind>,
    {
        let mut counts = Self::default();
        for kind in kinds {
            match kind {
                MessageKind::Image => counts.image += 1,
                MessageKind::Video => counts.video += 1,
                MessageKind::Sticker => counts.sticker += 1,
                MessageKind::Call => counts.call += 1,
                MessageKind::VideoCall => counts.video_call += 1,
                MessageKind::Text => {}
            }
        }
        counts.text = total - counts.non_text();
        counts
    }

    /// Count for one kind.
    pub fn get(&self, kind: MessageKind) -> usize {
        match kind {
            MessageKind::Text => self.text,
            MessageKind::Image => self.image,
            MessageKind::Video => self.video,
            MessageKind::Sticker => self.sticker,
            MessageKind::Call => self.call,
            MessageKind::VideoCall => self.video_call,
        }
    }

    fn non_text(&self) -> usize {
        self.image + self.video + self.sticker + self.call + self.video_call
    }

    /// Sum over all kinds.
    pub fn total(&self) -> usize {
        self.text + self.non_text()
    }
}

/// Counts occurrences of each key.
///
/// The result is sorted by descending count. The sort is stable, so equal
/// counts keep the order in which their keys were first seen.
pub(crate) fn tally<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for key in keys {
        if let Some(&i) = index.get(&key) {
            counts[i].1 += 1;
        } else {
            index.insert(key.clone(), counts.len());
            counts.push((key, 1));
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

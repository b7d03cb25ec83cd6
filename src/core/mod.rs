//! Message collection, filtering and aggregation.
//!
//! This module contains:
//! - [`store`] - [`MessageStore`] and all of its queries
//! - [`filter`] - [`FilterConfig`] for combined sender/date/text filters
//! - [`stats`] - aggregate value types ([`KindCounts`], [`YearMonth`])

pub mod filter;
pub mod stats;
pub mod store;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters};
pub use stats::{KindCounts, YearMonth};
pub use store::MessageStore;

// Re-export Message from the crate root
pub use crate::Message;

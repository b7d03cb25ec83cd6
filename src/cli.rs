//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`ReportFormat`] - output format options as clap sees them
//!
//! [`Args`] also knows how to turn itself into the library's configuration
//! types, so the binary stays a thin pipeline.

use clap::{Parser, ValueEnum};

use crate::config::{ParserConfig, ReportConfig};
use crate::core::filter::FilterConfig;
use crate::error::Result;

/// Summarize a WhatsApp chat export: who writes most, media and calls,
/// the busiest days and months.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats _chat.txt
    chatstats _chat.txt --format json
    chatstats _chat.txt --from Alice --after 2024-01-01
    chatstats _chat.txt --contains pizza --top 3")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Only count messages from this sender (exact match)
    #[arg(long, value_name = "SENDER")]
    pub from: Option<String>,

    /// Only count messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only count messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Only count messages whose body contains this text
    #[arg(long, value_name = "TEXT")]
    pub contains: Option<String>,

    /// How many senders, days and months to list
    #[arg(short = 'n', long, default_value_t = 10)]
    pub top: usize,

    /// Treat the first line as a message instead of skipping it
    #[arg(long)]
    pub keep_header: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_skip_header(!self.keep_header)
    }

    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::new().with_top(self.top)
    }

    /// Builds the combined filter from `--from`, `--after`, `--before` and
    /// `--contains`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidDate`](crate::ChatstatsError::InvalidDate)
    /// if a date is not `YYYY-MM-DD`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(ref after) = self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            config = config.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            config = config.with_sender(from.clone());
        }
        if let Some(ref text) = self.contains {
            config = config.with_contains(text.clone());
        }
        Ok(config)
    }

    /// Default log directive for the given `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum ReportFormat {
    /// Aligned plain text
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Pretty-printed JSON
    Json,
}

// Conversion to library format type
impl From<ReportFormat> for crate::format::OutputFormat {
    fn from(format: ReportFormat) -> crate::format::OutputFormat {
        match format {
            ReportFormat::Text => crate::format::OutputFormat::Text,
            ReportFormat::Json => crate::format::OutputFormat::Json,
        }
    }
}

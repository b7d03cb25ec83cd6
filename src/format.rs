//! Output format types for reports.
//!
//! These types do not depend on the CLI framework, so library callers can
//! pick a rendering without pulling in clap.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::ReportConfig;
//! use chatstats::format::{OutputFormat, to_format_string};
//! use chatstats::report::Report;
//! use chatstats::{Message, MessageStore};
//!
//! # fn main() -> chatstats::Result<()> {
//! let store: MessageStore = vec![Message::new("Alice", "Hola")].into_iter().collect();
//! let report = Report::build(&store, &ReportConfig::new());
//!
//! let format: OutputFormat = "text".parse().unwrap();
//! let text = to_format_string(&report, format)?;
//! assert!(text.starts_with("Messages: 1"));
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ChatstatsError;
use crate::report::Report;

/// How a [`Report`] is rendered.
///
/// - [`Text`](OutputFormat::Text) - aligned plain text for terminals
/// - [`Json`](OutputFormat::Json) - pretty-printed JSON, for scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Plain text (default)
    #[default]
    Text,

    /// JSON object
    Json,
}

impl OutputFormat {
    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Json]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders a report in the specified format.
///
/// # Errors
///
/// Returns an error if JSON is requested without the `json-output` feature,
/// or if serialization fails.
pub fn to_format_string(report: &Report, format: OutputFormat) -> Result<String, ChatstatsError> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => report.to_json(),
        #[allow(unreachable_patterns)]
        _ => Err(ChatstatsError::invalid_format(
            "output",
            format!("Output format {format} requires the 'json-output' feature to be enabled"),
        )),
    }
}

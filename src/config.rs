//! Configuration types for parsing and reporting.
//!
//! Plain builder structs without CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{ParserConfig, ReportConfig};
//! use chatstats::LineParser;
//!
//! let parser = LineParser::with_config(ParserConfig::new().with_skip_header(false));
//! let report_config = ReportConfig::new().with_top(5);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for export ingestion.
///
/// # Example
///
/// ```rust
/// use chatstats::config::ParserConfig;
///
/// let config = ParserConfig::new().with_skip_header(false);
/// assert!(!config.skip_header);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Discard the first line of the export unconditionally (default: true).
    ///
    /// Exports open with an encryption disclaimer that is not a real message.
    pub skip_header: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { skip_header: true }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the first line is discarded.
    #[must_use]
    pub fn with_skip_header(mut self, skip: bool) -> Self {
        self.skip_header = skip;
        self
    }
}

/// Configuration for [`Report`](crate::report::Report) building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Maximum number of senders, days and months listed (default: 10)
    pub top: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top: 10 }
    }
}

impl ReportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many entries each ranked list keeps.
    #[must_use]
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_default() {
        let config = ParserConfig::default();
        assert!(config.skip_header);
        assert_eq!(config, ParserConfig::new());
    }

    #[test]
    fn test_parser_config_builder() {
        let config = ParserConfig::new().with_skip_header(false);
        assert!(!config.skip_header);
    }

    #[test]
    fn test_report_config() {
        assert_eq!(ReportConfig::default().top, 10);
        assert_eq!(ReportConfig::new().with_top(3).top, 3);
    }

    #[test]
    fn test_config_serde() {
        let json = serde_json::to_string(&ParserConfig::new()).unwrap();
        assert_eq!(json, r#"{"skip_header":true}"#);
        let parsed: ReportConfig = serde_json::from_str(r#"{"top":4}"#).unwrap();
        assert_eq!(parsed.top, 4);
    }
}

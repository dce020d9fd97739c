// ============================================================
// INGESTION CONFIGURATION
// ============================================================
// Configuration values for header inference and input handling

use serde::{Deserialize, Serialize};

/// Configuration for tabular ingestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Delimiter character (default: comma)
    pub delimiter: char,

    /// Detect the delimiter per input instead of assuming `delimiter`
    /// (candidates: comma, semicolon, tab, pipe)
    pub auto_detect_delimiter: bool,

    /// Number of leading lines examined as header candidates (default: 10)
    pub candidate_window: usize,

    /// Score bonus for a candidate row with at least one textual,
    /// non-numeric field (default: 5)
    pub header_bonus: usize,

    /// Ceiling on non-blank input lines; lines beyond it are dropped
    /// before header scanning (default: unlimited)
    pub max_input_lines: Option<usize>,

    /// Fall back to Windows-1252 when input bytes are not valid UTF-8
    pub lenient_decoding: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            auto_detect_delimiter: false,
            candidate_window: 10,
            header_bonus: 5,
            max_input_lines: None,
            lenient_decoding: true,
        }
    }
}

impl IngestConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Config that rejects undecodable bytes instead of substituting
    pub fn strict() -> Self {
        Self {
            lenient_decoding: false,
            ..Default::default()
        }
    }

    /// Set a custom delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable per-input delimiter detection
    pub fn with_auto_detect_delimiter(mut self, enabled: bool) -> Self {
        self.auto_detect_delimiter = enabled;
        self
    }

    /// Cap the number of non-blank input lines considered
    pub fn with_max_input_lines(mut self, limit: usize) -> Self {
        self.max_input_lines = Some(limit);
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.candidate_window == 0 {
            return Err("candidate_window must be > 0".to_string());
        }
        if self.delimiter == '"' {
            return Err("delimiter must not be the quote character".to_string());
        }
        if let Some(limit) = self.max_input_lines {
            // A header plus at least one data row must fit under the ceiling
            if limit < 2 {
                return Err("max_input_lines must be >= 2".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = IngestConfig::default();

        assert_eq!(config.delimiter, ',');
        assert!(!config.auto_detect_delimiter);
        assert_eq!(config.candidate_window, 10);
        assert_eq!(config.header_bonus, 5);
        assert_eq!(config.max_input_lines, None);
        assert!(config.lenient_decoding);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = IngestConfig {
            candidate_window: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = IngestConfig::default().with_delimiter('"');
        assert!(config.validate().is_err());

        let config = IngestConfig::default().with_max_input_lines(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_setters() {
        let config = IngestConfig::new()
            .with_delimiter(';')
            .with_max_input_lines(500);

        assert_eq!(config.delimiter, ';');
        assert_eq!(config.max_input_lines, Some(500));
        assert!(config.validate().is_ok());
    }
}

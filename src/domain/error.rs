use serde::{Deserialize, Serialize};
use std::fmt;

/// Failure kinds for tabular ingestion.
///
/// Every kind is terminal: ingestion returns either a complete table or
/// exactly one of these, never a partial result. The same input always
/// produces the same outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngestError {
    /// The input contained no non-blank lines.
    EmptyInput,
    /// No usable header could be constructed from the input.
    EmptyStructure,
    /// No non-blank data rows remained after the header line.
    NoDataRows,
    /// The input bytes could not be decoded into text.
    MalformedLine(String),
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::EmptyInput => {
                write!(f, "The file is empty or contains only blank lines")
            }
            IngestError::EmptyStructure => {
                write!(f, "Could not determine the table structure")
            }
            IngestError::NoDataRows => {
                write!(f, "No valid data rows found after the header")
            }
            IngestError::MalformedLine(msg) => write!(f, "Malformed input: {}", msg),
        }
    }
}

impl std::error::Error for IngestError {}

pub type Result<T> = std::result::Result<T, IngestError>;

// ============================================================
// TABLE SUMMARY
// ============================================================
// Compact overview of an ingested table for preview rendering

use serde::{Deserialize, Serialize};

/// Summary of an ingested table: what the caller shows as header chips
/// and row/column counts next to the loaded data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    /// Display name of the data source, when one was supplied
    pub source_name: Option<String>,

    /// Number of columns
    pub column_count: usize,

    /// Number of data rows
    pub row_count: usize,

    /// Column names, in display order
    pub headers: Vec<String>,
}

impl TableSummary {
    /// Human-readable one-line description
    pub fn describe(&self) -> String {
        match &self.source_name {
            Some(name) => format!(
                "{}: {} rows with {} columns",
                name, self.row_count, self.column_count
            ),
            None => format!(
                "Loaded {} rows with {} columns",
                self.row_count, self.column_count
            ),
        }
    }
}

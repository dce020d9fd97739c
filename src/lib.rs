//! Tabular ingestion core for data chat: turns raw delimited text into a
//! clean rectangular table ready for analysis and preview.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::TableIngestor;
pub use domain::error::{IngestError, Result};
pub use domain::table::{IngestConfig, Table, TableCell, TableRow, TableSummary};

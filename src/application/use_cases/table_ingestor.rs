// ============================================================
// TABLE INGESTOR USE CASE
// ============================================================
// Orchestrate decoding, header inference, and row reshaping

use std::time::Instant;

use tracing::{debug, warn};

use crate::domain::error::{IngestError, Result};
use crate::domain::table::{IngestConfig, Table, TableCell, TableRow};
use crate::infrastructure::ingest::{HeaderScan, LineTokenizer, TextDecoder};

/// Tabular ingestion use case.
///
/// Turns raw delimited text (or undecoded bytes) into a rectangular
/// [`Table`]: splits the input into non-blank lines, picks the most
/// plausible header row, normalizes the header names, and reshapes every
/// remaining line to the header width. Pure and synchronous; safe to call
/// concurrently for independent inputs.
pub struct TableIngestor {
    config: IngestConfig,
}

impl TableIngestor {
    /// Create a new ingestor
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn default_config() -> Self {
        Self::new(IngestConfig::default())
    }

    /// Ingest raw text into a table.
    ///
    /// `source_name` is carried through as the table's display label.
    pub fn ingest(&self, text: &str, source_name: Option<&str>) -> Result<Table> {
        let start = Instant::now();

        let mut lines = LineTokenizer::split_lines(text);
        if lines.is_empty() {
            return Err(IngestError::EmptyInput);
        }

        if let Some(limit) = self.config.max_input_lines {
            if lines.len() > limit {
                warn!(
                    total = lines.len(),
                    limit, "input exceeds line ceiling, truncating"
                );
                lines.truncate(limit);
            }
        }

        let tokenizer = self.tokenizer_for(text);
        let scan = HeaderScan::new(
            tokenizer.clone(),
            self.config.candidate_window,
            self.config.header_bonus,
        );

        let header_index = scan.select_header_row(&lines);
        let headers = scan.build_headers(&lines, header_index)?;
        let rows = Self::build_rows(&tokenizer, &lines, header_index + 1, &headers)?;

        debug!(
            header_row = header_index + 1,
            columns = headers.len(),
            rows = rows.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "ingested table"
        );

        Ok(Table::new(headers, rows, source_name.map(str::to_string)))
    }

    /// Ingest raw bytes, decoding them first.
    ///
    /// This is the boundary where undecodable input surfaces as
    /// [`IngestError::MalformedLine`].
    pub fn ingest_bytes(&self, bytes: &[u8], source_name: Option<&str>) -> Result<Table> {
        let decoder = TextDecoder::new(self.config.lenient_decoding);
        let text = decoder.decode(bytes)?;
        self.ingest(&text, source_name)
    }

    fn tokenizer_for(&self, text: &str) -> LineTokenizer {
        // Detection never overrides an explicitly configured delimiter
        if self.config.auto_detect_delimiter && self.config.delimiter == ',' {
            let delimiter = LineTokenizer::detect_delimiter(text);
            if delimiter != ',' {
                debug!(delimiter = %delimiter, "detected non-comma delimiter");
            }
            LineTokenizer::new(delimiter)
        } else {
            LineTokenizer::new(self.config.delimiter)
        }
    }

    /// Reshape every line after the header into a row of header width:
    /// blank lines are skipped, short rows padded with empty values, long
    /// rows truncated.
    fn build_rows(
        tokenizer: &LineTokenizer,
        lines: &[&str],
        start: usize,
        headers: &[String],
    ) -> Result<Vec<TableRow>> {
        let mut rows = Vec::new();

        for line in &lines[start..] {
            let mut values = tokenizer.tokenize(line);
            if values.iter().all(|v| v.trim().is_empty()) {
                continue;
            }

            values.resize(headers.len(), String::new());

            let cells = headers
                .iter()
                .enumerate()
                .map(|(idx, header)| {
                    let column = if header.is_empty() {
                        format!("Column{}", idx + 1)
                    } else {
                        header.clone()
                    };
                    let value = values.get(idx).cloned().unwrap_or_default();
                    TableCell::new(column, value)
                })
                .collect();

            rows.push(TableRow::new(cells));
        }

        if rows.is_empty() {
            return Err(IngestError::NoDataRows);
        }

        Ok(rows)
    }
}

// ============================================================
// TABLE TYPES
// ============================================================
// Data structures representing an ingested rectangular table

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::TableSummary;

/// A single cell in a table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    /// Column name this cell belongs to
    pub column: String,

    /// Cell value (empty for padded cells)
    pub value: String,

    /// Whether the value is empty after trimming
    pub is_empty: bool,
}

impl TableCell {
    /// Create a new cell
    pub fn new(column: String, value: String) -> Self {
        let is_empty = value.trim().is_empty();
        Self {
            column,
            value,
            is_empty,
        }
    }
}

/// A single data row: an ordered mapping from column name to value.
///
/// Cells are kept in header order, so serializing a row produces an object
/// whose keys match the table headers in order. Every row of a table holds
/// exactly one cell per header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row from ordered cells
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Value for the given column, if present
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.value.as_str())
    }

    /// Column names in order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|c| c.column.as_str())
    }

    /// Values in column order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|c| c.value.as_str())
    }

    /// All cells in order
    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    /// Cells with a non-empty value
    pub fn non_empty_cells(&self) -> Vec<&TableCell> {
        self.cells.iter().filter(|c| !c.is_empty).collect()
    }

    /// Number of cells in this row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether this row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Serialize for TableRow {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for cell in &self.cells {
            map.serialize_entry(&cell.column, &cell.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TableRow {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = TableRow;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of column names to string values")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut cells = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((column, value)) = access.next_entry::<String, String>()? {
                    cells.push(TableCell::new(column, value));
                }
                Ok(TableRow::new(cells))
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}

/// The final artifact of ingestion: unique, non-empty headers and
/// uniform-width rows keyed by those headers.
///
/// A table is built once per ingested input and never mutated; replacing
/// the data source replaces the whole table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, in display order
    pub headers: Vec<String>,

    /// Data rows, each holding one value per header
    pub rows: Vec<TableRow>,

    /// Display name of the data source (file name, dataset label)
    pub source_name: Option<String>,
}

impl Table {
    /// Create a new table
    pub fn new(headers: Vec<String>, rows: Vec<TableRow>, source_name: Option<String>) -> Self {
        Self {
            headers,
            rows,
            source_name,
        }
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Up to `limit` leading rows, for preview rendering
    pub fn preview(&self, limit: usize) -> &[TableRow] {
        &self.rows[..limit.min(self.rows.len())]
    }

    /// Compact overview of this table
    pub fn summary(&self) -> TableSummary {
        TableSummary {
            source_name: self.source_name.clone(),
            column_count: self.column_count(),
            row_count: self.row_count(),
            headers: self.headers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(pairs: Vec<(&str, &str)>) -> TableRow {
        let cells = pairs
            .into_iter()
            .map(|(column, value)| TableCell::new(column.to_string(), value.to_string()))
            .collect();
        TableRow::new(cells)
    }

    #[test]
    fn test_row_lookup_and_order() {
        let row = sample_row(vec![("Name", "Alice"), ("Score", "90"), ("Grade", "A")]);

        assert_eq!(row.get("Score"), Some("90"));
        assert_eq!(row.get("Missing"), None);
        assert_eq!(
            row.columns().collect::<Vec<_>>(),
            vec!["Name", "Score", "Grade"]
        );
        assert_eq!(row.values().collect::<Vec<_>>(), vec!["Alice", "90", "A"]);
    }

    #[test]
    fn test_row_serializes_as_ordered_map() {
        let row = sample_row(vec![("Name", "Alice"), ("Score", "90")]);
        let json = serde_json::to_string(&row).unwrap();

        assert_eq!(json, r#"{"Name":"Alice","Score":"90"}"#);
    }

    #[test]
    fn test_row_round_trips_through_json() {
        let row = sample_row(vec![("Zeta", "1"), ("Alpha", "2")]);
        let json = serde_json::to_string(&row).unwrap();
        let back: TableRow = serde_json::from_str(&json).unwrap();

        // Document order wins over alphabetical order
        assert_eq!(back, row);
        assert_eq!(back.columns().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_non_empty_cells_skips_padding() {
        let row = sample_row(vec![("A", "x"), ("B", "  "), ("C", "")]);

        let non_empty = row.non_empty_cells();
        assert_eq!(non_empty.len(), 1);
        assert_eq!(non_empty[0].column, "A");
    }

    #[test]
    fn test_table_counts_and_preview() {
        let rows = vec![
            sample_row(vec![("A", "1")]),
            sample_row(vec![("A", "2")]),
            sample_row(vec![("A", "3")]),
        ];
        let table = Table::new(vec!["A".to_string()], rows, Some("demo.csv".to_string()));

        assert_eq!(table.column_count(), 1);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.preview(2).len(), 2);
        assert_eq!(table.preview(10).len(), 3);
    }
}

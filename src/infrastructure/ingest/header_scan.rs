// ============================================================
// HEADER SCAN
// ============================================================
// Score candidate header rows and build the normalized header list

use tracing::debug;

use super::LineTokenizer;
use crate::domain::error::{IngestError, Result};

/// Header inference over the leading lines of an input.
///
/// Real-world exports often carry metadata rows above the true header and
/// give no reliable signal for where the header is, so the scan votes:
/// a candidate scores one point per subsequent line with a matching field
/// count, plus a bonus when at least one of its fields looks textual
/// rather than numeric.
pub struct HeaderScan {
    tokenizer: LineTokenizer,
    candidate_window: usize,
    header_bonus: usize,
}

impl HeaderScan {
    /// Create a new scan
    pub fn new(tokenizer: LineTokenizer, candidate_window: usize, header_bonus: usize) -> Self {
        Self {
            tokenizer,
            candidate_window,
            header_bonus,
        }
    }

    /// Pick the most plausible header row among the leading lines.
    ///
    /// At most `candidate_window` lines are examined, and never the very
    /// last line, since at least one data row must remain. All-blank
    /// candidates are skipped. Ties go to the candidate with more matching
    /// subsequent lines, then to the earliest candidate. Falls back to
    /// index 0 when nothing scores.
    pub fn select_header_row(&self, lines: &[&str]) -> usize {
        let mut header_index = 0usize;
        let mut best_score = 0usize;
        let mut best_valid_rows = 0usize;

        let window = self.candidate_window.min(lines.len().saturating_sub(1));

        for i in 0..window {
            let fields = self.tokenizer.tokenize(lines[i]);
            if fields.iter().all(|f| f.trim().is_empty()) {
                continue;
            }

            let looks_textual = fields.iter().any(|f| {
                let trimmed = f.trim();
                !trimmed.is_empty() && trimmed.parse::<f64>().is_err()
            });
            let bonus = if looks_textual { self.header_bonus } else { 0 };

            let valid_rows = lines[i + 1..]
                .iter()
                .filter(|line| self.tokenizer.tokenize(line).len() == fields.len())
                .count();

            let score = valid_rows + bonus;
            if score > best_score || (score == best_score && valid_rows > best_valid_rows) {
                header_index = i;
                best_score = score;
                best_valid_rows = valid_rows;
            }
        }

        debug!(
            header_row = header_index + 1,
            score = best_score,
            matching_rows = best_valid_rows,
            "selected header row"
        );

        header_index
    }

    /// Build the header list from the selected line.
    ///
    /// Names are trimmed and empty names dropped. When nothing remains,
    /// synthetic `Column1..ColumnK` names are sized by the first line after
    /// the header; with no such line the input has no usable structure.
    /// Duplicate names are replaced by their positional placeholder so the
    /// final list is unique.
    pub fn build_headers(&self, lines: &[&str], header_index: usize) -> Result<Vec<String>> {
        let mut headers: Vec<String> = self
            .tokenizer
            .tokenize(lines[header_index])
            .iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if headers.is_empty() {
            let width = match lines.get(header_index + 1) {
                Some(line) => self.tokenizer.tokenize(line).len(),
                None => 0,
            };
            if width == 0 {
                return Err(IngestError::EmptyStructure);
            }
            headers = (1..=width).map(|n| format!("Column{}", n)).collect();
        }

        Ok(Self::normalize_headers(headers))
    }

    /// Replace duplicate names with positional `Column<N>` placeholders
    fn normalize_headers(headers: Vec<String>) -> Vec<String> {
        let mut result: Vec<String> = Vec::with_capacity(headers.len());

        for (idx, name) in headers.into_iter().enumerate() {
            if result.contains(&name) {
                result.push(format!("Column{}", idx + 1));
            } else {
                result.push(name);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan() -> HeaderScan {
        HeaderScan::new(LineTokenizer::default(), 10, 5)
    }

    #[test]
    fn test_skips_metadata_row_before_header() {
        let lines = vec![
            "Report generated 2024-01-01",
            "Name,Score,Grade",
            "Alice,90,A",
            "Bob,85,B",
            "Carol,77,C",
        ];

        assert_eq!(scan().select_header_row(&lines), 1);
    }

    #[test]
    fn test_first_row_wins_for_regular_input() {
        let lines = vec!["Name,Age", "Alice,30", "Bob,25"];

        assert_eq!(scan().select_header_row(&lines), 0);
    }

    #[test]
    fn test_numeric_row_gets_no_header_bonus() {
        // Both candidates match one subsequent line each; only the textual
        // one earns the bonus
        let lines = vec!["1,2,3", "a,b,c", "4,5,6"];

        assert_eq!(scan().select_header_row(&lines), 1);
    }

    #[test]
    fn test_equal_score_prefers_more_matching_rows() {
        // "note" earns the textual bonus but matches nothing below it;
        // "1,2" earns no bonus but matches five lines. Scores tie at 5,
        // so the higher matching count wins.
        let lines = vec!["note", "1,2", "3,4", "5,6", "7,8", "9,10", "11,12"];

        assert_eq!(scan().select_header_row(&lines), 1);
    }

    #[test]
    fn test_earliest_candidate_wins_full_ties() {
        // Both widths match exactly one later line and both earn the
        // bonus, so score and matching count tie; the first candidate
        // examined is kept.
        let lines = vec!["alpha", "x,y", "beta", "p,q"];

        assert_eq!(scan().select_header_row(&lines), 0);
    }

    #[test]
    fn test_blank_candidate_is_skipped() {
        let lines = vec![",,,", "Name,Score", "Alice,90"];

        assert_eq!(scan().select_header_row(&lines), 1);
    }

    #[test]
    fn test_last_line_is_never_a_candidate() {
        let lines = vec!["only,line"];

        assert_eq!(scan().select_header_row(&lines), 0);
    }

    #[test]
    fn test_build_headers_trims_and_drops_empty() {
        let lines = vec![" Name , ,Score", "Alice,1,90"];

        let headers = scan().build_headers(&lines, 0).unwrap();
        assert_eq!(headers, vec!["Name", "Score"]);
    }

    #[test]
    fn test_build_headers_synthesizes_from_data_width() {
        let lines = vec![",,,", "a,b,c"];

        let headers = scan().build_headers(&lines, 0).unwrap();
        assert_eq!(headers, vec!["Column1", "Column2", "Column3"]);
    }

    #[test]
    fn test_build_headers_fails_without_structure() {
        let lines = vec![",,,"];

        assert_eq!(
            scan().build_headers(&lines, 0),
            Err(IngestError::EmptyStructure)
        );
    }

    #[test]
    fn test_duplicate_headers_get_positional_placeholders() {
        let lines = vec!["Name,Score,Name", "a,b,c"];

        let headers = scan().build_headers(&lines, 0).unwrap();
        assert_eq!(headers, vec!["Name", "Score", "Column3"]);
    }
}

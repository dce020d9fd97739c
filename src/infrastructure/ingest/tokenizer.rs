// ============================================================
// LINE TOKENIZER
// ============================================================
// Split raw delimited text into lines and quote-aware fields

/// Tokenizer for one delimiter character
#[derive(Debug, Clone)]
pub struct LineTokenizer {
    delimiter: char,
}

impl Default for LineTokenizer {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl LineTokenizer {
    /// Create a tokenizer for the given delimiter
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// The delimiter this tokenizer splits on
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Split raw text into logical lines on CRLF or LF, dropping lines
    /// that are blank after trimming. Order and intra-line whitespace are
    /// preserved.
    pub fn split_lines(text: &str) -> Vec<&str> {
        text.split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.trim().is_empty())
            .collect()
    }

    /// Split one line into fields on the delimiter, honoring quoting:
    /// a double quote toggles quoted state, and a delimiter inside quotes
    /// is literal content. Quote characters are consumed, not emitted.
    ///
    /// Doubled quotes (`""`) inside a quoted field are not treated as an
    /// escape; they simply toggle the quoted state twice.
    ///
    /// Always yields at least one field.
    pub fn tokenize(&self, line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut inside_quotes = false;

        for ch in line.chars() {
            if ch == '"' {
                inside_quotes = !inside_quotes;
            } else if ch == self.delimiter && !inside_quotes {
                fields.push(std::mem::take(&mut current));
            } else {
                current.push(ch);
            }
        }

        fields.push(current);
        fields
    }

    /// Detect the delimiter from a content sample (comma, semicolon, tab,
    /// pipe). Candidates are scored over the leading lines by average
    /// per-line occurrence count, damped by the spread across lines so a
    /// consistent column structure beats raw frequency.
    pub fn detect_delimiter(content: &str) -> char {
        let candidates = [',', ';', '\t', '|'];
        let sample_lines: Vec<&str> = Self::split_lines(content).into_iter().take(10).collect();

        if sample_lines.is_empty() {
            return ',';
        }

        let mut best_delimiter = ',';
        let mut best_score = 0.0f32;

        for &delimiter in &candidates {
            let counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.chars().filter(|&c| c == delimiter).count())
                .collect();

            let avg = counts.iter().sum::<usize>() as f32 / counts.len() as f32;
            let variance = counts
                .iter()
                .map(|&count| (count as f32 - avg).powi(2))
                .sum::<f32>()
                / counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());

            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }
}

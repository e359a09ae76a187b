//! Simplified delimited-text reader.
//!
//! # Responsibility
//! - Turn raw comma-separated text into column/value records.
//! - Tolerate malformed rows with best-effort positional mapping.
//!
//! # Invariants
//! - The first non-empty line defines column order and names.
//! - Quote characters toggle comma protection and never reach the output.
//! - Escaped quotes and multi-line quoted fields are not supported.

use std::collections::HashMap;

/// One parsed row: column name to trimmed string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: HashMap<String, String>,
}

impl Record {
    /// Builds a record from explicit column/value pairs.
    ///
    /// Intended for callers assembling records outside the reader, such as
    /// test fixtures.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(column, value)| (column.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Returns the value for `column`, or the empty string when the column
    /// is missing.
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    /// Returns the value for `column` only when it is present and non-empty.
    ///
    /// This is the explicit absent representation: a blank registry cell and
    /// a missing column both read as `None`.
    pub fn get_opt(&self, column: &str) -> Option<&str> {
        self.values
            .get(column)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Number of columns carried by this record.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the record carries no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parses comma-separated text into records keyed by the header row.
///
/// Carriage returns are stripped before splitting on line feeds. The first
/// non-empty line provides the column names; every later non-blank line is
/// zipped against them by position. Rows shorter than the header fill the
/// missing trailing columns with empty strings, values beyond the header
/// width are dropped, and blank lines are skipped entirely.
pub fn parse_delimited(input: &str) -> Vec<Record> {
    let normalized = input.replace('\r', "");
    let mut lines = normalized.split('\n');

    let headers: Vec<String> = loop {
        match lines.next() {
            Some(line) if !line.trim().is_empty() => break split_line(line),
            Some(_) => continue,
            None => return Vec::new(),
        }
    };

    let mut records = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_line(line);
        let mut values = HashMap::with_capacity(headers.len());
        for (index, header) in headers.iter().enumerate() {
            let value = fields.get(index).cloned().unwrap_or_default();
            values.insert(header.clone(), value);
        }
        records.push(Record { values });
    }
    records
}

/// Splits one line on commas outside double quotes.
///
/// Quote characters flip the inside-quotes flag and are dropped from the
/// output; every field is trimmed.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => inside_quotes = !inside_quotes,
            ',' if !inside_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            other => current.push(other),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::split_line;

    #[test]
    fn quoted_commas_stay_inside_one_field() {
        assert_eq!(split_line(r#"a,"b, c",d"#), vec!["a", "b, c", "d"]);
    }

    #[test]
    fn fields_are_trimmed() {
        assert_eq!(split_line("  x , y  "), vec!["x", "y"]);
    }

    #[test]
    fn unterminated_quote_consumes_the_rest_of_the_line() {
        assert_eq!(split_line(r#"a,"b, c"#), vec!["a", "b, c"]);
    }
}

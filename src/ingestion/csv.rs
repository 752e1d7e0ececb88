//! CSV loading into a numeric [`Table`].

use std::path::Path;

use ndarray::Array2;

use crate::error::{PreprocessError, PreprocessResult};
use crate::types::Table;

/// Load a CSV file into a [`Table`].
///
/// Rules:
///
/// - CSV must have headers; they become the column names.
/// - Every cell is parsed as `f64`.
/// - Empty cells and `nan` / `na` / `null` (case-insensitive) become NaN.
pub fn table_from_csv_path(path: impl AsRef<Path>) -> PreprocessResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    table_from_csv_reader(&mut rdr)
}

/// Load CSV data from an existing CSV reader.
pub fn table_from_csv_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> PreprocessResult<Table> {
    let columns = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect::<Vec<_>>();

    let mut values: Vec<f64> = Vec::new();
    let mut rows = 0;
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;
        for (column, raw) in columns.iter().zip(record.iter()) {
            values.push(parse_cell(user_row, column, raw)?);
        }
        rows += 1;
    }

    let values = Array2::from_shape_vec((rows, columns.len()), values)?;
    Table::new(columns, values)
}

fn parse_cell(row: usize, column: &str, raw: &str) -> PreprocessResult<f64> {
    let trimmed = raw.trim();
    if is_missing(trimmed) {
        return Ok(f64::NAN);
    }
    trimmed.parse::<f64>().map_err(|e| PreprocessError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message: e.to_string(),
    })
}

fn is_missing(s: &str) -> bool {
    s.is_empty() || ["nan", "na", "null"].iter().any(|m| s.eq_ignore_ascii_case(m))
}

#[cfg(test)]
mod tests {
    use super::{is_missing, parse_cell};

    #[test]
    fn missing_markers_are_case_insensitive() {
        assert!(is_missing(""));
        assert!(is_missing("NaN"));
        assert!(is_missing("NA"));
        assert!(is_missing("Null"));
        assert!(!is_missing("0"));
    }

    #[test]
    fn parse_cell_reports_location() {
        assert_eq!(parse_cell(2, "x", " 1.5 ").unwrap(), 1.5);
        assert!(parse_cell(2, "x", "").unwrap().is_nan());
        let err = parse_cell(3, "x", "abc").unwrap_err();
        assert!(err.to_string().contains("row 3 column 'x'"));
    }
}

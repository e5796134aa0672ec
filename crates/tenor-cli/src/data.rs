//! CSV loading of return and price series.
//!
//! Files have a header row of series names and one row per period. A
//! leading `date`, `time` or `timestamp` column is skipped, so exports with
//! an index column load unchanged.

use std::path::Path;

use crate::error::{CliError, CliResult};

const INDEX_HEADERS: [&str; 3] = ["date", "time", "timestamp"];

/// Numeric columns read from a CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesTable {
    /// Column names, in file order.
    pub names: Vec<String>,
    /// One series per column.
    pub columns: Vec<Vec<f64>>,
}

impl SeriesTable {
    /// The series named `name`, or the first series if `name` is `None`.
    pub fn column(&self, name: Option<&str>, path: &Path) -> CliResult<Vec<f64>> {
        let index = match name {
            Some(name) => self
                .names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| CliError::data(path, format!("no column named '{name}'")))?,
            None => 0,
        };
        Ok(self.columns[index].clone())
    }
}

/// Reads every numeric column of a CSV file.
pub fn read_series(path: &Path) -> CliResult<SeriesTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let skip = usize::from(
        headers
            .get(0)
            .is_some_and(|h| INDEX_HEADERS.iter().any(|i| h.eq_ignore_ascii_case(i))),
    );
    let names: Vec<String> = headers.iter().skip(skip).map(str::to_string).collect();
    if names.is_empty() {
        return Err(CliError::data(path, "no data columns"));
    }

    let mut columns = vec![Vec::new(); names.len()];
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // header is line 1
        let line = row + 2;
        for (column, field) in record.iter().skip(skip).enumerate() {
            let value: f64 = field.parse().map_err(|_| {
                CliError::data(
                    path,
                    format!("line {line}, column '{}': '{field}' is not a number", names[column]),
                )
            })?;
            if !value.is_finite() {
                return Err(CliError::data(
                    path,
                    format!("line {line}, column '{}': '{field}' is not finite", names[column]),
                ));
            }
            columns[column].push(value);
        }
    }

    if columns[0].is_empty() {
        return Err(CliError::data(path, "no data rows"));
    }

    tracing::debug!(
        "loaded {} series of {} rows from {}",
        names.len(),
        columns[0].len(),
        path.display()
    );

    Ok(SeriesTable { names, columns })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_columns() {
        let file = write("A, B\n0.01, 0.02\n-0.02, 0.01\n");
        let table = read_series(file.path()).unwrap();
        assert_eq!(table.names, vec!["A", "B"]);
        assert_eq!(table.columns, vec![vec![0.01, -0.02], vec![0.02, 0.01]]);
    }

    #[test]
    fn test_skips_date_column() {
        let file = write("Date,SPX\n2019-01-02,2510.0\n2019-01-03,2447.9\n");
        let table = read_series(file.path()).unwrap();
        assert_eq!(table.names, vec!["SPX"]);
        assert_eq!(table.column(Some("SPX"), file.path()).unwrap(), vec![2510.0, 2447.9]);
        assert!(table.column(Some("NDX"), file.path()).is_err());
    }

    #[test]
    fn test_rejects_non_numeric() {
        let file = write("A\n0.01\nabc\n");
        let err = read_series(file.path()).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_rejects_non_finite() {
        for bad in ["NaN", "inf", "-inf"] {
            let file = write(&format!("A,B\n0.01,0.02\n0.03,{bad}\n"));
            let err = read_series(file.path()).unwrap_err().to_string();
            assert!(err.contains("line 3, column 'B'"), "{err}");
            assert!(err.contains("not finite"), "{err}");
        }
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let file = write("A,B\n0.01,0.02\n0.03\n");
        assert!(matches!(read_series(file.path()), Err(CliError::Csv(_))));
    }

    #[test]
    fn test_rejects_empty() {
        let file = write("A,B\n");
        assert!(read_series(file.path()).is_err());
    }
}

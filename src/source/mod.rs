//! Read-only access to the per-period tables of the budget spreadsheet.
//!
//! A source knows nothing about transactions: it hands back the header row and
//! the raw text of the requested columns. Parsing happens in the ledger loader.

mod csv_dir;
#[cfg(test)]
pub(crate) mod memory;
#[cfg(feature = "workbook")]
mod workbook;

use std::path::PathBuf;

pub(crate) use csv_dir::CsvDirSource;
#[cfg(feature = "workbook")]
pub(crate) use workbook::WorkbookSource;

/// Date, Amount, Description, Paid To, Category, Method.
pub(crate) const LEDGER_COLUMNS: [usize; 6] = [0, 1, 2, 3, 4, 5];

#[derive(Debug, thiserror::Error)]
pub(crate) enum SourceError {
    #[error("period '{0}' not found in source")]
    PeriodNotFound(String),
    #[error("source unreachable: {}", path.display())]
    Unreachable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read CSV")]
    Csv(#[from] csv::Error),
    #[error("failed to read workbook: {0}")]
    Workbook(String),
}

/// What to read from a period table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SheetRequest {
    /// Banner rows above the column header row.
    pub(crate) skip_rows: usize,
    /// Column positions to keep, in output order.
    pub(crate) columns: Vec<usize>,
}

impl Default for SheetRequest {
    fn default() -> Self {
        Self {
            skip_rows: 1,
            columns: LEDGER_COLUMNS.to_vec(),
        }
    }
}

/// One data row. `number` counts from 1 below the header row and includes
/// the blank rows that were dropped, so it matches what the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawRow {
    pub(crate) number: usize,
    pub(crate) cells: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RawTable {
    pub(crate) headers: Vec<String>,
    pub(crate) rows: Vec<RawRow>,
}

impl RawTable {
    /// Build a table from every row of a sheet: drop the banner, take the next
    /// row as headers, project everything to the requested columns and drop
    /// rows that end up blank.
    pub(crate) fn from_rows(all_rows: Vec<Vec<String>>, request: &SheetRequest) -> Self {
        let mut rows = all_rows.into_iter().skip(request.skip_rows);
        let headers = rows
            .next()
            .map(|r| project(&r, &request.columns))
            .unwrap_or_default();
        let rows = rows
            .enumerate()
            .map(|(i, r)| RawRow {
                number: i + 1,
                cells: project(&r, &request.columns),
            })
            .filter(|r| r.cells.iter().any(|cell| !cell.trim().is_empty()))
            .collect();
        Self { headers, rows }
    }
}

fn project(row: &[String], columns: &[usize]) -> Vec<String> {
    columns
        .iter()
        .map(|&c| row.get(c).cloned().unwrap_or_default())
        .collect()
}

pub(crate) trait SheetSource {
    /// Human-readable location, used in log lines and error messages.
    fn describe(&self) -> String;

    fn read_period(&self, period: &str, request: &SheetRequest) -> Result<RawTable, SourceError>;
}

impl<S: SheetSource + ?Sized> SheetSource for Box<S> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn read_period(&self, period: &str, request: &SheetRequest) -> Result<RawTable, SourceError> {
        (**self).read_period(period, request)
    }
}

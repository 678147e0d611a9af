use std::path::PathBuf;

use calamine::{Data, DataType, Reader};

use super::{RawTable, SheetRequest, SheetSource, SourceError};

/// A spreadsheet file (xlsx, xls, ods) with one worksheet per period.
pub(crate) struct WorkbookSource {
    path: PathBuf,
}

impl WorkbookSource {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SheetSource for WorkbookSource {
    fn describe(&self) -> String {
        format!("workbook {}", self.path.display())
    }

    fn read_period(&self, period: &str, request: &SheetRequest) -> Result<RawTable, SourceError> {
        if let Err(e) = std::fs::metadata(&self.path) {
            return Err(SourceError::Unreachable {
                path: self.path.clone(),
                source: e,
            });
        }
        let mut workbook = calamine::open_workbook_auto(&self.path)
            .map_err(|e| SourceError::Workbook(format!("{}: {e}", self.path.display())))?;

        if !workbook.sheet_names().iter().any(|name| name == period) {
            return Err(SourceError::PeriodNotFound(period.to_string()));
        }
        let range = workbook
            .worksheet_range(period)
            .map_err(|e| SourceError::Workbook(format!("worksheet '{period}': {e}")))?;

        let rows = range
            .rows()
            .map(|row| row.iter().map(cell_text).collect())
            .collect();
        Ok(RawTable::from_rows(rows, request))
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| cell.to_string()),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "workbook_tests.rs"]
mod tests;

use std::cell::Cell;
use std::collections::HashMap;

use super::{RawTable, SheetRequest, SheetSource, SourceError};

/// In-memory sheets for tests. Counts reads so cache behaviour can be checked.
#[derive(Default)]
pub(crate) struct MemorySource {
    sheets: HashMap<String, Vec<Vec<String>>>,
    reads: Cell<usize>,
}

impl MemorySource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a sheet laid out like the real spreadsheet: a banner row, the
    /// column headers, then `rows`.
    pub(crate) fn with_sheet(mut self, name: &str, rows: &[[&str; 6]]) -> Self {
        let mut all = vec![
            vec![format!("{name} Budget")],
            ["Date", "Amount", "Description", "Paid To", "Category", "Method"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ];
        all.extend(rows.iter().map(|r| r.iter().map(|s| s.to_string()).collect()));
        self.sheets.insert(name.to_string(), all);
        self
    }

    pub(crate) fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl SheetSource for MemorySource {
    fn describe(&self) -> String {
        "memory".into()
    }

    fn read_period(&self, period: &str, request: &SheetRequest) -> Result<RawTable, SourceError> {
        self.reads.set(self.reads.get() + 1);
        let rows = self
            .sheets
            .get(period)
            .cloned()
            .ok_or_else(|| SourceError::PeriodNotFound(period.to_string()))?;
        Ok(RawTable::from_rows(rows, request))
    }
}

use std::path::{Path, PathBuf};

use super::{RawTable, SheetRequest, SheetSource, SourceError};

/// One CSV file per period: `<dir>/<period>.csv`.
pub(crate) struct CsvDirSource {
    dir: PathBuf,
}

impl CsvDirSource {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn period_path(&self, period: &str) -> PathBuf {
        self.dir.join(format!("{period}.csv"))
    }
}

impl SheetSource for CsvDirSource {
    fn describe(&self) -> String {
        format!("CSV directory {}", self.dir.display())
    }

    fn read_period(&self, period: &str, request: &SheetRequest) -> Result<RawTable, SourceError> {
        if let Err(e) = std::fs::metadata(&self.dir) {
            return Err(SourceError::Unreachable {
                path: self.dir.clone(),
                source: e,
            });
        }
        let path = self.period_path(period);
        if !path.is_file() {
            return Err(SourceError::PeriodNotFound(period.to_string()));
        }
        let rows = read_all_rows(&path)?;
        Ok(RawTable::from_rows(rows, request))
    }
}

fn read_all_rows(path: &Path) -> Result<Vec<Vec<String>>, SourceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path)?;

    let mut all_rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        all_rows.push(record.iter().map(|s| s.to_string()).collect());
    }
    Ok(all_rows)
}

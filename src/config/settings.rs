use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ledger::{BalanceConfig, LoadSettings, ReconciliationOffset};
use crate::models::{Method, MAX_AMOUNT};
use crate::source::{CsvDirSource, SheetRequest, SheetSource, LEDGER_COLUMNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub(crate) enum SourceKind {
    /// A directory with one `<Period>.csv` per sheet
    #[default]
    CsvDir,
    /// An xlsx/xls/ods file with one worksheet per period
    Workbook,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SourceSettings {
    #[serde(default)]
    pub(crate) kind: SourceKind,
    /// Relative paths resolve against the config file's directory
    #[serde(default = "default_source_path")]
    pub(crate) path: PathBuf,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            path: default_source_path(),
        }
    }
}

/// Known balance not reflected in the transaction history as of ledger start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct OffsetSetting {
    pub(crate) method: String,
    pub(crate) amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Settings {
    #[serde(default)]
    pub(crate) source: SourceSettings,

    /// Sheet names to load, in order
    #[serde(default = "default_periods")]
    pub(crate) periods: Vec<String>,

    /// Banner rows above each sheet's column headers
    #[serde(default = "default_skip_rows")]
    pub(crate) skip_rows: usize,

    #[serde(default = "default_savings_category")]
    pub(crate) savings_category: String,

    /// Tracked payment methods and their offsets, in display order
    #[serde(default = "default_offsets")]
    pub(crate) offsets: Vec<OffsetSetting>,
}

fn default_source_path() -> PathBuf {
    PathBuf::from("./budget")
}

fn default_periods() -> Vec<String> {
    vec!["January".into(), "February".into(), "March".into()]
}

fn default_skip_rows() -> usize {
    1
}

fn default_savings_category() -> String {
    "Savings".to_string()
}

fn default_offsets() -> Vec<OffsetSetting> {
    ["Cash", "Debit"]
        .iter()
        .map(|m| OffsetSetting {
            method: m.to_string(),
            amount: Decimal::ZERO,
        })
        .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: SourceSettings::default(),
            periods: default_periods(),
            skip_rows: default_skip_rows(),
            savings_category: default_savings_category(),
            offsets: default_offsets(),
        }
    }
}

impl Settings {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut settings: Settings = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if settings.source.path.is_relative() {
            if let Some(dir) = path.parent() {
                settings.source.path = dir.join(&settings.source.path);
            }
        }
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(settings)
    }

    pub(crate) fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub(crate) fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize settings")
    }

    pub(crate) fn load_settings(&self) -> LoadSettings {
        LoadSettings {
            periods: self.periods.clone(),
            request: SheetRequest {
                skip_rows: self.skip_rows,
                columns: LEDGER_COLUMNS.to_vec(),
            },
        }
    }

    /// Each method may appear once, or its history would be counted twice
    /// in the total.
    pub(crate) fn balance_config(&self) -> Result<BalanceConfig> {
        let mut offsets: Vec<ReconciliationOffset> = Vec::with_capacity(self.offsets.len());
        for o in &self.offsets {
            let method = Method::parse(&o.method);
            if offsets.iter().any(|existing| existing.method == method) {
                anyhow::bail!("Offset for method '{method}' is listed more than once");
            }
            if o.amount.abs() > MAX_AMOUNT {
                anyhow::bail!("Offset for method '{method}' is out of range: {}", o.amount);
            }
            offsets.push(ReconciliationOffset {
                method,
                amount: o.amount,
            });
        }
        Ok(BalanceConfig {
            savings_category: self.savings_category.trim().to_string(),
            offsets,
        })
    }

    pub(crate) fn open_source(&self) -> Result<Box<dyn SheetSource>> {
        match self.source.kind {
            SourceKind::CsvDir => Ok(Box::new(CsvDirSource::new(&self.source.path))),
            #[cfg(feature = "workbook")]
            SourceKind::Workbook => Ok(Box::new(crate::source::WorkbookSource::new(
                &self.source.path,
            ))),
            #[cfg(not(feature = "workbook"))]
            SourceKind::Workbook => {
                anyhow::bail!("This build has no workbook support (enable the `workbook` feature)")
            }
        }
    }
}

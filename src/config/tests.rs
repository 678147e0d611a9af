#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;
use std::path::PathBuf;

use super::settings::{OffsetSetting, SourceKind};
use super::*;
use crate::models::Method;

fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.source.kind, SourceKind::CsvDir);
    assert_eq!(settings.periods, vec!["January", "February", "March"]);
    assert_eq!(settings.skip_rows, 1);
    assert_eq!(settings.savings_category, "Savings");
    assert_eq!(settings.offsets.len(), 2);
}

#[test]
fn test_load_full_config() {
    let (dir, path) = write_config(
        "source:\n  kind: workbook\n  path: budget.xlsx\n\
         periods: [January, February]\n\
         skip_rows: 2\n\
         savings_category: Savings\n\
         offsets:\n  - method: Cash\n    amount: \"229.00\"\n  - method: Debit\n    amount: \"5597.14\"\n",
    );
    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.source.kind, SourceKind::Workbook);
    assert_eq!(settings.source.path, dir.path().join("budget.xlsx"));
    assert_eq!(settings.periods, vec!["January", "February"]);
    assert_eq!(settings.skip_rows, 2);
    assert_eq!(settings.offsets[0].amount, dec!(229.00));
    assert_eq!(settings.offsets[1].amount, dec!(5597.14));
}

#[test]
fn test_partial_config_uses_defaults() {
    let (_dir, path) = write_config("periods: [April]\n");
    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.periods, vec!["April"]);
    assert_eq!(settings.skip_rows, 1);
    assert_eq!(settings.source.kind, SourceKind::CsvDir);
    assert_eq!(settings.offsets, Settings::default().offsets);
}

#[test]
fn test_absolute_source_path_kept() {
    let (_dir, path) = write_config("source:\n  path: /srv/budget\n");
    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.source.path, PathBuf::from("/srv/budget"));
}

#[test]
fn test_invalid_kind_rejected() {
    let (_dir, path) = write_config("source:\n  kind: gsheets\n");
    let err = Settings::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config file"));
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.yaml");
    assert!(load(Some(&missing)).is_err());
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_or_default(&dir.path().join("config.yaml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_balance_config_conversion() {
    let settings = Settings {
        savings_category: " Savings ".into(),
        offsets: vec![
            OffsetSetting {
                method: "cash".into(),
                amount: dec!(229.00),
            },
            OffsetSetting {
                method: "Venmo".into(),
                amount: dec!(12),
            },
        ],
        ..Settings::default()
    };
    let config = settings.balance_config().unwrap();
    assert_eq!(config.savings_category, "Savings");
    assert_eq!(config.offsets[0].method, Method::Cash);
    assert_eq!(config.offsets[0].amount, dec!(229.00));
    assert_eq!(config.offsets[1].method, Method::Other("Venmo".into()));
}

#[test]
fn test_balance_config_rejects_repeated_method() {
    let (_dir, path) = write_config(
        "offsets:\n  - method: Debit\n    amount: \"10\"\n  - method: debit\n    amount: \"5\"\n",
    );
    let settings = Settings::load(&path).unwrap();
    let err = settings.balance_config().unwrap_err();
    assert!(err.to_string().contains("'Debit' is listed more than once"));
}

#[test]
fn test_balance_config_rejects_huge_offset() {
    let settings = Settings {
        offsets: vec![OffsetSetting {
            method: "Cash".into(),
            amount: rust_decimal::Decimal::MAX,
        }],
        ..Settings::default()
    };
    let err = settings.balance_config().unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn test_load_settings_conversion() {
    let settings = Settings {
        periods: vec!["May".into()],
        skip_rows: 0,
        ..Settings::default()
    };
    let load = settings.load_settings();
    assert_eq!(load.periods, vec!["May"]);
    assert_eq!(load.request.skip_rows, 0);
    assert_eq!(load.request.columns, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_yaml_roundtrip() {
    let settings = Settings::default();
    let yaml = settings.to_yaml().unwrap();
    let back: Settings = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(settings, back);
}

#[test]
fn test_open_csv_source() {
    let settings = Settings::default();
    let source = settings.open_source().unwrap();
    assert!(source.describe().contains("budget"));
}

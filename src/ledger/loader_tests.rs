#![allow(clippy::unwrap_used)]

use chrono::{Month, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::ledger::LoadError;
use crate::models::Method;
use crate::source::memory::MemorySource;
use crate::source::SourceError;

fn settings(periods: &[&str]) -> LoadSettings {
    LoadSettings {
        periods: periods.iter().map(|p| p.to_string()).collect(),
        request: SheetRequest::default(),
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── parse_date ────────────────────────────────────────────────

#[test]
fn test_parse_date_iso() {
    assert_eq!(parse_date("2024-01-15"), Some(ymd(2024, 1, 15)));
}

#[test]
fn test_parse_date_iso_with_time() {
    assert_eq!(parse_date("2024-01-15 00:00:00"), Some(ymd(2024, 1, 15)));
    assert_eq!(parse_date("2024-01-15T08:30:00"), Some(ymd(2024, 1, 15)));
}

#[test]
fn test_parse_date_us_format() {
    assert_eq!(parse_date("01/15/2024"), Some(ymd(2024, 1, 15)));
    assert_eq!(parse_date("1/5/2024"), Some(ymd(2024, 1, 5)));
    assert_eq!(parse_date("01-15-2024"), Some(ymd(2024, 1, 15)));
}

#[test]
fn test_parse_date_two_digit_year() {
    assert_eq!(parse_date("01/15/24"), Some(ymd(2024, 1, 15)));
}

#[test]
fn test_parse_date_slash_iso() {
    assert_eq!(parse_date("2024/03/02"), Some(ymd(2024, 3, 2)));
}

#[test]
fn test_parse_date_month_name() {
    assert_eq!(parse_date("January 5, 2024"), Some(ymd(2024, 1, 5)));
}

#[test]
fn test_parse_date_invalid() {
    assert_eq!(parse_date("not-a-date"), None);
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("13/45/2024"), None);
    assert_eq!(parse_date("2024"), None);
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_basic() {
    assert_eq!(parse_amount("100.50"), Some(dec!(100.50)));
    assert_eq!(parse_amount("-42.99"), Some(dec!(-42.99)));
}

#[test]
fn test_parse_amount_with_currency() {
    assert_eq!(parse_amount("$1,234.56"), Some(dec!(1234.56)));
    assert_eq!(parse_amount("-$99.99"), Some(dec!(-99.99)));
}

#[test]
fn test_parse_amount_parentheses_negative() {
    assert_eq!(parse_amount("(500.00)"), Some(dec!(-500.00)));
}

#[test]
fn test_parse_amount_empty_is_zero() {
    assert_eq!(parse_amount(""), Some(Decimal::ZERO));
    assert_eq!(parse_amount("  "), Some(Decimal::ZERO));
}

#[test]
fn test_parse_amount_invalid() {
    assert_eq!(parse_amount("twelve"), None);
}

#[test]
fn test_parse_amount_out_of_range() {
    assert_eq!(parse_amount("79228162514264337593543950335"), None);
    assert_eq!(parse_amount("-1,000,000,000,000.01"), None);
    assert_eq!(parse_amount("1,000,000,000,000"), Some(dec!(1000000000000)));
}

// ── load_ledger ───────────────────────────────────────────────

#[test]
fn test_load_concatenates_in_configured_order() {
    let source = MemorySource::new()
        .with_sheet(
            "February",
            &[["2024-02-03", "-20", "Gas", "Shell", "Transport", "Debit"]],
        )
        .with_sheet(
            "January",
            &[
                ["2024-01-05", "-50", "Shop", "Aldi", "Groceries", "Debit"],
                ["2024-01-06", "1000", "Pay", "Employer", "Income", "Debit"],
            ],
        );
    let ledger = load_ledger(&source, &settings(&["January", "February"])).unwrap();
    let amounts: Vec<Decimal> = ledger.transactions().iter().map(|t| t.amount).collect();
    assert_eq!(amounts, vec![dec!(-50), dec!(1000), dec!(-20)]);
}

#[test]
fn test_load_normalizes_fields() {
    let source = MemorySource::new().with_sheet(
        "January",
        &[[" 01/05/2024 ", " $-1,050.25 ", " Rent ", " Landlord ", " Housing ", " debit "]],
    );
    let ledger = load_ledger(&source, &settings(&["January"])).unwrap();
    let t = &ledger.transactions()[0];
    assert_eq!(t.date, ymd(2024, 1, 5));
    assert_eq!(t.amount, dec!(-1050.25));
    assert_eq!(t.description, "Rent");
    assert_eq!(t.paid_to, "Landlord");
    assert_eq!(t.category, "Housing");
    assert_eq!(t.method, Method::Debit);
    assert_eq!(t.period, Month::January);
    assert_eq!(t.source_period, "January");
}

#[test]
fn test_load_reclassifies_by_date() {
    let source = MemorySource::new()
        .with_sheet(
            "January",
            &[["2024-01-05", "-50", "Shop", "Aldi", "Groceries", "Debit"]],
        )
        .with_sheet(
            "February",
            &[
                ["2024-01-31", "-15", "Late entry", "Cafe", "Dining", "Cash"],
                ["2024-02-02", "-30", "Dinner", "Bistro", "Dining", "Cash"],
            ],
        );
    let ledger = load_ledger(&source, &settings(&["January", "February"])).unwrap();
    let late = &ledger.transactions()[1];
    assert_eq!(late.source_period, "February");
    assert_eq!(late.period, Month::January);
    assert!(late.is_reclassified());
    assert_eq!(ledger.in_period(Month::January).count(), 2);
    assert_eq!(ledger.in_period(Month::February).count(), 1);
}

#[test]
fn test_load_keeps_duplicates() {
    let row = ["2024-01-05", "-50", "Shop", "Aldi", "Groceries", "Debit"];
    let source = MemorySource::new().with_sheet("January", &[row, row]);
    let ledger = load_ledger(&source, &settings(&["January"])).unwrap();
    assert_eq!(ledger.len(), 2);
}

#[test]
fn test_load_unknown_method_kept_verbatim() {
    let source = MemorySource::new().with_sheet(
        "January",
        &[["2024-01-05", "-5", "Coffee", "Cafe", "Dining", "Venmo"]],
    );
    let ledger = load_ledger(&source, &settings(&["January"])).unwrap();
    assert_eq!(
        ledger.transactions()[0].method,
        Method::Other("Venmo".into())
    );
}

#[test]
fn test_load_fails_on_bad_date() {
    let source = MemorySource::new().with_sheet(
        "January",
        &[
            ["2024-01-05", "-50", "Shop", "Aldi", "Groceries", "Debit"],
            ["someday", "-5", "Coffee", "Cafe", "Dining", "Cash"],
        ],
    );
    let err = load_ledger(&source, &settings(&["January"])).unwrap_err();
    match err {
        LoadError::Date { period, row, value } => {
            assert_eq!(period, "January");
            assert_eq!(row, 2);
            assert_eq!(value, "someday");
        }
        other => panic!("expected date error, got {other:?}"),
    }
}

#[test]
fn test_load_fails_on_missing_date() {
    let source = MemorySource::new().with_sheet(
        "January",
        &[["", "-5", "Coffee", "Cafe", "Dining", "Cash"]],
    );
    let err = load_ledger(&source, &settings(&["January"])).unwrap_err();
    assert!(matches!(err, LoadError::Date { row: 1, .. }));
}

#[test]
fn test_load_error_row_counts_blank_rows() {
    let source = MemorySource::new().with_sheet(
        "January",
        &[
            ["2024-01-05", "-50", "Shop", "Aldi", "Groceries", "Debit"],
            ["", "", "", "", "", ""],
            ["bogus", "-5", "Coffee", "Cafe", "Dining", "Cash"],
        ],
    );
    let err = load_ledger(&source, &settings(&["January"])).unwrap_err();
    assert!(matches!(err, LoadError::Date { row: 3, .. }));
    assert_eq!(
        err.to_string(),
        "period 'January', row 3: unparseable date 'bogus'"
    );
}

#[test]
fn test_load_rejects_amount_too_large_to_sum() {
    let huge = "79228162514264337593543950335";
    let source = MemorySource::new().with_sheet(
        "January",
        &[
            ["2024-01-05", huge, "A", "X", "Groceries", "Debit"],
            ["2024-01-06", huge, "B", "X", "Groceries", "Debit"],
        ],
    );
    let err = load_ledger(&source, &settings(&["January"])).unwrap_err();
    match err {
        LoadError::Amount { row, value, .. } => {
            assert_eq!(row, 1);
            assert_eq!(value, huge);
        }
        other => panic!("expected amount error, got {other:?}"),
    }
}

#[test]
fn test_load_fails_on_bad_amount() {
    let source = MemorySource::new().with_sheet(
        "January",
        &[["2024-01-05", "lots", "Coffee", "Cafe", "Dining", "Cash"]],
    );
    let err = load_ledger(&source, &settings(&["January"])).unwrap_err();
    assert!(err.to_string().contains("unparseable amount 'lots'"));
}

#[test]
fn test_load_fails_on_missing_period() {
    let source = MemorySource::new().with_sheet(
        "January",
        &[["2024-01-05", "-50", "Shop", "Aldi", "Groceries", "Debit"]],
    );
    let err = load_ledger(&source, &settings(&["January", "February"])).unwrap_err();
    match err {
        LoadError::Source { period, source } => {
            assert_eq!(period, "February");
            assert!(matches!(source, SourceError::PeriodNotFound(_)));
        }
        other => panic!("expected source error, got {other:?}"),
    }
}

#[test]
fn test_load_no_periods_is_empty_ledger() {
    let source = MemorySource::new();
    let ledger = load_ledger(&source, &settings(&[])).unwrap();
    assert!(ledger.is_empty());
}

#[test]
fn test_load_is_idempotent() {
    let source = MemorySource::new().with_sheet(
        "January",
        &[
            ["2024-01-05", "-50", "Shop", "Aldi", "Groceries", "Debit"],
            ["2024-01-10", "-300", "Transfer", "Bank", "Savings", "Debit"],
        ],
    );
    let s = settings(&["January"]);
    let first = load_ledger(&source, &s).unwrap();
    let second = load_ledger(&source, &s).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_load_from_csv_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("January.csv"),
        "January,,,,,\n\
         Date,Amount,Description,Paid To,Category,Method\n\
         1/5/2024,-50.00,Weekly shop,Aldi,Groceries,Debit\n\
         ,,,,,\n",
    )
    .unwrap();
    let source = crate::source::CsvDirSource::new(dir.path());
    let ledger = load_ledger(&source, &settings(&["January"])).unwrap();
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.transactions()[0].paid_to, "Aldi");
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::{Ledger, LoadError};
use crate::models::{period_of, Method, Transaction, MAX_AMOUNT};
use crate::source::{SheetRequest, SheetSource};

/// Which sheets to read and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LoadSettings {
    /// Sheet names, concatenated in this order.
    pub(crate) periods: Vec<String>,
    pub(crate) request: SheetRequest,
}

/// Read every configured period and normalize the rows into one ledger.
///
/// Any source failure or unparseable date/amount aborts the whole load; there
/// is no partial ledger.
pub(crate) fn load_ledger<S: SheetSource + ?Sized>(
    source: &S,
    settings: &LoadSettings,
) -> Result<Ledger, LoadError> {
    let mut transactions = Vec::new();

    for period in &settings.periods {
        let table =
            source
                .read_period(period, &settings.request)
                .map_err(|e| LoadError::Source {
                    period: period.clone(),
                    source: e,
                })?;
        tracing::debug!(
            period = %period,
            columns = ?table.headers,
            rows = table.rows.len(),
            "read period"
        );

        for row in &table.rows {
            let txn = parse_row(&row.cells, period, row.number)?;
            if txn.is_reclassified() {
                tracing::debug!(
                    sheet = %period,
                    month = txn.period.name(),
                    date = %txn.date,
                    "row dated outside its sheet, grouped by date"
                );
            }
            transactions.push(txn);
        }
    }

    tracing::info!(
        source = %source.describe(),
        periods = settings.periods.len(),
        transactions = transactions.len(),
        "ledger loaded"
    );
    Ok(Ledger::new(transactions))
}

fn parse_row(row: &[String], period: &str, row_number: usize) -> Result<Transaction, LoadError> {
    let cell = |i: usize| row.get(i).map(|s| s.trim()).unwrap_or("");

    let date = parse_date(cell(0)).ok_or_else(|| LoadError::Date {
        period: period.to_string(),
        row: row_number,
        value: cell(0).to_string(),
    })?;
    let amount = parse_amount(cell(1)).ok_or_else(|| LoadError::Amount {
        period: period.to_string(),
        row: row_number,
        value: cell(1).to_string(),
    })?;

    Ok(Transaction {
        date,
        amount,
        description: cell(2).to_string(),
        paid_to: cell(3).to_string(),
        category: cell(4).to_string(),
        method: Method::parse(cell(5)),
        period: period_of(date),
        source_period: period.to_string(),
    })
}

const NAMED_MONTH_FORMATS: [&str; 2] = ["%B %d, %Y", "%b %d, %Y"];

/// Accepts ISO dates (with or without a time part), US `m/d/Y` and `m/d/y`
/// with `/` or `-`, and spelled-out months like `January 5, 2024`.
pub(super) fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in NAMED_MONTH_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let date_part = s.split(['T', ' ']).next().unwrap_or(s);
    let normalized = date_part.replace('/', "-");
    let parts: Vec<&str> = normalized.split('-').collect();
    let [first, _, last] = parts.as_slice() else {
        return None;
    };
    // chrono's %Y happily reads two digits, so pick the layout by field width.
    let fmt = match (first.len(), last.len()) {
        (4, _) => "%Y-%m-%d",
        (_, 4) => "%m-%d-%Y",
        (_, 2) => "%m-%d-%y",
        _ => return None,
    };
    NaiveDate::parse_from_str(&normalized, fmt).ok()
}

/// Spreadsheet amounts: `$` and thousands separators are ignored, `(x)` is
/// negative, an empty cell is zero. Magnitudes above [`MAX_AMOUNT`] are
/// rejected.
pub(super) fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = s
        .replace(['$', ','], "")
        .replace('(', "-")
        .replace(')', "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
        .filter(|d| d.abs() <= MAX_AMOUNT)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

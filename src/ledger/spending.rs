use chrono::Month;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::Ledger;
use crate::models::CategorySpend;

/// Spending per category for one month, largest first.
///
/// Only strictly negative amounts count, and the savings category is a
/// transfer rather than spend. Rows with a blank category are left out. Ties
/// keep category name order.
pub(crate) fn spending_by_category(
    ledger: &Ledger,
    period: Month,
    savings_category: &str,
) -> Vec<CategorySpend> {
    let mut by_category: BTreeMap<&str, Decimal> = BTreeMap::new();
    let mut uncategorized = 0usize;

    for txn in ledger.in_period(period) {
        if !txn.is_expense() || txn.category == savings_category {
            continue;
        }
        if txn.category.is_empty() {
            uncategorized += 1;
            continue;
        }
        *by_category.entry(txn.category.as_str()).or_default() += txn.abs_amount();
    }

    if uncategorized > 0 {
        tracing::debug!(
            month = period.name(),
            rows = uncategorized,
            "skipped spending rows without a category"
        );
    }

    let mut spending: Vec<CategorySpend> = by_category
        .into_iter()
        .map(|(category, total)| CategorySpend {
            category: category.to_string(),
            total,
        })
        .collect();
    spending.sort_by(|a, b| b.total.cmp(&a.total));
    spending
}

#[cfg(test)]
#[path = "spending_tests.rs"]
mod tests;

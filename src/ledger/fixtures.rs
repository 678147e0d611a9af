#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{BalanceConfig, Ledger, ReconciliationOffset};
use crate::models::{period_of, Method, Transaction};

/// A transaction read from the sheet named after its own month.
pub(crate) fn txn(date: &str, amount: Decimal, category: &str, method: Method) -> Transaction {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    let period = period_of(date);
    Transaction {
        date,
        amount,
        description: format!("{category} purchase"),
        paid_to: "Somewhere".into(),
        category: category.into(),
        method,
        period,
        source_period: period.name().into(),
    }
}

pub(crate) fn ledger(transactions: Vec<Transaction>) -> Ledger {
    Ledger::new(transactions)
}

pub(crate) fn balance_config(cash: Decimal, debit: Decimal) -> BalanceConfig {
    BalanceConfig {
        savings_category: "Savings".into(),
        offsets: vec![
            ReconciliationOffset {
                method: Method::Cash,
                amount: cash,
            },
            ReconciliationOffset {
                method: Method::Debit,
                amount: debit,
            },
        ],
    }
}

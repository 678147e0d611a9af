//! The unified ledger and everything derived from it.

mod balance;
mod cache;
mod loader;
mod spending;

use chrono::Month;

use crate::models::Transaction;
use crate::source::SourceError;

pub(crate) use balance::{calculate_liquid_balances, BalanceConfig, ReconciliationOffset};
pub(crate) use cache::LedgerCache;
pub(crate) use loader::{load_ledger, LoadSettings};
pub(crate) use spending::spending_by_category;

#[derive(Debug, thiserror::Error)]
pub(crate) enum LoadError {
    #[error("failed to read period '{period}'")]
    Source {
        period: String,
        #[source]
        source: SourceError,
    },
    #[error("period '{period}', row {row}: unparseable date '{value}'")]
    Date {
        period: String,
        row: usize,
        value: String,
    },
    #[error("period '{period}', row {row}: unparseable amount '{value}'")]
    Amount {
        period: String,
        row: usize,
        value: String,
    },
}

/// Every transaction across all loaded periods, in load order.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub(crate) fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Months that actually hold data, in order of first appearance. This can
    /// differ from the configured sheet list when rows were reclassified.
    pub(crate) fn available_periods(&self) -> Vec<Month> {
        let mut seen: Vec<Month> = Vec::new();
        for txn in &self.transactions {
            if !seen.contains(&txn.period) {
                seen.push(txn.period);
            }
        }
        seen
    }

    pub(crate) fn in_period(&self, period: Month) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(move |t| t.period == period)
    }
}

#[cfg(test)]
pub(crate) mod fixtures;

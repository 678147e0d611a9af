use chrono::{Month, NaiveDate};
use rust_decimal::Decimal;

use super::Method;

/// Largest magnitude accepted for a single amount or offset (one trillion).
/// Sums over any realistic ledger then stay inside `Decimal`'s range.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// One normalized ledger row.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    pub(crate) date: NaiveDate,
    pub(crate) amount: Decimal,
    pub(crate) description: String,
    pub(crate) paid_to: String,
    pub(crate) category: String,
    pub(crate) method: Method,
    /// Month derived from `date`. All grouping goes through this field.
    pub(crate) period: Month,
    /// Name of the sheet the row was read from. Diagnostics only.
    pub(crate) source_period: String,
}

impl Transaction {
    pub(crate) fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub(crate) fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub(crate) fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }

    /// True when the row sits in a month-named sheet that disagrees with its date.
    pub(crate) fn is_reclassified(&self) -> bool {
        self.source_period
            .trim()
            .parse::<Month>()
            .is_ok_and(|m| m != self.period)
    }
}

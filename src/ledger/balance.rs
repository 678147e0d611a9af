use rust_decimal::Decimal;

use super::Ledger;
use crate::models::{BalanceSummary, Method, MethodBalance};

/// A known balance that the transaction history does not reflect, e.g. the
/// cash on hand when the spreadsheet was started.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ReconciliationOffset {
    pub(crate) method: Method,
    pub(crate) amount: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BalanceConfig {
    /// Category used for transfers into savings.
    pub(crate) savings_category: String,
    /// Tracked methods and their offsets, in display order.
    pub(crate) offsets: Vec<ReconciliationOffset>,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            savings_category: "Savings".into(),
            offsets: vec![
                ReconciliationOffset {
                    method: Method::Cash,
                    amount: Decimal::ZERO,
                },
                ReconciliationOffset {
                    method: Method::Debit,
                    amount: Decimal::ZERO,
                },
            ],
        }
    }
}

/// Liquid balances per tracked method, plus savings.
///
/// Savings transfers are recorded as outflows, so the savings balance is the
/// negated sum of the savings category. Those same rows still count against
/// the method that paid them. Credit rows never count.
pub(crate) fn calculate_liquid_balances(ledger: &Ledger, config: &BalanceConfig) -> BalanceSummary {
    let savings: Decimal = -ledger
        .transactions()
        .iter()
        .filter(|t| t.category == config.savings_category)
        .map(|t| t.amount)
        .sum::<Decimal>();

    let methods: Vec<MethodBalance> = config
        .offsets
        .iter()
        .map(|offset| {
            let history: Decimal = ledger
                .transactions()
                .iter()
                .filter(|t| !t.method.is_credit() && t.method == offset.method)
                .map(|t| t.amount)
                .sum();
            MethodBalance {
                method: offset.method.clone(),
                balance: history + offset.amount,
            }
        })
        .collect();

    let total = methods.iter().map(|m| m.balance).sum::<Decimal>() + savings;
    BalanceSummary {
        methods,
        savings,
        total,
    }
}

#[cfg(test)]
#[path = "balance_tests.rs"]
mod tests;

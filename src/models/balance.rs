use rust_decimal::Decimal;

use super::Method;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MethodBalance {
    pub(crate) method: Method,
    pub(crate) balance: Decimal,
}

/// Liquid balances as of the end of the ledger.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BalanceSummary {
    /// Tracked methods, in configured order.
    pub(crate) methods: Vec<MethodBalance>,
    pub(crate) savings: Decimal,
    pub(crate) total: Decimal,
}

impl BalanceSummary {
    #[cfg(test)]
    pub(crate) fn balance_of(&self, method: &Method) -> Option<Decimal> {
        self.methods
            .iter()
            .find(|m| &m.method == method)
            .map(|m| m.balance)
    }
}

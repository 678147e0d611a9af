use rust_decimal::Decimal;

/// Total spent in one category over one period. `total` is always positive.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategorySpend {
    pub(crate) category: String,
    pub(crate) total: Decimal,
}

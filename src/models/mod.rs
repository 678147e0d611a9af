mod balance;
mod method;
mod period;
mod spending;
mod transaction;

pub(crate) use balance::{BalanceSummary, MethodBalance};
pub(crate) use method::Method;
pub(crate) use period::{period_of, MONTHS};
pub(crate) use spending::CategorySpend;
pub(crate) use transaction::{Transaction, MAX_AMOUNT};

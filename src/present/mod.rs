//! Display-ready records built from the ledger's derived views. Renderers
//! consume these and never touch the ledger directly.

mod format;
mod selector;

use chrono::Month;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ledger::{calculate_liquid_balances, spending_by_category, BalanceConfig, Ledger};
use crate::models::{BalanceSummary, CategorySpend, Transaction};

pub(crate) use format::format_amount;
pub(crate) use selector::{MonthButton, PeriodSelector};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BalanceCard {
    pub(crate) label: String,
    pub(crate) value: String,
    pub(crate) amount: Decimal,
}

impl BalanceCard {
    fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            value: format_amount(amount),
            amount,
        }
    }
}

/// Tracked methods in configured order, then Savings, then Total.
pub(crate) fn balance_cards(summary: &BalanceSummary) -> Vec<BalanceCard> {
    let mut cards: Vec<BalanceCard> = summary
        .methods
        .iter()
        .map(|m| BalanceCard::new(m.method.as_str(), m.balance))
        .collect();
    cards.push(BalanceCard::new("Savings", summary.savings));
    cards.push(BalanceCard::new("Total", summary.total));
    cards
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SpendingRow {
    pub(crate) category: String,
    pub(crate) total_spent: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartPoint {
    pub(crate) label: String,
    pub(crate) value: f64,
    /// Percent of the month's total spend.
    pub(crate) share: f64,
}

/// Spending section state. The two empty variants are normal outcomes, not
/// failures.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SpendingView {
    NoPeriods,
    Empty {
        period: Month,
    },
    Breakdown {
        period: Month,
        rows: Vec<SpendingRow>,
        chart: Vec<ChartPoint>,
    },
}

impl SpendingView {
    pub(crate) fn build(ledger: &Ledger, selected: Option<Month>, savings_category: &str) -> Self {
        let Some(period) = selected else {
            return Self::NoPeriods;
        };
        let spending = spending_by_category(ledger, period, savings_category);
        if spending.is_empty() {
            return Self::Empty { period };
        }
        Self::Breakdown {
            period,
            rows: spending_rows(&spending),
            chart: chart_series(&spending),
        }
    }

    pub(crate) fn title(&self) -> String {
        match self {
            Self::NoPeriods => "Spending Breakdown".into(),
            Self::Empty { period } | Self::Breakdown { period, .. } => {
                format!("Spending Breakdown - {}", period.name())
            }
        }
    }

    pub(crate) fn message(&self) -> Option<String> {
        match self {
            Self::NoPeriods => Some("No months with data are currently available".into()),
            Self::Empty { period } => Some(format!(
                "No spending data available for {}",
                period.name()
            )),
            Self::Breakdown { .. } => None,
        }
    }
}

pub(crate) fn spending_rows(spending: &[CategorySpend]) -> Vec<SpendingRow> {
    spending
        .iter()
        .map(|s| SpendingRow {
            category: s.category.clone(),
            total_spent: format_amount(s.total),
        })
        .collect()
}

pub(crate) fn chart_series(spending: &[CategorySpend]) -> Vec<ChartPoint> {
    let total: Decimal = spending.iter().map(|s| s.total).sum();
    spending
        .iter()
        .map(|s| {
            let share = if total.is_zero() {
                0.0
            } else {
                (s.total / total * Decimal::ONE_HUNDRED)
                    .to_f64()
                    .unwrap_or(0.0)
            };
            ChartPoint {
                label: s.category.clone(),
                value: s.total.to_f64().unwrap_or(0.0),
                share,
            }
        })
        .collect()
}

/// One raw ledger row, formatted for the data preview.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PreviewRow {
    pub(crate) date: String,
    pub(crate) amount: String,
    pub(crate) description: String,
    pub(crate) paid_to: String,
    pub(crate) category: String,
    pub(crate) method: String,
    pub(crate) is_income: bool,
}

impl From<&Transaction> for PreviewRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date.format("%m/%d/%y").to_string(),
            amount: format_amount(txn.amount),
            description: txn.description.clone(),
            paid_to: txn.paid_to.clone(),
            category: txn.category.clone(),
            method: txn.method.to_string(),
            is_income: txn.is_income(),
        }
    }
}

pub(crate) fn preview_rows(ledger: &Ledger) -> Vec<PreviewRow> {
    ledger.transactions().iter().map(PreviewRow::from).collect()
}

/// Everything a renderer needs for one frame of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DashboardView {
    pub(crate) balances: Vec<BalanceCard>,
    pub(crate) months: Vec<MonthButton>,
    pub(crate) spending: SpendingView,
    pub(crate) preview: Vec<PreviewRow>,
}

impl DashboardView {
    pub(crate) fn build(ledger: &Ledger, config: &BalanceConfig, selector: &PeriodSelector) -> Self {
        let summary = calculate_liquid_balances(ledger, config);
        Self {
            balances: balance_cards(&summary),
            months: selector.grid(),
            spending: SpendingView::build(ledger, selector.selected(), &config.savings_category),
            preview: preview_rows(ledger),
        }
    }
}

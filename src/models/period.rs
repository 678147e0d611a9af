use chrono::{Datelike, Month, NaiveDate};

/// Calendar order, used for the month selector grid.
pub(crate) const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// The grouping period of a date. Only the month counts, so January 2024 and
/// January 2025 land in the same period.
pub(crate) fn period_of(date: NaiveDate) -> Month {
    MONTHS[date.month0() as usize]
}

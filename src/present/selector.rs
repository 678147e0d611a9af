use chrono::Month;

use crate::models::MONTHS;

/// One cell of the 12-month selector grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MonthButton {
    pub(crate) month: Month,
    pub(crate) available: bool,
    pub(crate) selected: bool,
}

/// The month the user is looking at. Owned by the renderer and kept across
/// refreshes; the aggregator only ever receives its current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PeriodSelector {
    available: Vec<Month>,
    selected: Option<Month>,
}

impl PeriodSelector {
    /// Starts on the first available month.
    pub(crate) fn new(available: Vec<Month>) -> Self {
        let selected = available.first().copied();
        Self {
            available,
            selected,
        }
    }

    /// Swap in a fresh list of months after a reload. The current selection
    /// survives if its month still has data.
    pub(crate) fn reconcile(&mut self, available: Vec<Month>) {
        self.selected = match self.selected {
            Some(m) if available.contains(&m) => Some(m),
            _ => available.first().copied(),
        };
        self.available = available;
    }

    pub(crate) fn selected(&self) -> Option<Month> {
        self.selected
    }

    #[cfg(test)]
    pub(crate) fn available(&self) -> &[Month] {
        &self.available
    }

    pub(crate) fn is_available(&self, month: Month) -> bool {
        self.available.contains(&month)
    }

    /// Months without data can't be selected; returns whether it took.
    pub(crate) fn select(&mut self, month: Month) -> bool {
        if self.is_available(month) {
            self.selected = Some(month);
            true
        } else {
            false
        }
    }

    pub(crate) fn select_next(&mut self) {
        self.step(1);
    }

    pub(crate) fn select_prev(&mut self) {
        self.step(-1);
    }

    /// Move through available months in calendar order, wrapping around.
    fn step(&mut self, delta: isize) {
        let ordered: Vec<Month> = MONTHS
            .iter()
            .copied()
            .filter(|m| self.is_available(*m))
            .collect();
        if ordered.is_empty() {
            return;
        }
        let len = ordered.len() as isize;
        let next = match self.selected.and_then(|s| ordered.iter().position(|m| *m == s)) {
            Some(idx) => (idx as isize + delta).rem_euclid(len),
            None => 0,
        };
        self.selected = Some(ordered[next as usize]);
    }

    pub(crate) fn grid(&self) -> Vec<MonthButton> {
        MONTHS
            .iter()
            .map(|&month| MonthButton {
                month,
                available: self.is_available(month),
                selected: self.selected == Some(month),
            })
            .collect()
    }
}

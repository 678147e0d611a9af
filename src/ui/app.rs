use crate::ledger::{BalanceConfig, LedgerCache};
use crate::present::{DashboardView, PeriodSelector};
use crate::source::SheetSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Data,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Data]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Data => write!(f, "Data Preview"),
        }
    }
}

/// What the last load produced. A failure replaces the whole dashboard; stale
/// numbers are never shown next to an error.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LoadState {
    Loading,
    Ready(DashboardView),
    Failed(String),
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) show_help: bool,
    pub(crate) status_message: String,
    pub(crate) source_label: String,
    pub(crate) balance_config: BalanceConfig,

    /// Selected month, kept across refreshes.
    pub(crate) selector: Option<PeriodSelector>,
    pub(crate) state: LoadState,

    // Data preview
    pub(crate) preview_index: usize,
    pub(crate) preview_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(balance_config: BalanceConfig, source_label: String) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            show_help: false,
            status_message: String::new(),
            source_label,
            balance_config,
            selector: None,
            state: LoadState::Loading,
            preview_index: 0,
            preview_scroll: 0,
            visible_rows: 20,
        }
    }

    /// Rebuild the view from the cache, loading if the cache is empty.
    pub(crate) fn refresh<S: SheetSource>(&mut self, cache: &mut LedgerCache<S>) {
        match cache.get_or_load() {
            Ok(ledger) => {
                let available = ledger.available_periods();
                let selector = self
                    .selector
                    .get_or_insert_with(|| PeriodSelector::new(available.clone()));
                selector.reconcile(available);
                let view = DashboardView::build(ledger, &self.balance_config, selector);
                if self.preview_index >= view.preview.len() {
                    self.preview_index = view.preview.len().saturating_sub(1);
                    self.preview_scroll = self.preview_scroll.min(self.preview_index);
                }
                self.state = LoadState::Ready(view);
            }
            Err(e) => {
                let err = anyhow::Error::new(e);
                tracing::error!(error = %format!("{err:#}"), "ledger load failed");
                self.state = LoadState::Failed(format!("{err:#}"));
            }
        }
    }

    /// Drop the cached ledger and load it again from the source.
    pub(crate) fn reload<S: SheetSource>(&mut self, cache: &mut LedgerCache<S>) {
        cache.invalidate();
        self.refresh(cache);
        if cache.is_loaded() {
            self.set_status("Data refreshed");
        } else {
            self.set_status("Refresh failed");
        }
    }

    pub(crate) fn select_next_month<S: SheetSource>(&mut self, cache: &mut LedgerCache<S>) {
        if let Some(selector) = self.selector.as_mut() {
            selector.select_next();
            self.refresh(cache);
        }
    }

    pub(crate) fn select_prev_month<S: SheetSource>(&mut self, cache: &mut LedgerCache<S>) {
        if let Some(selector) = self.selector.as_mut() {
            selector.select_prev();
            self.refresh(cache);
        }
    }

    pub(crate) fn view(&self) -> Option<&DashboardView> {
        match &self.state {
            LoadState::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub(crate) fn preview_len(&self) -> usize {
        self.view().map_or(0, |v| v.preview.len())
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

use super::{load_ledger, Ledger, LoadError, LoadSettings};
use crate::source::SheetSource;

/// Single-entry ledger cache. Entries never expire on their own; callers
/// drop them with [`LedgerCache::invalidate`].
pub(crate) struct LedgerCache<S> {
    source: S,
    settings: LoadSettings,
    entry: Option<Ledger>,
}

impl<S: SheetSource> LedgerCache<S> {
    pub(crate) fn new(source: S, settings: LoadSettings) -> Self {
        Self {
            source,
            settings,
            entry: None,
        }
    }

    /// Return the cached ledger, loading it first if needed. A failed load
    /// leaves the cache empty.
    pub(crate) fn get_or_load(&mut self) -> Result<&Ledger, LoadError> {
        let ledger = match self.entry.take() {
            Some(ledger) => ledger,
            None => {
                tracing::info!(source = %self.source.describe(), "loading ledger");
                load_ledger(&self.source, &self.settings)?
            }
        };
        let ledger: &Ledger = self.entry.insert(ledger);
        Ok(ledger)
    }

    pub(crate) fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            tracing::info!("ledger cache invalidated");
        }
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.entry.is_some()
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;

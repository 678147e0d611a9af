use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("budgetdash=info"))
}

/// Log to stderr. Used by the one-shot CLI commands.
pub(crate) fn init_stderr() {
    TRACING_INIT.call_once(|| {
        fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
    });
}

/// Log to a file so the terminal dashboard's screen stays clean.
pub(crate) fn init_file(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    TRACING_INIT.call_once(|| {
        fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    });
    Ok(())
}

mod config;
mod ledger;
mod logging;
mod models;
mod present;
mod run;
mod source;
mod ui;

use anyhow::{Context, Result};
use std::path::PathBuf;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config_path, args) = split_config_flag(args)?;

    if args.is_empty() {
        logging::init_file(&log_path()?)?;
    } else {
        logging::init_stderr();
    }

    let settings = config::load(config_path.as_deref())?;

    match args.len() {
        0 => run::as_tui(&settings),
        _ => run::as_cli(&args, &settings),
    }
}

/// Pull `--config <path>` or `--config=<path>` out of the argument list.
fn split_config_flag(args: Vec<String>) -> Result<(Option<PathBuf>, Vec<String>)> {
    let mut config = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" || arg == "-c" {
            let path = iter
                .next()
                .ok_or_else(|| anyhow::anyhow!("--config needs a file path"))?;
            config = Some(PathBuf::from(path));
        } else if let Some(path) = arg.strip_prefix("--config=") {
            config = Some(PathBuf::from(path));
        } else {
            rest.push(arg);
        }
    }
    Ok((config, rest))
}

fn log_path() -> Result<PathBuf> {
    let dirs = config::project_dirs()?;
    let data_dir = dirs.data_local_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("budgetdash.log"))
}

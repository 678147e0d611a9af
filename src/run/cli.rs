use anyhow::{Context, Result};
use chrono::Month;

use crate::config::Settings;
use crate::ledger::{load_ledger, Ledger};
use crate::present::{balance_cards, preview_rows, PeriodSelector, SpendingView};
use crate::ui::util::truncate;

pub(crate) fn as_cli(args: &[String], settings: &Settings) -> Result<()> {
    match args[0].as_str() {
        "balances" | "b" => cli_balances(settings),
        "spending" | "s" => cli_spending(&args[1..], settings),
        "months" | "m" => cli_months(settings),
        "preview" | "p" => cli_preview(settings),
        "config" => {
            print!("{}", settings.to_yaml()?);
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budgetdash {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("budgetdash - liquid balances and monthly spending from a spreadsheet ledger");
    println!();
    println!("Usage: budgetdash [--config <file>] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch the interactive dashboard");
    println!("  balances                      Print liquid balances per method");
    println!("  spending [Month]              Print spending by category for a month");
    println!("                                (default: first month with data)");
    println!("  months                        List months that have data");
    println!("  preview                       Print every loaded ledger row");
    println!("  config                        Print the effective configuration");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Config file: --config, ${}, or the per-user config dir", crate::config::CONFIG_ENV);
}

fn load(settings: &Settings) -> Result<Ledger> {
    let source = settings.open_source()?;
    let ledger = load_ledger(&*source, &settings.load_settings())
        .with_context(|| format!("Failed to load ledger from {}", source.describe()))?;
    Ok(ledger)
}

fn cli_balances(settings: &Settings) -> Result<()> {
    let ledger = load(settings)?;
    let summary = crate::ledger::calculate_liquid_balances(&ledger, &settings.balance_config()?);

    println!("Liquid Balances");
    println!("{}", "─".repeat(40));
    for card in balance_cards(&summary) {
        if card.label == "Total" {
            println!("{}", "─".repeat(40));
        }
        println!("  {:<12} {:>16}", card.label, card.value);
    }
    Ok(())
}

fn cli_spending(args: &[String], settings: &Settings) -> Result<()> {
    let requested = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| {
            a.parse::<Month>()
                .map_err(|_| anyhow::anyhow!("Unknown month: {a}"))
        })
        .transpose()?;

    let ledger = load(settings)?;
    let mut selector = PeriodSelector::new(ledger.available_periods());
    let selected = match requested {
        // A month without data still gets its own (empty) breakdown.
        Some(month) if !selector.select(month) => Some(month),
        _ => selector.selected(),
    };
    let view = SpendingView::build(&ledger, selected, &settings.balance_config()?.savings_category);

    println!("{}", view.title());
    println!("{}", "─".repeat(40));
    match &view {
        SpendingView::Breakdown { rows, chart, .. } => {
            for (row, point) in rows.iter().zip(chart) {
                println!(
                    "  {:<24} {:>12} {:>5.1}%",
                    truncate(&row.category, 24),
                    row.total_spent,
                    point.share
                );
            }
        }
        _ => {
            if let Some(msg) = view.message() {
                println!("  {msg}");
            }
        }
    }
    Ok(())
}

fn cli_months(settings: &Settings) -> Result<()> {
    let ledger = load(settings)?;
    let months = ledger.available_periods();
    if months.is_empty() {
        println!("No months with data");
        return Ok(());
    }
    for month in months {
        let count = ledger.in_period(month).count();
        println!("  {:<12} {count} rows", month.name());
    }
    Ok(())
}

fn cli_preview(settings: &Settings) -> Result<()> {
    let ledger = load(settings)?;
    if ledger.is_empty() {
        println!("The ledger has no rows");
        return Ok(());
    }

    println!(
        "{:<10} {:>12}  {:<28} {:<18} {:<14} Method",
        "Date", "Amount", "Description", "Paid To", "Category"
    );
    println!("{}", "─".repeat(95));
    for row in preview_rows(&ledger) {
        println!(
            "{:<10} {:>12}  {:<28} {:<18} {:<14} {}",
            row.date,
            row.amount,
            truncate(&row.description, 28),
            truncate(&row.paid_to, 18),
            truncate(&row.category, 14),
            row.method,
        );
    }
    println!();
    println!("{} rows", ledger.len());
    Ok(())
}

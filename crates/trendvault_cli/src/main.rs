//! CLI smoke entry point.
//!
//! # Responsibility
//! - Build a seeded store from environment configuration.
//! - Print board summaries and optional search hit counts for quick local
//!   sanity checks.

use log::info;
use std::process::ExitCode;
use trendvault_core::{core_version, filter_items, init_logging, CoreConfig, TrendStore};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("trendvault: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let config = CoreConfig::from_env().map_err(|err| err.to_string())?;
    if let Some(log_dir) = config.log_dir() {
        let log_dir = log_dir
            .to_str()
            .ok_or_else(|| format!("log dir `{}` is not UTF-8", log_dir.display()))?;
        init_logging(config.log_level(), log_dir)?;
    }

    let store = TrendStore::seeded(config.seed());
    info!(
        "event=cli_start module=cli status=ok items={} boards={}",
        store.items().len(),
        store.boards().len()
    );

    println!("trendvault_core version={}", core_version());
    println!(
        "items={} boards={} tags={}",
        store.items().len(),
        store.boards().len(),
        store.tags_in_use().len()
    );
    for board in store.boards_sorted() {
        println!(
            "board sort_order={} items={} title={}",
            board.sort_order,
            store.items_in_board(board.id).len(),
            board.title
        );
    }

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if !query.trim().is_empty() {
        let hits = filter_items(store.items(), &query);
        println!("query={:?} hits={}", query.trim(), hits.len());
    }
    Ok(())
}

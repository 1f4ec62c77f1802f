#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use std::io::{self, Write};
use tally::helpers::{config, counter, input, logging, reader};
use tracing::info;

fn main() -> Result<()> {
    logging::init();

    let config = config::read().context("failed to load configuration")?;

    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let filename = input::next_line(&mut stdin)?;
    let rank: i64 = input::next_value(&mut stdin)?;

    let titles = reader::titles(&filename, &config)
        .with_context(|| format!("failed to read titles from {}", filename))?;
    info!("Loaded {} titles.", titles.len());

    let mut list = counter::count_titles(&titles, &config);
    let entries = list
        .rank_query(rank)
        .with_context(|| format!("no word at rank {}", rank))?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    for entry in entries {
        writeln!(stdout, "{}", entry)?;
    }

    Ok(())
}

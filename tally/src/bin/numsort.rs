#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use std::io;
use tally::helpers::{input, logging, reader};
use tally_algorithm::linked::LinkedList;
use tracing::info;

fn main() -> Result<()> {
    logging::init();

    let filename = input::next_line(&mut io::stdin().lock())?;
    let numbers = reader::numbers(&filename)
        .with_context(|| format!("failed to read numbers from {}", filename))?;

    let mut list = LinkedList::new();
    for number in numbers {
        list.push_front(number);
    }
    list.sort_desc_by_key(|number| *number);
    info!("Sorted {} numbers.", list.len());

    println!("{}", list);

    Ok(())
}

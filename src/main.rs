//! Address Book - demo entry point
//!
//! Builds a small address book, edits and deletes entries, and prints the
//! rendered book to stdout after each step. Logs go to stderr.

use address_book::{AddressBook, Config, Record};
use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL when both are set
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let stdout = io::stdout();
    run(&config, &mut stdout.lock())
}

/// Replay the walkthrough, writing each rendering to `out`.
fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    let mut book = AddressBook::new();

    let mut john = Record::new("John")?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane")?;
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    write_book(config, &book, out)?;

    let john = book.find_mut("John").context("John should be in the book")?;
    john.edit_phone("1234567890", "1112223333")?;
    writeln!(out, "{}", john)?;

    if let Some(phone) = john.find_phone("5555555555") {
        writeln!(out, "{}: {}", john.name(), phone)?;
    }

    book.delete("Jane")?;
    write_book(config, &book, out)?;

    Ok(())
}

fn write_book(config: &Config, book: &AddressBook, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", book)?;
    if config.demo_verbose {
        info!(records = book.len(), "Rendered address book");
    }
    Ok(())
}

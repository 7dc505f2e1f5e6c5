//! Main entry point for the bookid CLI application.
//!
//! Prints the ISBN declared by each EPUB given on the command line and,
//! on request, looks it up in the bibliographic catalog.

use anyhow::{Result, bail};
use clap::Parser;
use std::io;
use tracing::error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use bookid::catalog::{CatalogClient, CatalogConfig, VolumeLookup, VolumesResponse};
use bookid::{BookRecord, Cli, isbn, parse_epub, parse_epub_from_reader};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(cli.log_level()).into())
                .from_env_lossy(),
        )
        .init();

    if cli.check {
        return check_isbns(&cli.inputs);
    }

    let catalog = if cli.lookup {
        Some(CatalogClient::new(CatalogConfig {
            base_url: cli.catalog_url.clone(),
            api_key: cli.api_key.clone(),
            ..CatalogConfig::default()
        })?)
    } else {
        None
    };

    // Keep going after a bad input; report the count at the end
    let mut failed = 0usize;
    for input in &cli.inputs {
        let lookup = catalog.as_ref().map(|c| c as &dyn VolumeLookup);
        if let Err(e) = process_input(input, &cli, lookup).await {
            error!("{input}: {e:#}");
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} of {} inputs could not be processed", cli.inputs.len());
    }

    Ok(())
}

/// Parse one EPUB and print its ISBN, identifiers and catalog matches.
async fn process_input(input: &str, cli: &Cli, catalog: Option<&dyn VolumeLookup>) -> Result<()> {
    let book = if Cli::is_stdin(input) {
        parse_epub_from_reader(io::stdin().lock())?
    } else {
        parse_epub(input)?
    };

    if cli.list {
        print_identifiers(input, &book);
    }

    let Some(record) = book.isbn_record() else {
        if !cli.list {
            println!("{input}: no ISBN found");
        }
        return Ok(());
    };

    let compact = isbn::normalize(&record.value);
    if !cli.list {
        let shown = if cli.raw { &record.value } else { &compact };
        println!("{input}: {shown}");
    }

    if let Some(catalog) = catalog {
        let volumes = catalog.lookup_isbn(&compact).await?;
        print_volumes(&volumes);
    }

    Ok(())
}

/// Print every identifier record, marking the signal that made it an ISBN.
fn print_identifiers(input: &str, book: &BookRecord) {
    println!("{input}:");
    if book.identifiers().is_empty() {
        println!("  (no identifiers)");
        return;
    }

    for (i, record) in book.identifiers().iter().enumerate() {
        let signal = isbn::classify(record)
            .map(|s| format!("  [isbn: {s}]"))
            .unwrap_or_default();
        println!(
            "  {:>2}. id={:<16} scheme={:<8} {}{}",
            i + 1,
            display_or_dash(&record.id),
            display_or_dash(&record.scheme),
            record.value,
            signal
        );
    }
}

fn display_or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

/// Print the volumes returned by the catalog.
fn print_volumes(volumes: &VolumesResponse) {
    if volumes.items.is_empty() {
        println!("  no catalog entries");
        return;
    }

    for volume in &volumes.items {
        let info = &volume.volume_info;
        println!("  Title:    {}", info.title);
        if !info.authors.is_empty() {
            println!("  Authors:  {}", info.authors.join(", "));
        }
        if !info.language.is_empty() {
            println!("  Language: {}", info.language);
        }
        for id in &info.industry_identifiers {
            println!("  {:<9} {}", format!("{}:", id.kind), id.identifier);
        }
        if let Some(cover) = info.cover() {
            println!("  Cover:    {cover}");
        }
    }
}

/// Validate each input as an ISBN; fail if any is invalid.
fn check_isbns(inputs: &[String]) -> Result<()> {
    let mut invalid = 0usize;
    for input in inputs {
        match isbn::check(input) {
            Some(kind) => println!("{input}: valid {kind}"),
            None => {
                println!("{input}: invalid");
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        bail!("{invalid} of {} ISBNs are invalid", inputs.len());
    }

    Ok(())
}

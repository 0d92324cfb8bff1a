use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lantern::{score, search, SearchIndex, MIN_QUERY_LEN};

mod cli;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Query { index, query } => run_query(&index, &query),
        Commands::Inspect { index } => run_inspect(&index),
    }
}

/// Load an index the loud way.
///
/// In the page, a bad index silently disables search; the CLI exists to
/// debug exactly that situation, so here the failure is an error.
fn load_index(path: &Path) -> anyhow::Result<SearchIndex> {
    SearchIndex::from_path(path)
        .with_context(|| format!("failed to load index from {}", path.display()))
}

fn run_query(path: &Path, query: &str) -> anyhow::Result<()> {
    let index = load_index(path)?;
    let (terms, results) = search(&index, query);

    if terms.is_empty() {
        println!(
            "query too short: searches need at least {} characters",
            MIN_QUERY_LEN
        );
        return Ok(());
    }
    if results.is_empty() {
        println!("no results for \"{}\"", query);
        return Ok(());
    }

    println!("{} result(s) for \"{}\":", results.len(), query);
    for (i, doc) in results.iter().enumerate() {
        println!(
            "{:>3}. [{:>3}] {}  {}  ({})",
            i + 1,
            score(doc, &terms),
            doc.title,
            doc.url,
            doc.date.format("%Y-%m-%d"),
        );
    }
    Ok(())
}

fn run_inspect(path: &Path) -> anyhow::Result<()> {
    let index = load_index(path)?;

    let tags: BTreeSet<&str> = index
        .docs
        .iter()
        .flat_map(|d| d.tags.iter().map(String::as_str))
        .collect();
    let categories: BTreeSet<&str> = index
        .docs
        .iter()
        .flat_map(|d| d.categories.iter().map(String::as_str))
        .collect();

    println!("documents:  {}", index.len());
    println!("tags:       {}", tags.len());
    for tag in &tags {
        println!("  #{}", tag);
    }
    println!("categories: {}", categories.len());
    for category in &categories {
        println!("  {}", category);
    }
    Ok(())
}

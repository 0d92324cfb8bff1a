use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lantern",
    about = "Offline harness for the client-side blog search index",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one query against an index file and print ranked results
    Query {
        /// Path to the JSON document index emitted by the site build
        #[arg(short, long)]
        index: PathBuf,

        /// The query string, exactly as a reader would type it
        query: String,
    },

    /// Print summary statistics for an index file
    Inspect {
        /// Path to the JSON document index emitted by the site build
        index: PathBuf,
    },
}

// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Usage:
//   bacon-number bacon "Footloose (1984 film)" --debug --trail
//   bacon-number --version
// =============================================================================

use clap::{Parser, Subcommand};

use crate::wiki::normalize_topic;

#[derive(Parser, Debug)]
#[command(
    name = "bacon-number",
    version,
    about = "Finds the Bacon Number of a Wikipedia topic",
    long_about = "bacon-number goes wiki-diving from the topic of your choice, following article \
                  links breadth-first until it reaches Kevin Bacon. The number of hops is the \
                  topic's Bacon Number."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Goes wiki-diving from the topic of your choice in search of Bacon. Kevin Bacon.
    ///
    /// Example: bacon-number bacon https://en.wikipedia.org/wiki/Footloose
    Bacon {
        /// Wikipedia topic to start diving from
        ///
        /// Either a URL (https://en.wikipedia.org/wiki/...), a /wiki/ path,
        /// or a topic title. Titles are case sensitive.
        #[arg(value_parser = parse_topic)]
        topic: String,

        /// Displays debugging information upon completion
        #[arg(short, long)]
        debug: bool,

        /// Shows the chain of topics that led to Kevin Bacon
        #[arg(short, long)]
        trail: bool,
    },
}

// Normalizes the topic while parsing, so the rest of the program only ever
// sees canonical identifiers
fn parse_topic(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err("topic must not be empty".to_string());
    }
    Ok(normalize_topic(raw))
}

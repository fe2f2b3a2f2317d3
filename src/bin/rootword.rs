//! Command-line interface for rootword
//! Breaks a word into the roots and suffixes of the configured lexicons and prints the result.
//!
//! Usage:
//!   rootword `<word>`          - Annotated tree (or the configured default mode)
//!   rootword `<word>` tree     - Annotated tree above the word
//!   rootword `<word>` dat      - Tab-separated span, text, meaning rows
//!
//! Lexicon paths and styling come from `rootword.toml` in the working directory, or from
//! the file named by `ROOTWORD_CONFIG`, layered over the built-in defaults.
//! Diagnostics go to stderr; set `RUST_LOG=debug` to trace the scan.

use clap::{Arg, Command};
use rootword::rootword::config::Loader;
use rootword::rootword::formats::OutputMode;
use rootword::rootword::pipeline::Analyzer;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("rootword")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Break a word into classical roots and suffixes")
        .arg_required_else_help(true)
        .arg(
            Arg::new("word")
                .help("The word to analyze")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("mode")
                .help("Output mode (default from configuration: tree)")
                .value_parser(["tree", "dat"])
                .index(2),
        )
        .get_matches();

    let config = Loader::discover().build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    });

    let mode = match matches.get_one::<String>("mode") {
        Some(name) => name.parse::<OutputMode>().unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => config.render.default_mode,
    };

    let word = matches
        .get_one::<String>("word")
        .map(|w| w.trim().to_lowercase())
        .unwrap_or_default();

    let analyzer = Analyzer::from_config(&config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = analyzer
        .render(&word, mode.format_name())
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    print!("{}", output);
}

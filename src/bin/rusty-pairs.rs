//! rusty-pairs CLI - Command-line interface for currency pair lists
//!
//! ## Example Usage
//!
//! ```bash
//! # Parse pairs with an explicit delimiter
//! rusty-pairs parse BTC_USD ETH_USD --delimiter _
//!
//! # Re-render pairs in another format
//! rusty-pairs display btc_usd eth-btc --delimiter / --lower
//!
//! # Compare two pair lists
//! rusty-pairs diff --old BTC_USD,ETH_USD --new BTC_USD,LTC_USD
//!
//! # Drop every pair that trades a given currency
//! rusty-pairs filter BTC_USD ETH_BTC LTC_EUR --exclude btc
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use rusty_pairs::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// rusty-pairs: currency pair parsing and list maintenance
#[derive(Parser)]
#[command(name = "rusty-pairs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Robert Fall")]
#[command(about = "Currency pair parsing and list maintenance", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse raw pairs and show their legs
    Parse {
        /// Raw pair strings
        #[arg(value_name = "PAIRS", required = true)]
        pairs: Vec<String>,

        /// Delimiter between legs (overrides config)
        #[arg(short = 'd', long)]
        delimiter: Option<String>,

        /// Quote token to split on when there is no delimiter
        #[arg(short = 'i', long)]
        index: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Re-render pairs with another delimiter and case
    Display {
        /// Raw pair strings (auto-detected `_`, `-` or 3-letter base)
        #[arg(value_name = "PAIRS", required = true)]
        pairs: Vec<String>,

        /// Output delimiter (overrides config)
        #[arg(short = 'd', long)]
        delimiter: Option<String>,

        /// Render in lowercase
        #[arg(short = 'l', long, conflicts_with = "upper")]
        lower: bool,

        /// Render in uppercase
        #[arg(short = 'u', long)]
        upper: bool,
    },

    /// Show pairs added and removed between two lists
    Diff {
        /// Previous list, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        old: Vec<String>,

        /// Current list, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        new: Vec<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Drop pairs that trade any of the given currencies
    Filter {
        /// Raw pair strings
        #[arg(value_name = "PAIRS", required = true)]
        pairs: Vec<String>,

        /// Currency codes to exclude
        #[arg(short = 'x', long, required = true, num_args = 1..)]
        exclude: Vec<String>,
    },

    /// Find the listed pair matching a target, in the list's own format
    Match {
        /// Pair to look for
        #[arg(value_name = "TARGET")]
        target: String,

        /// Candidate pairs
        #[arg(value_name = "PAIRS", required = true)]
        pairs: Vec<String>,

        /// Require the same leg order
        #[arg(short = 'e', long)]
        exact: bool,
    },
}

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Config {
    #[serde(default)]
    format: PairFormat,
}

impl Config {
    fn load(path: Option<&Path>) -> Self {
        if let Some(config_path) = path {
            if config_path.exists() {
                match fs::read_to_string(config_path) {
                    Ok(contents) => match toml::from_str(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            eprintln!("{} Failed to parse config: {}", "Warning:".yellow(), e);
                        }
                    },
                    Err(e) => {
                        eprintln!("{} Failed to read config: {}", "Warning:".yellow(), e);
                    }
                }
            } else {
                eprintln!(
                    "{} Config file not found: {}",
                    "Warning:".yellow(),
                    config_path.display()
                );
            }
        } else if let Some(default_config) = default_config_path() {
            if default_config.exists() {
                if let Ok(contents) = fs::read_to_string(&default_config) {
                    if let Ok(config) = toml::from_str(&contents) {
                        return config;
                    }
                }
            }
        }

        Config::default()
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".rusty-pairs").join("config.toml"))
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref());
    log::debug!("Using pair format {:?}", config.format);

    if cli.verbose {
        println!(
            "{} v{}",
            "rusty-pairs".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
    }

    let result = match cli.command {
        Commands::Parse {
            pairs,
            delimiter,
            index,
            json,
        } => {
            let format = apply_overrides(config.format, delimiter, index, None);
            parse_pairs(&pairs, &format, json)
        }

        Commands::Display {
            pairs,
            delimiter,
            lower,
            upper,
        } => {
            let uppercase = match (upper, lower) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let format = apply_overrides(config.format, delimiter, None, uppercase);
            display_pairs(&pairs, &format)
        }

        Commands::Diff { old, new, json } => diff_pairs(&old, &new, json),

        Commands::Filter { pairs, exclude } => filter_pairs(&pairs, &exclude),

        Commands::Match {
            target,
            pairs,
            exact,
        } => match_pair(&target, &pairs, exact),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

/// Layers command-line flags over the configured format.
///
/// An explicit `--index` without `--delimiter` clears the configured
/// delimiter, since a non-empty delimiter always takes precedence.
fn apply_overrides(
    mut format: PairFormat,
    delimiter: Option<String>,
    index: Option<String>,
    uppercase: Option<bool>,
) -> PairFormat {
    match (delimiter, index) {
        (Some(delimiter), index) => {
            format.delimiter = delimiter;
            if let Some(index) = index {
                format.index = index;
            }
        }
        (None, Some(index)) => {
            format.delimiter.clear();
            format.index = index;
        }
        (None, None) => {}
    }
    if let Some(uppercase) = uppercase {
        format.uppercase = uppercase;
    }
    format
}

fn parse_all(raw: &[String]) -> Result<Vec<CurrencyPair>> {
    raw.iter()
        .filter(|p| !p.is_empty())
        .map(|p| CurrencyPair::from_string(p))
        .collect()
}

// Command implementations
fn parse_pairs(
    raw: &[String],
    format: &PairFormat,
    json: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let pairs = format.format_pairs(raw)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&pairs)?);
        return Ok(());
    }

    println!("{}", "Parsed Pairs".green().bold());
    println!("{}", "============".green());
    for pair in &pairs {
        println!(
            "  {:<16} {} {:<8} {} {:<8} {} {:?}",
            pair.pair(),
            "first:".bold(),
            pair.first(),
            "second:".bold(),
            pair.second(),
            "delimiter:".bold(),
            pair.delimiter()
        );
    }
    Ok(())
}

fn display_pairs(
    raw: &[String],
    format: &PairFormat,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    for pair in parse_all(raw)? {
        println!("{}", format.render(&pair));
    }
    Ok(())
}

fn diff_pairs(
    old: &[String],
    new: &[String],
    json: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let diff = find_differences(old, new);

    if json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
        return Ok(());
    }

    if diff.is_empty() {
        println!("{}", "No changes".dimmed());
        return Ok(());
    }
    for pair in &diff.added {
        println!("{} {}", "+".green().bold(), pair);
    }
    for pair in &diff.removed {
        println!("{} {}", "-".red().bold(), pair);
    }
    Ok(())
}

fn filter_pairs(
    raw: &[String],
    exclude: &[String],
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let pairs = parse_all(raw)?;
    let kept = remove_by_filters(&pairs, exclude);
    log::info!("Kept {} of {} pairs", kept.len(), pairs.len());
    for pair in pairs_to_strings(&kept) {
        println!("{}", pair);
    }
    Ok(())
}

fn match_pair(
    target: &str,
    raw: &[String],
    exact: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let target = CurrencyPair::from_string(target)?;
    let pairs = parse_all(raw)?;
    match copy_format(&target, &pairs, exact) {
        Some(found) => {
            println!("{} {}", "✓".green().bold(), found);
            Ok(())
        }
        None => Err(format!("No listed pair matches {}", target).into()),
    }
}

//! # Receipt Printer
//!
//! Prices a purchase file and prints the receipt.
//!
//! ## Usage
//! ```bash
//! # Bundled rates, default config location
//! cargo run -p museum-config --bin receipt -- purchases.json
//!
//! # Explicit config and rate file
//! cargo run -p museum-config --bin receipt -- --config ./museum.toml --pricing ./tickets.toml purchases.json
//! ```
//!
//! ## Purchase File
//! ```json
//! [
//!   { "ticketType": "general", "entrantType": "adult", "extras": ["movie", "terrace"] },
//!   { "ticketType": "general", "entrantType": "senior", "extras": ["terrace"] }
//! ]
//! ```
//!
//! The receipt goes to stdout and logs go to stderr. An invalid ticket prints
//! its error (e.g. `Entrant type 'kid' cannot be found.`) and exits with 1.
//! A missing purchases file, or a flag with no value, prints usage and exits
//! with 2.

use std::env;
use std::path::PathBuf;

use museum_config::{load_pricing_table, MuseumConfig};
use museum_core::{Receipt, TicketRequest};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Paths named on the command line.
#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    config_path: Option<PathBuf>,
    pricing_path: Option<PathBuf>,
    purchases_path: PathBuf,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(CliArgs),
    Help,
}

/// Parses `args` (program name first). `Err` means usage should be printed.
fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut config_path: Option<PathBuf> = None;
    let mut pricing_path: Option<PathBuf> = None;
    let mut purchases_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            flag @ ("--config" | "-c" | "--pricing" | "-p") => {
                let value = args
                    .get(i + 1)
                    .map(PathBuf::from)
                    .ok_or_else(|| format!("{} requires a value", flag))?;
                if matches!(flag, "--config" | "-c") {
                    config_path = Some(value);
                } else {
                    pricing_path = Some(value);
                }
                i += 1;
            }
            "--help" | "-h" => return Ok(Command::Help),
            other => purchases_path = Some(PathBuf::from(other)),
        }
        i += 1;
    }

    let purchases_path = purchases_path.ok_or_else(|| "missing purchases file".to_string())?;

    Ok(Command::Run(CliArgs {
        config_path,
        pricing_path,
        purchases_path,
    }))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let cli = match parse_args(&args) {
        Ok(Command::Run(cli)) => cli,
        Ok(Command::Help) => {
            print_usage();
            return Ok(());
        }
        Err(reason) => {
            eprintln!("{}", reason);
            print_usage();
            std::process::exit(2);
        }
    };

    let config = MuseumConfig::load(cli.config_path)?;
    let table = match cli.pricing_path {
        Some(path) => load_pricing_table(&path)?,
        None => config.pricing_table()?,
    };

    let purchases_path = cli.purchases_path;
    info!(?purchases_path, "Reading purchases");
    let purchases: Vec<TicketRequest> =
        serde_json::from_str(&std::fs::read_to_string(&purchases_path)?)?;

    match Receipt::from_purchases(&table, &purchases) {
        Ok(receipt) => {
            println!("{}", receipt.with_header(config.receipt_header()));
            Ok(())
        }
        Err(err) => {
            error!(kind = ?err.kind(), value = %err.value(), "Purchase rejected");
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: receipt [--config <museum.toml>] [--pricing <tickets.json|tickets.toml>] <purchases.json>");
}

/// Logs to stderr so stdout carries only the receipt.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every priced ticket
/// - Default: INFO, with debug output for museum crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,museum_core=debug,museum_config=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_all_flags() {
        let parsed = parse_args(&args(&[
            "receipt",
            "--config",
            "./museum.toml",
            "-p",
            "./tickets.toml",
            "purchases.json",
        ]))
        .unwrap();

        assert_eq!(
            parsed,
            Command::Run(CliArgs {
                config_path: Some(PathBuf::from("./museum.toml")),
                pricing_path: Some(PathBuf::from("./tickets.toml")),
                purchases_path: PathBuf::from("purchases.json"),
            })
        );
    }

    #[test]
    fn test_flag_without_value_is_rejected() {
        let err = parse_args(&args(&["receipt", "purchases.json", "--pricing"])).unwrap_err();
        assert_eq!(err, "--pricing requires a value");

        assert!(parse_args(&args(&["receipt", "purchases.json", "-c"])).is_err());
    }

    #[test]
    fn test_missing_purchases_file() {
        assert!(parse_args(&args(&["receipt"])).is_err());
        assert!(parse_args(&args(&["receipt", "--config", "museum.toml"])).is_err());
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_args(&args(&["receipt", "-h"])), Ok(Command::Help));
    }
}

//! Command-line parsing for the daily rate table generator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the extract/fill code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

const ECB_EXAMPLE: &str = "\
Example: fx-rates ecb-eur --year 2024 --input ./usd-eur.xml --output ./usd-eur-rates-2024.json

  ecb-eur:
    Download the XML file from
    https://www.ecb.europa.eu/stats/policy_and_exchange_rates/euro_reference_exchange_rates/html/eurofxref-graph-usd.en.html
";

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "fx-rates",
    version,
    about = "Convert a central-bank exchange-rate XML series into a dense daily JSON rate table"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands, one per rate source.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate USD/EUR daily rates from an ECB reference-rate XML export.
    #[command(name = "ecb-eur", after_help = ECB_EXAMPLE)]
    EcbEur(GenerateArgs),
}

/// Common options for rate table generation.
#[derive(Debug, Parser, Clone)]
pub struct GenerateArgs {
    /// Year for which the rates are being created (2000-2100).
    #[arg(long)]
    pub year: i32,

    /// An input file matching the specified source.
    #[arg(long)]
    pub input: PathBuf,

    /// An output JSON file to write the rates to.
    #[arg(long)]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_ecb_eur_subcommand() {
        let cli = Cli::try_parse_from([
            "fx-rates", "ecb-eur", "--year", "2024", "--input", "in.xml", "--output", "out.json",
        ])
        .unwrap();

        let Command::EcbEur(args) = cli.command;
        assert_eq!(args.year, 2024);
        assert_eq!(args.input, PathBuf::from("in.xml"));
        assert_eq!(args.output, PathBuf::from("out.json"));
    }

    #[test]
    fn rejects_missing_required_flags() {
        assert!(Cli::try_parse_from(["fx-rates", "ecb-eur", "--year", "2024"]).is_err());
        assert!(Cli::try_parse_from(["fx-rates"]).is_err());
    }
}

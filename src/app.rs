//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments into a `GeneratorConfig`
//! - runs the decode → extract → fill pipeline
//! - prints the fill report
//! - writes the JSON output file

use clap::Parser;
use clap::error::ErrorKind;

use crate::cli::{Cli, Command, GenerateArgs};
use crate::domain::{GeneratorConfig, Year};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `fx-rates` binary.
pub fn run() -> Result<(), AppError> {
    // Missing or invalid arguments must exit with code 1; clap's default is
    // 2, so we parse explicitly and map usage errors ourselves. Help and
    // version requests are not errors.
    let cli = match Cli::try_parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(AppError::usage(err.to_string())),
    };

    match cli.command {
        Command::EcbEur(args) => handle_generate(&args),
    }
}

fn handle_generate(args: &GenerateArgs) -> Result<(), AppError> {
    let config = generator_config_from_args(args)?;
    let run = pipeline::run_generate(&config)?;

    if let Some(message) = crate::report::format_fill_report(&run.fill, config.year) {
        println!("\n{message}");
    }

    crate::io::export::write_rates_json(&config.output, &run.table)?;
    println!("\nOutput file written to {}\n", config.output.display());

    Ok(())
}

/// Validate CLI arguments into the run configuration.
///
/// The year check happens here, before any file is touched.
pub fn generator_config_from_args(args: &GenerateArgs) -> Result<GeneratorConfig, AppError> {
    Ok(GeneratorConfig {
        year: Year::new(args.year)?,
        input: args.input.clone(),
        output: args.output.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn config_construction_validates_the_year() {
        let args = GenerateArgs {
            year: 2024,
            input: PathBuf::from("in.xml"),
            output: PathBuf::from("out.json"),
        };
        let config = generator_config_from_args(&args).unwrap();
        assert_eq!(config.year.get(), 2024);
        assert_eq!(config.input, PathBuf::from("in.xml"));

        let bad = GenerateArgs { year: 1999, ..args };
        let err = generator_config_from_args(&bad).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}

//! rstlit - Literate programming with reStructuredText.
//!
//! This binary provides the CLI interface to the rstlit converters,
//! reading from files or stdin and writing to files or stdout.

mod cli;
mod diff;
mod streams;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::io::Write;

use rstlit_config::{Config, ResolvedOptions};
use rstlit_core::{Direction, Result, RstlitError};
use rstlit_parser::convert;

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Done,
    /// `--diff` found differences
    Differences,
}

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("rstlit v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(Outcome::Done) => {}
        Ok(Outcome::Differences) => std::process::exit(1),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<Outcome> {
    let config = Config::load_with_override(cli.config.as_deref())?;

    let infile = match cli.infile.as_deref() {
        Some(infile) => infile.to_string(),
        None if atty::is(atty::Stream::Stdin) => return Err(RstlitError::MissingInput),
        None => streams::STDIO.to_string(),
    };

    let direction = cli.direction(&infile, &config);
    let outfile = cli.outfile(&infile, direction, &config);
    let language = cli.language(&infile, &outfile, direction, &config);
    let options = cli.converter_options(&language, &config).resolve_with(&config)?;
    debug!(
        "{} {} -> {} ({}, comment string {:?})",
        direction, infile, outfile, options.language, options.comment_string
    );

    let input = streams::read_input(&infile)?;

    if cli.diff {
        return report_round_trip(&input, &infile, direction, &options);
    }

    let conversion = convert(&input, direction, &options)?;
    if !conversion.warnings.is_empty() {
        info!("{} formatting repairs in {}", conversion.warnings.len(), infile);
    }

    streams::check_overwrite(&infile, &outfile, cli.overwrite_mode(&config))?;
    streams::write_output(&outfile, &conversion.output)?;

    if cli.replace && infile != streams::STDIO && outfile != streams::STDIO {
        streams::replace_with_backup(&infile)?;
    }

    Ok(Outcome::Done)
}

/// Print the round-trip diff of the input.
fn report_round_trip(
    input: &str,
    infile: &str,
    direction: Direction,
    options: &ResolvedOptions,
) -> Result<Outcome> {
    let result = diff::round_trip(input, direction, options)?;
    let mut stdout = std::io::stdout().lock();

    match diff::unified_diff(input, &result, infile) {
        Some(report) => {
            stdout.write_all(report.as_bytes())?;
            Ok(Outcome::Differences)
        }
        None => {
            writeln!(stdout, "{}: no differences found", infile)?;
            Ok(Outcome::Done)
        }
    }
}

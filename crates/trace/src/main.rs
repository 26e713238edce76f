//! Run a sticky positioning scenario and print the resulting inline styles.
//!
//! Useful for checking what the positioner does with geometry captured from a
//! live editor without starting one.

use anyhow::{Result, anyhow};
use log::info;
use serde_json::to_string_pretty;
use std::env;
use std::io::{Write as _, stderr, stdout};
use std::path::PathBuf;
use sticky_positioner::{Scenario, StickyOptions};

/// Parsed command line.
#[derive(Debug, PartialEq)]
struct Args {
    scenario: PathBuf,
    passes: usize,
    options: Option<PathBuf>,
}

/// Parse arguments (without the program name).
///
/// # Errors
/// Returns an error for unknown flags, missing values, or a missing scenario.
fn parse_args(args: Vec<String>) -> Result<Args> {
    let mut scenario: Option<PathBuf> = None;
    let mut passes = 1;
    let mut options = None;
    let mut remaining = args.into_iter();
    while let Some(arg) = remaining.next() {
        match arg.as_str() {
            "--passes" => {
                let value = remaining
                    .next()
                    .ok_or_else(|| anyhow!("--passes needs a value"))?;
                passes = value
                    .parse::<usize>()
                    .map_err(|err| anyhow!("invalid --passes '{value}': {err}"))?;
            }
            "--options" => {
                let value = remaining
                    .next()
                    .ok_or_else(|| anyhow!("--options needs a path"))?;
                options = Some(PathBuf::from(value));
            }
            flag if flag.starts_with("--") => {
                return Err(anyhow!("unknown flag '{flag}'"));
            }
            _ => {
                if scenario.is_some() {
                    return Err(anyhow!("only one scenario file may be given"));
                }
                scenario = Some(PathBuf::from(&arg));
            }
        }
    }
    let scenario = scenario.ok_or_else(|| anyhow!("missing scenario file"))?;
    Ok(Args {
        scenario,
        passes,
        options,
    })
}

/// Load, run and render a scenario as pretty JSON.
///
/// # Errors
/// Returns an error if a file cannot be loaded or the report cannot be
/// serialized.
fn run(args: &Args) -> Result<String> {
    let mut scenario = Scenario::load(&args.scenario)?;
    if let Some(path) = &args.options {
        scenario.options = StickyOptions::load(path)?;
    }
    info!(
        target: "sticky_trace",
        "running {} for {} pass(es)",
        args.scenario.display(),
        args.passes
    );
    let report = scenario.run(args.passes);
    Ok(to_string_pretty(&report)?)
}

/// Print usage information to stderr.
fn print_usage() {
    drop(writeln!(
        stderr(),
        "Usage:\n  sticky_trace <SCENARIO.json> [--passes <N>] [--options <OPTIONS.json>]"
    ));
}

/// Main entry point for the sticky_trace CLI tool.
///
/// # Errors
/// Returns an error if argument parsing, loading or printing fails.
fn main() -> Result<()> {
    env_logger::init();
    let args = match parse_args(env::args().skip(1).collect()) {
        Ok(args) => args,
        Err(err) => {
            print_usage();
            return Err(err);
        }
    };
    let rendered = run(&args)?;
    writeln!(stdout(), "{rendered}")?;
    Ok(())
}

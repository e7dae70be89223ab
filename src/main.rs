//! treetext entry point.
//!
//! Chains the full pipeline of the `treetext` command-line tool:
//!
//! 1. **CLI parsing**: turn the arguments into a `ParseResult`
//! 2. **Configuration validation**: resolve the format, check conflicts,
//!    fill in derived fields
//! 3. **Rendering**: one depth-first pass producing the tree string
//! 4. **Output**: stdout and/or file, plus the optional stderr report
//!
//! # Exit codes
//!
//! - `0`: success
//! - `1`: argument or configuration error
//! - `2`: scan or pattern error
//! - `3`: output error
//!
//! File: src/main.rs
//! Date: 2026-02-18

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]
#![allow(dead_code)]

mod cli;
mod config;
mod error;
mod output;
mod render;
mod scan;

use std::process::ExitCode;

use cli::{CliParser, ParseResult};
use error::{CliError, TreetextError};

/// Exit code: success.
const EXIT_SUCCESS: u8 = 0;

/// Exit code: argument or configuration error.
const EXIT_CLI_ERROR: u8 = 1;

/// Exit code: scan or pattern error.
const EXIT_SCAN_ERROR: u8 = 2;

/// Exit code: output error.
const EXIT_OUTPUT_ERROR: u8 = 3;

/// Program entry point.
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            let code = error_to_exit_code(&e);
            print_error(&e);
            ExitCode::from(code)
        }
    }
}

/// Runs the full pipeline: parse, validate, render, output.
fn run() -> Result<(), TreetextError> {
    let parse_result = CliParser::from_env().parse()?;

    match parse_result {
        ParseResult::Help => {
            cli::print_help();
            Ok(())
        }
        ParseResult::Version => {
            cli::print_version();
            Ok(())
        }
        ParseResult::ListFormats { formats_file } => {
            cli::print_formats(formats_file.as_deref())
        }
        ParseResult::Config(config) => {
            // Already validated inside parse().
            let render_result = render::render(&config)?;
            output::execute_output(&render_result, &config)?;
            Ok(())
        }
    }
}

/// Maps an error to its exit code.
fn error_to_exit_code(err: &TreetextError) -> u8 {
    match err {
        TreetextError::Cli(_) | TreetextError::Config(_) => EXIT_CLI_ERROR,
        TreetextError::Scan(_) | TreetextError::Match(_) => EXIT_SCAN_ERROR,
        TreetextError::Output(_) => EXIT_OUTPUT_ERROR,
    }
}

/// Prints an error to stderr, with a hint where one helps.
fn print_error(err: &TreetextError) {
    let prefix = match err {
        TreetextError::Cli(_) => "CLI error",
        TreetextError::Config(_) => "Config error",
        TreetextError::Scan(_) => "Scan error",
        TreetextError::Match(_) => "Match error",
        TreetextError::Output(_) => "Output error",
    };

    eprintln!("treetext: {}: {}", prefix, err);

    match err {
        TreetextError::Cli(CliError::UnknownOption { .. }) => {
            eprintln!("Hint: run `treetext --help` to list available options");
        }
        TreetextError::Cli(CliError::MultiplePaths { .. }) => {
            eprintln!("Hint: only one target path can be specified.");
        }
        TreetextError::Config(config::ConfigError::UnknownFormat { .. }) => {
            eprintln!("Hint: run `treetext --list-formats` to list available formats");
        }
        _ => {}
    }
}

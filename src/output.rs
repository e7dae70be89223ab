//! Output module: delivers the rendered tree to its destinations.
//!
//! Responsibilities:
//!
//! - Write the rendered string to stdout (default, suppressed by `--silent`)
//! - Write the exact rendered string to a file when `--output` is given
//! - Print the entry-count summary to stderr when `--report` is given
//!
//! The file copy is byte-exact. The stdout copy gets one trailing newline
//! when the rendered string does not already end with the configured line
//! break, so the shell prompt never lands mid-line.
//!
//! File: src/output.rs
//! Date: 2026-02-18

#![forbid(unsafe_code)]

use std::fs;

use crate::config::Config;
use crate::error::OutputError;
use crate::render::RenderResult;

// ============================================================================
// Output Execution
// ============================================================================

/// Delivers a render result according to the output options.
///
/// # Arguments
///
/// * `result` - The rendered tree and its statistics
/// * `config` - Validated configuration (output options and line break)
///
/// # Errors
///
/// Returns `OutputError::WriteFailed` when the output file cannot be
/// written.
pub fn execute_output(result: &RenderResult, config: &Config) -> Result<(), OutputError> {
    if let Some(path) = &config.output.output_path {
        fs::write(path, &result.content).map_err(|e| OutputError::WriteFailed {
            path: path.clone(),
            source: e,
        })?;
    }

    if !config.output.silent {
        print!("{}", result.content);
        if !result.content.ends_with('\n') {
            println!();
        }
    }

    if config.render.show_report {
        eprintln!("{}", report_line(result));
    }

    Ok(())
}

/// Formats the stderr summary line.
fn report_line(result: &RenderResult) -> String {
    format!(
        "{} directories, {} files in {:.3}s",
        result.directory_count,
        result.file_count,
        result.duration.as_secs_f64()
    )
}

// ============================================================================
// Unit Tests
// ============================================================================

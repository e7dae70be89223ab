//! Error handling module: defines unified error types for treetext.
//!
//! This module provides a hierarchical error type system covering:
//!
//! - **CLI parsing errors**: argument format, conflicts, unknown options
//! - **Configuration errors**: re-exported from `config` module for API consistency
//! - **Scan errors**: filesystem access, permissions, path not found
//! - **Match errors**: glob pattern syntax, gitignore rule parsing
//! - **Output errors**: stdout and file writing failures
//!
//! All error types implement `std::error::Error` with proper error chain support.
//!
//! There is deliberately no render-time error class: mask validation happens
//! before traversal (`ConfigError::MissingMask`), and traversal itself can
//! only fail with scan or match errors.
//!
//! File: src/error.rs
//! Date: 2026-02-18

#![forbid(unsafe_code)]

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use crate::config::ConfigError;

/// Top-level error type for treetext.
///
/// Aggregates all sub-module errors as the unified error return type for the
/// program's main entry point. Supports automatic conversion from all sub-error
/// types via the `From` trait.
///
/// # Examples
///
/// ```
/// use treetext::error::{TreetextError, CliError};
///
/// fn example_cli_error() -> Result<(), TreetextError> {
///     Err(CliError::UnknownOption {
///         option: "--frobnicate".to_string(),
///     }.into())
/// }
///
/// let err = example_cli_error().unwrap_err();
/// assert!(err.to_string().contains("--frobnicate"));
/// ```
///
/// ```
/// use treetext::error::{TreetextError, ScanError};
/// use std::path::PathBuf;
///
/// let scan_err = ScanError::PathNotFound {
///     path: PathBuf::from("/missing"),
/// };
/// let treetext_err: TreetextError = scan_err.into();
/// assert!(matches!(treetext_err, TreetextError::Scan(_)));
/// ```
#[derive(Debug, Error)]
pub enum TreetextError {
    /// CLI parsing error.
    #[error(transparent)]
    Cli(#[from] CliError),

    /// Configuration validation error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Directory scan error.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Pattern matching error.
    #[error(transparent)]
    Match(#[from] MatchError),

    /// Output error.
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Result type alias for treetext operations.
///
/// A convenience alias for `Result<T, TreetextError>` used throughout the crate.
///
/// # Examples
///
/// ```
/// use treetext::error::TreetextResult;
///
/// fn operation() -> TreetextResult<i32> {
///     Ok(42)
/// }
///
/// assert_eq!(operation().unwrap(), 42);
/// ```
pub type TreetextResult<T> = Result<T, TreetextError>;

/// CLI argument parsing errors.
///
/// Represents errors that occur during command-line argument parsing, including:
/// - Unknown options
/// - Missing required argument values
/// - Invalid argument value formats
/// - Duplicate options
///
/// # Examples
///
/// ```
/// use treetext::error::CliError;
///
/// let err = CliError::MissingValue {
///     option: "--level".to_string(),
/// };
/// assert!(err.to_string().contains("--level"));
/// assert!(err.to_string().contains("requires a value"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Unknown option was provided.
    #[error("Unknown option: {option}")]
    UnknownOption {
        /// The unrecognized option name.
        option: String,
    },

    /// Option is missing its required value.
    #[error("Option {option} requires a value.")]
    MissingValue {
        /// The option name.
        option: String,
    },

    /// Option value has invalid format.
    #[error("Invalid value '{value}' for option {option}: {reason}")]
    InvalidValue {
        /// The option name.
        option: String,
        /// The provided value.
        value: String,
        /// The reason for invalidity.
        reason: String,
    },

    /// Option was specified more than once.
    #[error("Option {option} was specified more than once.")]
    DuplicateOption {
        /// The option name.
        option: String,
    },

    /// Multiple paths were specified when only one is allowed.
    #[error("Only one path can be specified, but multiple were provided: {paths:?}")]
    MultiplePaths {
        /// All discovered paths.
        paths: Vec<String>,
    },

    /// Generic parsing error.
    #[error("Argument parsing failed: {message}")]
    ParseError {
        /// Error message.
        message: String,
    },
}

/// Directory scanning errors.
///
/// Represents errors that occur while listing a directory level, including
/// filesystem access issues and permission problems. Any of these aborts the
/// entire render: partial output is never returned.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use treetext::error::ScanError;
///
/// let err = ScanError::PermissionDenied {
///     path: PathBuf::from("/protected"),
/// };
/// assert!(err.to_string().contains("Permission denied"));
/// ```
#[derive(Debug, Error)]
pub enum ScanError {
    /// The specified path does not exist.
    #[error("Path not found: {path}")]
    PathNotFound {
        /// The non-existent path.
        path: PathBuf,
    },

    /// Permission was denied for the path.
    #[error("Permission denied: {path}")]
    PermissionDenied {
        /// The inaccessible path.
        path: PathBuf,
    },

    /// Failed to read directory contents.
    #[error("Failed to read directory: {path}")]
    ReadDirFailed {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Creates an appropriate scan error from an IO error and path.
    ///
    /// Automatically selects the appropriate error variant based on the IO error kind.
    ///
    /// # Arguments
    ///
    /// * `err` - The IO error to convert.
    /// * `path` - The path associated with the error.
    ///
    /// # Returns
    ///
    /// A `ScanError` variant appropriate for the IO error kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::{self, ErrorKind};
    /// use std::path::PathBuf;
    /// use treetext::error::ScanError;
    ///
    /// let io_err = io::Error::new(ErrorKind::NotFound, "not found");
    /// let scan_err = ScanError::from_io_error(io_err, PathBuf::from("/missing"));
    /// assert!(matches!(scan_err, ScanError::PathNotFound { .. }));
    /// ```
    ///
    /// ```
    /// use std::io::{self, ErrorKind};
    /// use std::path::PathBuf;
    /// use treetext::error::ScanError;
    ///
    /// let io_err = io::Error::new(ErrorKind::PermissionDenied, "denied");
    /// let scan_err = ScanError::from_io_error(io_err, PathBuf::from("/protected"));
    /// assert!(matches!(scan_err, ScanError::PermissionDenied { .. }));
    /// ```
    #[must_use]
    pub fn from_io_error(err: io::Error, path: PathBuf) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::ReadDirFailed { path, source: err },
        }
    }
}

/// Pattern matching errors.
///
/// Represents errors in exclusion pattern compilation and gitignore rule
/// parsing.
///
/// # Examples
///
/// ```
/// use treetext::error::MatchError;
///
/// let err = MatchError::InvalidPattern {
///     pattern: "[invalid".to_string(),
///     reason: "unclosed bracket".to_string(),
/// };
/// assert!(err.to_string().contains("[invalid"));
/// assert!(err.to_string().contains("Invalid pattern"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Invalid glob pattern syntax.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The invalid pattern string.
        pattern: String,
        /// The reason for invalidity.
        reason: String,
    },

    /// Failed to build gitignore rules.
    #[error("Failed to build gitignore rules: {reason}")]
    GitignoreBuildError {
        /// The reason for failure.
        reason: String,
    },
}

impl MatchError {
    /// Creates a `MatchError` from an exclusion pattern and a reason.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetext::error::MatchError;
    ///
    /// let err = MatchError::from_glob_error("[bad", "unclosed bracket");
    /// assert!(matches!(err, MatchError::InvalidPattern { .. }));
    /// ```
    #[must_use]
    pub fn from_glob_error(pattern: &str, reason: &str) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<glob::PatternError> for MatchError {
    fn from(err: glob::PatternError) -> Self {
        Self::InvalidPattern {
            pattern: err.msg.to_string(),
            reason: format!("position {}", err.pos),
        }
    }
}

impl From<ignore::Error> for MatchError {
    fn from(err: ignore::Error) -> Self {
        Self::GitignoreBuildError {
            reason: err.to_string(),
        }
    }
}

/// Output errors.
///
/// Represents failures while delivering the rendered text to its target.
///
/// # Examples
///
/// ```
/// use std::io::{self, ErrorKind};
/// use std::path::PathBuf;
/// use treetext::error::OutputError;
///
/// let err = OutputError::WriteFailed {
///     path: PathBuf::from("/readonly/tree.txt"),
///     source: io::Error::new(ErrorKind::PermissionDenied, "denied"),
/// };
/// assert!(err.to_string().contains("tree.txt"));
/// ```
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to write the output file.
    #[error("Failed to write output file: {path}")]
    WriteFailed {
        /// The output file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    // ------------------------------------------------------------------------
    // CliError
    // ------------------------------------------------------------------------

    #[test]
    fn should_display_unknown_option_with_name() {
        let err = CliError::UnknownOption {
            option: "--bogus".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown option: --bogus");
    }

    #[test]
    fn should_display_missing_value_with_option() {
        let err = CliError::MissingValue {
            option: "--level".to_string(),
        };
        assert!(err.to_string().contains("--level"));
        assert!(err.to_string().contains("requires a value"));
    }

    #[test]
    fn should_display_invalid_value_with_reason() {
        let err = CliError::InvalidValue {
            option: "--max-files".to_string(),
            value: "abc".to_string(),
            reason: "must be a non-negative integer".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("--max-files"));
        assert!(msg.contains("abc"));
        assert!(msg.contains("non-negative"));
    }

    #[test]
    fn should_compare_cli_errors_by_value() {
        let a = CliError::DuplicateOption {
            option: "--format".to_string(),
        };
        let b = CliError::DuplicateOption {
            option: "--format".to_string(),
        };
        assert_eq!(a, b);
    }

    // ------------------------------------------------------------------------
    // ScanError
    // ------------------------------------------------------------------------

    #[test]
    fn should_map_not_found_io_error() {
        let io_err = io::Error::new(ErrorKind::NotFound, "gone");
        let err = ScanError::from_io_error(io_err, PathBuf::from("/missing"));
        assert!(matches!(err, ScanError::PathNotFound { .. }));
        assert!(err.to_string().contains("/missing"));
    }

    #[test]
    fn should_map_permission_denied_io_error() {
        let io_err = io::Error::new(ErrorKind::PermissionDenied, "denied");
        let err = ScanError::from_io_error(io_err, PathBuf::from("/protected"));
        assert!(matches!(err, ScanError::PermissionDenied { .. }));
    }

    #[test]
    fn should_map_other_io_error_to_read_dir_failed() {
        let io_err = io::Error::other("weird");
        let err = ScanError::from_io_error(io_err, PathBuf::from("/dir"));
        assert!(matches!(err, ScanError::ReadDirFailed { .. }));
    }

    #[test]
    fn should_expose_source_of_read_dir_failure() {
        use std::error::Error as _;

        let err = ScanError::ReadDirFailed {
            path: PathBuf::from("/dir"),
            source: io::Error::other("inner"),
        };
        assert!(err.source().is_some());
    }

    // ------------------------------------------------------------------------
    // MatchError
    // ------------------------------------------------------------------------

    #[test]
    fn should_build_match_error_from_glob_parts() {
        let err = MatchError::from_glob_error("[oops", "unclosed bracket");
        assert!(err.to_string().contains("[oops"));
        assert!(err.to_string().contains("unclosed bracket"));
    }

    #[test]
    fn should_convert_pattern_error_from_glob_crate() {
        let pattern_err = glob::Pattern::new("a[").unwrap_err();
        let err: MatchError = pattern_err.into();
        assert!(matches!(err, MatchError::InvalidPattern { .. }));
    }

    // ------------------------------------------------------------------------
    // Top-level conversions
    // ------------------------------------------------------------------------

    #[test]
    fn should_wrap_cli_error_into_top_level() {
        let err: TreetextError = CliError::ParseError {
            message: "oops".to_string(),
        }
        .into();
        assert!(matches!(err, TreetextError::Cli(_)));
    }

    #[test]
    fn should_wrap_scan_error_into_top_level() {
        let err: TreetextError = ScanError::PathNotFound {
            path: PathBuf::from("/nope"),
        }
        .into();
        assert!(matches!(err, TreetextError::Scan(_)));
        assert!(err.to_string().contains("/nope"));
    }

    #[test]
    fn should_wrap_output_error_into_top_level() {
        let err: TreetextError = OutputError::WriteFailed {
            path: PathBuf::from("/out.txt"),
            source: io::Error::other("disk full"),
        }
        .into();
        assert!(matches!(err, TreetextError::Output(_)));
    }
}

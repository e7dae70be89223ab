//! Command-line argument parsing module.
//!
//! Implements the argument parser of the `treetext` binary. Two option
//! styles are supported:
//!
//! - Unix short options (`-f`), case-sensitive
//! - GNU long options (`--format`), case-sensitive, with `--option=value`
//!
//! Parsing produces a validated [`Config`] for the scan, render, and output
//! modules, or one of the informational results (help, version, format
//! listing).
//!
//! # Examples
//!
//! ```no_run
//! use treetext::cli::{CliParser, ParseResult};
//!
//! let args = vec!["/repo".to_string(), "--format".to_string(), "markdown".to_string()];
//! let parser = CliParser::new(args);
//! match parser.parse() {
//!     Ok(ParseResult::Config(config)) => println!("{:?}", config),
//!     Ok(other) => println!("{:?}", other),
//!     Err(e) => eprintln!("error: {}", e),
//! }
//! ```
//!
//! File: src/cli.rs
//! Date: 2026-02-18

#![forbid(unsafe_code)]

use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

use crate::config::{available_formats, Config};
use crate::error::{CliError, TreetextError};

// ============================================================================
// Parse Result
// ============================================================================

/// Outcome of command-line parsing.
///
/// # Examples
///
/// ```no_run
/// use treetext::cli::{CliParser, ParseResult};
///
/// let parser = CliParser::new(vec!["--help".to_string()]);
/// match parser.parse() {
///     Ok(ParseResult::Help) => println!("help requested"),
///     Ok(ParseResult::Version) => println!("version requested"),
///     Ok(ParseResult::ListFormats { .. }) => println!("format listing requested"),
///     Ok(ParseResult::Config(c)) => println!("{:?}", c),
///     Err(e) => eprintln!("error: {}", e),
/// }
/// ```
#[derive(Debug)]
pub enum ParseResult {
    /// A validated configuration; a tree should be rendered.
    Config(Config),
    /// The user asked for help text.
    Help,
    /// The user asked for version text.
    Version,
    /// The user asked for the list of available formats.
    ListFormats {
        /// Formats file given alongside `--list-formats`, if any.
        formats_file: Option<PathBuf>,
    },
}

// ============================================================================
// Argument Definitions
// ============================================================================

/// Argument kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgKind {
    /// A flag taking no value.
    Flag,
    /// An option requiring one value.
    Value,
}

/// One supported argument.
struct ArgDef {
    /// Canonical name, used for duplicate detection and error messages.
    canonical: &'static str,
    /// Argument kind.
    kind: ArgKind,
    /// Unix short forms (`-x`), case-sensitive.
    short_patterns: &'static [&'static str],
    /// GNU long forms (`--xxx`), case-sensitive.
    long_patterns: &'static [&'static str],
}

/// All supported arguments, in help-text order.
const ARG_DEFINITIONS: &[ArgDef] = &[
    // Informational
    ArgDef {
        canonical: "help",
        kind: ArgKind::Flag,
        short_patterns: &["-h"],
        long_patterns: &["--help"],
    },
    ArgDef {
        canonical: "version",
        kind: ArgKind::Flag,
        short_patterns: &["-v"],
        long_patterns: &["--version"],
    },
    ArgDef {
        canonical: "list-formats",
        kind: ArgKind::Flag,
        short_patterns: &[],
        long_patterns: &["--list-formats"],
    },
    // Format selection
    ArgDef {
        canonical: "format",
        kind: ArgKind::Value,
        short_patterns: &["-f"],
        long_patterns: &["--format"],
    },
    ArgDef {
        canonical: "formats-file",
        kind: ArgKind::Value,
        short_patterns: &["-c"],
        long_patterns: &["--formats-file"],
    },
    // Traversal limits and filters
    ArgDef {
        canonical: "level",
        kind: ArgKind::Value,
        short_patterns: &["-L"],
        long_patterns: &["--level"],
    },
    ArgDef {
        canonical: "max-dirs",
        kind: ArgKind::Value,
        short_patterns: &[],
        long_patterns: &["--max-dirs"],
    },
    ArgDef {
        canonical: "max-files",
        kind: ArgKind::Value,
        short_patterns: &[],
        long_patterns: &["--max-files"],
    },
    ArgDef {
        canonical: "dirs-only",
        kind: ArgKind::Flag,
        short_patterns: &["-d"],
        long_patterns: &["--dirs-only"],
    },
    ArgDef {
        canonical: "exclude",
        kind: ArgKind::Value,
        short_patterns: &["-x"],
        long_patterns: &["--exclude"],
    },
    ArgDef {
        canonical: "gitignore",
        kind: ArgKind::Flag,
        short_patterns: &["-g"],
        long_patterns: &["--gitignore"],
    },
    // Rendering tweaks
    ArgDef {
        canonical: "base-path",
        kind: ArgKind::Value,
        short_patterns: &[],
        long_patterns: &["--base-path"],
    },
    ArgDef {
        canonical: "no-base-path",
        kind: ArgKind::Flag,
        short_patterns: &[],
        long_patterns: &["--no-base-path"],
    },
    ArgDef {
        canonical: "line-break",
        kind: ArgKind::Value,
        short_patterns: &[],
        long_patterns: &["--line-break"],
    },
    // Output control
    ArgDef {
        canonical: "output",
        kind: ArgKind::Value,
        short_patterns: &["-o"],
        long_patterns: &["--output"],
    },
    ArgDef {
        canonical: "silent",
        kind: ArgKind::Flag,
        short_patterns: &["-s"],
        long_patterns: &["--silent"],
    },
    ArgDef {
        canonical: "report",
        kind: ArgKind::Flag,
        short_patterns: &["-e"],
        long_patterns: &["--report"],
    },
];

// ============================================================================
// Matched Argument
// ============================================================================

/// A successfully matched argument.
struct MatchedArg {
    /// The definition it matched.
    definition: &'static ArgDef,
    /// The consumed value, for value-taking options.
    value: Option<String>,
}

// ============================================================================
// Parser
// ============================================================================

/// Command-line argument parser.
///
/// The positional path may appear anywhere among the options; at most one
/// is accepted, and its absence means the current directory.
///
/// # Examples
///
/// ```no_run
/// use treetext::cli::CliParser;
///
/// // From the process arguments
/// let parser = CliParser::from_env();
///
/// // Or from an explicit list
/// let parser = CliParser::new(vec!["--dirs-only".to_string()]);
/// ```
pub struct CliParser {
    /// Arguments to parse.
    args: Vec<String>,
    /// Current parse position.
    position: usize,
    /// Canonical names already seen, for duplicate detection.
    seen_canonical_names: HashSet<String>,
}

impl CliParser {
    /// Creates a parser from an argument list (program name excluded).
    ///
    /// # Examples
    ///
    /// ```
    /// use treetext::cli::CliParser;
    ///
    /// let parser = CliParser::new(vec!["--level".to_string(), "3".to_string()]);
    /// ```
    #[must_use]
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            position: 0,
            seen_canonical_names: HashSet::new(),
        }
    }

    /// Creates a parser from the process arguments, skipping the program
    /// name.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use treetext::cli::CliParser;
    ///
    /// let result = CliParser::from_env().parse();
    /// ```
    #[must_use]
    pub fn from_env() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::new(args)
    }

    /// Parses the arguments and validates the resulting configuration.
    ///
    /// Help and version requests short-circuit immediately; a format
    /// listing request is honored after the whole line is read, so that a
    /// `--formats-file` given in any position is picked up.
    ///
    /// # Errors
    ///
    /// - `CliError::UnknownOption` for an unrecognized option
    /// - `CliError::MissingValue` for a value option without a value
    /// - `CliError::InvalidValue` for an unparseable value
    /// - `CliError::DuplicateOption` for a repeated non-accumulative option
    /// - `CliError::MultiplePaths` for more than one positional path
    /// - `CliError::ParseError` wrapping configuration validation failures
    pub fn parse(mut self) -> Result<ParseResult, CliError> {
        let mut config = Config::default();
        let mut collected_paths: Vec<String> = Vec::new();
        let mut list_formats = false;

        // Options that may be given more than once.
        const ACCUMULATIVE_OPTIONS: &[&str] = &["exclude"];

        while self.position < self.args.len() {
            let current_arg = self.args[self.position].clone();

            if Self::is_option_like(&current_arg) {
                let matched = self.try_match_argument(&current_arg)?;

                if !ACCUMULATIVE_OPTIONS.contains(&matched.definition.canonical) {
                    self.register_canonical_name(matched.definition.canonical)?;
                }

                match matched.definition.canonical {
                    "help" => return Ok(ParseResult::Help),
                    "version" => return Ok(ParseResult::Version),
                    "list-formats" => list_formats = true,
                    _ => Self::apply_to_config(&mut config, &matched)?,
                }
            } else {
                // Anything that does not look like an option is a path.
                collected_paths.push(current_arg);
            }

            self.position += 1;
        }

        if list_formats {
            return Ok(ParseResult::ListFormats {
                formats_file: config.formats_file,
            });
        }

        self.validate_paths(&collected_paths, &mut config)?;

        let validated_config = config.validate().map_err(|e| CliError::ParseError {
            message: e.to_string(),
        })?;

        Ok(ParseResult::Config(validated_config))
    }

    /// Returns whether the string looks like an option.
    ///
    /// Only a leading `-` counts; paths routinely start with `/`.
    fn is_option_like(arg: &str) -> bool {
        arg.len() > 1 && arg.starts_with('-')
    }

    /// Matches an option string against the known definitions.
    fn try_match_argument(&mut self, arg: &str) -> Result<MatchedArg, CliError> {
        for def in ARG_DEFINITIONS {
            if let Some(matched) = self.try_match_definition(arg, def)? {
                return Ok(matched);
            }
        }
        Err(CliError::UnknownOption {
            option: arg.to_string(),
        })
    }

    /// Matches an option string against one definition.
    fn try_match_definition(
        &mut self,
        arg: &str,
        def: &'static ArgDef,
    ) -> Result<Option<MatchedArg>, CliError> {
        for pattern in def.short_patterns {
            if arg == *pattern {
                let value = self.consume_value_if_required(def, arg)?;
                return Ok(Some(MatchedArg {
                    definition: def,
                    value,
                }));
            }
        }

        for pattern in def.long_patterns {
            if arg == *pattern {
                let value = self.consume_value_if_required(def, arg)?;
                return Ok(Some(MatchedArg {
                    definition: def,
                    value,
                }));
            }

            // --option=value syntax
            let equals_prefix = format!("{pattern}=");
            if arg.starts_with(&equals_prefix) && def.kind == ArgKind::Value {
                let value = arg[equals_prefix.len()..].to_string();
                return Ok(Some(MatchedArg {
                    definition: def,
                    value: Some(value),
                }));
            }
        }

        Ok(None)
    }

    /// Consumes the next argument as this option's value, if one is
    /// required.
    fn consume_value_if_required(
        &mut self,
        def: &ArgDef,
        arg: &str,
    ) -> Result<Option<String>, CliError> {
        if def.kind == ArgKind::Flag {
            return Ok(None);
        }

        let next_position = self.position + 1;
        if next_position >= self.args.len() {
            return Err(CliError::MissingValue {
                option: arg.to_string(),
            });
        }

        let next_arg = &self.args[next_position];
        if Self::is_option_like(next_arg) {
            return Err(CliError::MissingValue {
                option: arg.to_string(),
            });
        }

        self.position += 1;
        Ok(Some(next_arg.clone()))
    }

    /// Registers a canonical name, rejecting duplicates.
    fn register_canonical_name(&mut self, canonical: &str) -> Result<(), CliError> {
        if !self.seen_canonical_names.insert(canonical.to_string()) {
            return Err(CliError::DuplicateOption {
                option: canonical.to_string(),
            });
        }
        Ok(())
    }

    /// Applies one matched argument to the configuration.
    fn apply_to_config(config: &mut Config, matched: &MatchedArg) -> Result<(), CliError> {
        let canonical = matched.definition.canonical;

        match canonical {
            // Format selection
            "format" => config.format_name = Self::require_value(matched)?.to_string(),
            "formats-file" => {
                config.formats_file = Some(PathBuf::from(Self::require_value(matched)?));
            }

            // Traversal limits and filters
            "level" => {
                config.scan.max_depth = Some(Self::parse_count(matched)?);
            }
            "max-dirs" => {
                config.scan.max_dirs = Some(Self::parse_count(matched)?);
            }
            "max-files" => {
                config.scan.max_files = Some(Self::parse_count(matched)?);
            }
            "dirs-only" => config.scan.dirs_only = true,
            "exclude" => {
                config
                    .matching
                    .exclude_patterns
                    .push(Self::require_value(matched)?.to_string());
            }
            "gitignore" => config.scan.respect_gitignore = true,

            // Rendering tweaks
            "base-path" => {
                config.render.base_path_override =
                    Some(PathBuf::from(Self::require_value(matched)?));
            }
            "no-base-path" => config.render.no_base_path = true,
            "line-break" => {
                config.render.line_break_override =
                    Some(Self::require_value(matched)?.to_string());
            }

            // Output control
            "output" => {
                config.output.output_path = Some(PathBuf::from(Self::require_value(matched)?));
            }
            "silent" => config.output.silent = true,
            "report" => config.render.show_report = true,

            _ => {}
        }

        Ok(())
    }

    /// Returns the value of a value-taking option.
    fn require_value(matched: &MatchedArg) -> Result<&str, CliError> {
        matched.value.as_deref().ok_or_else(|| CliError::MissingValue {
            option: format!("--{}", matched.definition.canonical),
        })
    }

    /// Parses a numeric option value (0 means unlimited).
    fn parse_count(matched: &MatchedArg) -> Result<usize, CliError> {
        let value = Self::require_value(matched)?;
        value.parse().map_err(|_| CliError::InvalidValue {
            option: matched.definition.canonical.to_string(),
            value: value.to_string(),
            reason: "must be a non-negative integer".to_string(),
        })
    }

    /// Applies the positional path arguments.
    fn validate_paths(&self, paths: &[String], config: &mut Config) -> Result<(), CliError> {
        match paths.len() {
            0 => {
                config.path_explicitly_set = false;
                Ok(())
            }
            1 => {
                config.root_path = PathBuf::from(&paths[0]);
                config.path_explicitly_set = true;
                Ok(())
            }
            _ => Err(CliError::MultiplePaths {
                paths: paths.to_vec(),
            }),
        }
    }
}

// ============================================================================
// Help, Version, Format Listing
// ============================================================================

/// Returns the help text.
///
/// # Examples
///
/// ```
/// use treetext::cli::help_text;
///
/// let help = help_text();
/// assert!(help.contains("treetext"));
/// assert!(help.contains("--help"));
/// ```
#[must_use]
pub fn help_text() -> &'static str {
    r#"treetext: Render directory trees as text through configurable masks.

Usage:
  treetext [<PATH>] [<OPTIONS>...]

Options:
  --help, -h                  Show help information
  --version, -v               Show version information
  --list-formats              List the available formats
  --format, -f <NAME>         Select the output format (default: ascii)
  --formats-file, -c <FILE>   Load extra formats (.toml, .json, .yml, .yaml)
  --level, -L <N>             Limit recursion depth (0 = unlimited)
  --max-dirs <N>              Limit directories listed per level (0 = unlimited)
  --max-files <N>             Limit files listed per level (0 = unlimited)
  --dirs-only, -d             List directories only
  --exclude, -x <PATTERN>     Exclude entries matching the glob (repeatable)
  --gitignore, -g             Respect .gitignore files
  --base-path <PATH>          Strip this prefix from rendered paths
  --no-base-path              Render full paths
  --line-break <TEXT>         Override the format's line-break marker
  --output, -o <FILE>         Write the rendered tree to a file
  --silent, -s                No stdout output (use with --output)
  --report, -e                Print entry counts and timing to stderr"#
}

/// Returns the version text.
///
/// # Examples
///
/// ```
/// use treetext::cli::version_text;
///
/// let version = version_text();
/// assert!(version.contains("treetext version"));
/// ```
#[must_use]
pub fn version_text() -> &'static str {
    concat!(
        "treetext version ",
        env!("CARGO_PKG_VERSION"),
        "\n\nRender directory trees as text through configurable masks."
    )
}

/// Prints the help text to stdout.
///
/// # Examples
///
/// ```no_run
/// use treetext::cli::print_help;
///
/// print_help();
/// ```
pub fn print_help() {
    println!("{}", help_text());
}

/// Prints the version text to stdout.
///
/// # Examples
///
/// ```no_run
/// use treetext::cli::print_version;
///
/// print_version();
/// ```
pub fn print_version() {
    println!("{}", version_text());
}

/// Prints the available format names to stdout, one per line.
///
/// # Errors
///
/// Returns a `ConfigError` wrapped in `TreetextError` when the formats
/// file cannot be loaded.
pub fn print_formats(formats_file: Option<&Path>) -> Result<(), TreetextError> {
    let formats = available_formats(formats_file)?;
    for name in formats.keys() {
        println!("{name}");
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================

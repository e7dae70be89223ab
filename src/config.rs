//! Configuration module: defines the full `Config` and its sub-structures.
//!
//! This module is the **single source of truth** for user intent. All
//! command-line arguments are parsed by the CLI layer and folded into one
//! `Config` structure; the scanning, rendering, and output layers depend only
//! on this configuration and never touch the raw arguments again.
//!
//! It also owns the tree-format data model:
//!
//! - **`TreeFormat`**: masks, indent strings, before/after text, line break
//! - **`Masks` / `MaskSet`**: per-role text templates with `#0`/`#1`/`#2` tokens
//! - **Built-in presets**: `ascii`, `markdown`, `latex`, `html`
//! - **Formats file**: user-defined formats in TOML, JSON, or YAML,
//!   dispatched by file extension
//!
//! File: src/config.rs
//! Date: 2026-02-18

#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Configuration validation error.
///
/// Produced when the combination of user-supplied options is invalid or
/// cannot be satisfied at run time.
///
/// # Examples
///
/// ```
/// use treetext::config::ConfigError;
///
/// let err = ConfigError::UnknownFormat {
///     name: "dot".to_string(),
///     available: "ascii, html, latex, markdown".to_string(),
/// };
/// assert!(err.to_string().contains("dot"));
/// assert!(err.to_string().contains("ascii"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Two options conflict with each other.
    #[error("Option conflict: {opt_a} and {opt_b} cannot be used together ({reason})")]
    ConflictingOptions {
        /// First conflicting option.
        opt_a: String,
        /// Second conflicting option.
        opt_b: String,
        /// The reason for the conflict.
        reason: String,
    },

    /// `--silent` was given without an output file.
    #[error("--silent requires --output (otherwise nothing would be emitted)")]
    SilentWithoutOutput,

    /// Root path does not exist or is unusable.
    #[error("Invalid path: {path} ({reason})")]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason it is invalid.
        reason: String,
    },

    /// The requested format name is not defined.
    #[error("Unknown format '{name}' (available: {available})")]
    UnknownFormat {
        /// The requested format name.
        name: String,
        /// Comma-separated list of defined format names.
        available: String,
    },

    /// The formats file could not be read.
    #[error("Failed to read formats file: {path} ({reason})")]
    FormatsFileUnreadable {
        /// The formats file path.
        path: PathBuf,
        /// The underlying failure.
        reason: String,
    },

    /// The formats file could not be parsed.
    #[error("Failed to parse formats file: {path} ({reason})")]
    FormatsFileParse {
        /// The formats file path.
        path: PathBuf,
        /// Parser error details.
        reason: String,
    },

    /// The formats file extension is not a supported store format.
    #[error(
        "Cannot infer formats file format: {path} (supported extensions: .toml, .json, .yml, .yaml)"
    )]
    UnknownFormatsFileFormat {
        /// The formats file path.
        path: PathBuf,
    },

    /// A required mask slot is missing or empty.
    #[error("Format '{format}' is missing required mask '{slot}'")]
    MissingMask {
        /// The format name.
        format: String,
        /// The missing mask slot, e.g. `file.default`.
        slot: String,
    },
}

/// Result type for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

// ============================================================================
// Formats File Store
// ============================================================================

/// Store format of a user formats file, derived from its extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use treetext::config::FormatsFileKind;
///
/// let kind = FormatsFileKind::from_extension(Path::new("formats.json"));
/// assert_eq!(kind, Some(FormatsFileKind::Json));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatsFileKind {
    /// TOML store.
    Toml,
    /// JSON store.
    Json,
    /// YAML store.
    Yaml,
}

impl FormatsFileKind {
    /// Derives the store format from a file extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use treetext::config::FormatsFileKind;
    ///
    /// assert_eq!(FormatsFileKind::from_extension(Path::new("f.toml")), Some(FormatsFileKind::Toml));
    /// assert_eq!(FormatsFileKind::from_extension(Path::new("f.yml")), Some(FormatsFileKind::Yaml));
    /// assert_eq!(FormatsFileKind::from_extension(Path::new("f.yaml")), Some(FormatsFileKind::Yaml));
    /// assert_eq!(FormatsFileKind::from_extension(Path::new("f.ini")), None);
    /// ```
    #[must_use]
    pub fn from_extension(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_ascii_lowercase().as_str() {
                "toml" => Some(Self::Toml),
                "json" => Some(Self::Json),
                "yml" | "yaml" => Some(Self::Yaml),
                _ => None,
            })
    }
}

// ============================================================================
// Mask Data Model
// ============================================================================

/// Text templates for one entry type (file or directory).
///
/// The `first` and `last` variants are optional refinements of `default`.
/// Each template may contain the tokens `#0` (display level), `#1` (entry
/// name), and `#2` (adjusted path), substituted once each.
///
/// # Examples
///
/// ```
/// use treetext::config::MaskSet;
///
/// let set = MaskSet {
///     default: "┣ #1".to_string(),
///     first: None,
///     last: Some("┗ #1".to_string()),
/// };
/// assert!(set.last.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MaskSet {
    /// Template used when no role-specific variant applies.
    pub default: String,
    /// Template for the first entry of a sibling group.
    #[serde(default)]
    pub first: Option<String>,
    /// Template for the last entry of a sibling group.
    #[serde(default)]
    pub last: Option<String>,
}

impl MaskSet {
    /// Creates a mask set with only a default template.
    #[must_use]
    pub fn uniform(default: &str) -> Self {
        Self {
            default: default.to_string(),
            first: None,
            last: None,
        }
    }
}

/// The complete mask mapping of a format.
///
/// # Examples
///
/// ```
/// use treetext::config::{Masks, MaskSet};
///
/// let masks = Masks {
///     root: Some("#1/".to_string()),
///     file: MaskSet::uniform("#1"),
///     directory: MaskSet::uniform("#1/"),
/// };
/// assert!(masks.root.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Masks {
    /// Template for the tree's starting node. When absent, the root falls
    /// through the directory mask set as a first-in-group entry.
    #[serde(default)]
    pub root: Option<String>,
    /// Mask set for file entries (also used by the truncation placeholder).
    pub file: MaskSet,
    /// Mask set for directory entries.
    pub directory: MaskSet,
}

impl Default for Masks {
    fn default() -> Self {
        Self {
            root: None,
            file: MaskSet::uniform(""),
            directory: MaskSet::uniform(""),
        }
    }
}

// ============================================================================
// Tree Format
// ============================================================================

/// Default line break marker used when a format does not set one.
fn default_line_break() -> String {
    "\n".to_string()
}

/// A complete target notation: masks plus indentation and wrapping text.
///
/// Immutable per render call. Loaded from a built-in preset or a user
/// formats file.
///
/// # Examples
///
/// ```
/// use treetext::config::builtin_formats;
///
/// let formats = builtin_formats();
/// let html = formats.get("html").unwrap();
/// assert_eq!(html.line_break, "<br/>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreeFormat {
    /// Literal text emitted before the rendered body.
    #[serde(default)]
    pub before_tree: String,
    /// Literal text emitted after the rendered body.
    #[serde(default)]
    pub after_tree: String,
    /// Indentation unit, repeated once per depth level.
    #[serde(default)]
    pub indent: String,
    /// Replacement for the innermost indent unit when the immediate parent
    /// was the last entry of its sibling group. Keeps a closed branch from
    /// leaving a dangling vertical bar below a closing corner.
    #[serde(default)]
    pub indent_parent_last: Option<String>,
    /// Literal marker emitted between logical lines.
    #[serde(default = "default_line_break")]
    pub line_break: String,
    /// Per-role text templates.
    pub masks: Masks,
}

impl Default for TreeFormat {
    fn default() -> Self {
        Self {
            before_tree: String::new(),
            after_tree: String::new(),
            indent: String::new(),
            indent_parent_last: None,
            line_break: default_line_break(),
            masks: Masks::default(),
        }
    }
}

impl TreeFormat {
    /// Validates that every required mask slot is present and non-empty.
    ///
    /// Called before traversal begins so that a broken format fails fast
    /// instead of producing a half-rendered tree.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingMask` naming the empty slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetext::config::TreeFormat;
    ///
    /// let format = TreeFormat::default();
    /// assert!(format.validate("broken").is_err());
    /// ```
    pub fn validate(&self, name: &str) -> ConfigResult<()> {
        if self.masks.file.default.is_empty() {
            return Err(ConfigError::MissingMask {
                format: name.to_string(),
                slot: "file.default".to_string(),
            });
        }
        if self.masks.directory.default.is_empty() {
            return Err(ConfigError::MissingMask {
                format: name.to_string(),
                slot: "directory.default".to_string(),
            });
        }
        Ok(())
    }
}

/// Returns the built-in format presets, keyed by name.
///
/// - `ascii`: outline-style tree with box-drawing connectors
/// - `markdown`: link-style bullet list
/// - `latex`: `dirtree` notation driven by the level token
/// - `html`: outline-style markup with a `<br/>` line-break marker
///
/// # Examples
///
/// ```
/// use treetext::config::builtin_formats;
///
/// let formats = builtin_formats();
/// assert!(formats.contains_key("ascii"));
/// assert!(formats.contains_key("markdown"));
/// for (name, format) in &formats {
///     assert!(format.validate(name).is_ok());
/// }
/// ```
#[must_use]
pub fn builtin_formats() -> BTreeMap<String, TreeFormat> {
    let mut formats = BTreeMap::new();

    formats.insert(
        "ascii".to_string(),
        TreeFormat {
            indent: "┃ ".to_string(),
            indent_parent_last: Some("  ".to_string()),
            masks: Masks {
                root: Some("#1/".to_string()),
                file: MaskSet {
                    default: "┣ #1".to_string(),
                    first: None,
                    last: Some("┗ #1".to_string()),
                },
                directory: MaskSet {
                    default: "┣ #1/".to_string(),
                    first: None,
                    last: Some("┗ #1/".to_string()),
                },
            },
            ..TreeFormat::default()
        },
    );

    formats.insert(
        "markdown".to_string(),
        TreeFormat {
            indent: "  ".to_string(),
            masks: Masks {
                root: Some("# #1".to_string()),
                file: MaskSet::uniform("* [#1](.#2)"),
                directory: MaskSet::uniform("* [#1](.#2)"),
            },
            ..TreeFormat::default()
        },
    );

    formats.insert(
        "latex".to_string(),
        TreeFormat {
            before_tree: "\\dirtree{%\n".to_string(),
            after_tree: "}".to_string(),
            indent: "  ".to_string(),
            masks: Masks {
                root: Some(".#0 #1 .".to_string()),
                file: MaskSet::uniform(".#0 #1 ."),
                directory: MaskSet::uniform(".#0 #1 ."),
            },
            ..TreeFormat::default()
        },
    );

    formats.insert(
        "html".to_string(),
        TreeFormat {
            indent: "┃ ".to_string(),
            indent_parent_last: Some("&nbsp;&nbsp;".to_string()),
            line_break: "<br/>".to_string(),
            masks: Masks {
                root: Some("<b>#1/</b>".to_string()),
                file: MaskSet {
                    default: "┣ #1".to_string(),
                    first: None,
                    last: Some("┗ #1".to_string()),
                },
                directory: MaskSet {
                    default: "┣ <b>#1/</b>".to_string(),
                    first: None,
                    last: Some("┗ <b>#1/</b>".to_string()),
                },
            },
            ..TreeFormat::default()
        },
    );

    formats
}

/// Loads user-defined formats from a formats file.
///
/// The store format is derived from the file extension. The file holds a
/// map of format name to format body, e.g. in TOML:
///
/// ```toml
/// [plain]
/// indent = "  "
///
/// [plain.masks]
/// root = "#1"
///
/// [plain.masks.file]
/// default = "#1"
///
/// [plain.masks.directory]
/// default = "#1/"
/// ```
///
/// # Errors
///
/// Returns a `ConfigError` when the file cannot be read, its extension is
/// unsupported, or its content does not parse.
pub fn load_formats_file(path: &Path) -> ConfigResult<BTreeMap<String, TreeFormat>> {
    let kind =
        FormatsFileKind::from_extension(path).ok_or_else(|| {
            ConfigError::UnknownFormatsFileFormat {
                path: path.to_path_buf(),
            }
        })?;

    let content = fs::read_to_string(path).map_err(|e| ConfigError::FormatsFileUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let parse_error = |e: String| ConfigError::FormatsFileParse {
        path: path.to_path_buf(),
        reason: e,
    };

    match kind {
        FormatsFileKind::Toml => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
        FormatsFileKind::Json => {
            serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))
        }
        FormatsFileKind::Yaml => {
            serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))
        }
    }
}

/// Returns all defined formats: built-in presets plus any user formats file.
///
/// A file entry with the same name as a built-in preset overrides it.
///
/// # Errors
///
/// Propagates formats-file loading errors.
pub fn available_formats(
    formats_file: Option<&Path>,
) -> ConfigResult<BTreeMap<String, TreeFormat>> {
    let mut formats = builtin_formats();
    if let Some(path) = formats_file {
        formats.extend(load_formats_file(path)?);
    }
    Ok(formats)
}

// ============================================================================
// Option Groups
// ============================================================================

/// Scan options: what gets listed and how far the walk descends.
///
/// All limits treat `None` (or a CLI value of 0) as unlimited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Exclude files entirely; only directories are listed.
    pub dirs_only: bool,
    /// Apply layered `.gitignore` rules while scanning.
    pub respect_gitignore: bool,
    /// Maximum number of directory levels descended past the root's
    /// direct children.
    pub max_depth: Option<usize>,
    /// Maximum directories listed per subtree before truncation.
    pub max_dirs: Option<usize>,
    /// Maximum files listed per subtree before truncation.
    pub max_files: Option<usize>,
}

/// Matching options: name-based exclusion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Glob patterns matched against bare entry names; a match removes the
    /// entry and its entire subtree.
    pub exclude_patterns: Vec<String>,
}

/// Render options: adjustments layered over the selected format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Replaces the format's line-break marker.
    pub line_break_override: Option<String>,
    /// Replaces the derived base path.
    pub base_path_override: Option<PathBuf>,
    /// Disables base-path stripping entirely.
    pub no_base_path: bool,
    /// Print a directory/file count summary to stderr after rendering.
    pub show_report: bool,
}

/// Output options: where the rendered string goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Output file; the rendered string is written verbatim.
    pub output_path: Option<PathBuf>,
    /// Suppress stdout (requires an output file).
    pub silent: bool,
}

// ============================================================================
// Config
// ============================================================================

/// The full treetext configuration.
///
/// Built by the CLI layer, then validated and completed by
/// [`Config::validate`]. After validation, `format` holds the resolved
/// `TreeFormat` and `base_path` the effective strip prefix.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use treetext::config::Config;
///
/// let config = Config::with_root(PathBuf::from("."));
/// assert_eq!(config.format_name, "ascii");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Root path to render from.
    pub root_path: PathBuf,
    /// Whether the path was given explicitly on the command line.
    pub path_explicitly_set: bool,
    /// Name of the requested format.
    pub format_name: String,
    /// Optional user formats file.
    pub formats_file: Option<PathBuf>,
    /// Resolved format (populated by `validate`).
    pub format: TreeFormat,
    /// Effective base path stripped from rendered paths (derived by
    /// `validate`; `None` disables stripping).
    pub base_path: Option<PathBuf>,
    /// Scan options.
    pub scan: ScanOptions,
    /// Matching options.
    pub matching: MatchOptions,
    /// Render options.
    pub render: RenderOptions,
    /// Output options.
    pub output: OutputOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            path_explicitly_set: false,
            format_name: "ascii".to_string(),
            formats_file: None,
            format: TreeFormat::default(),
            base_path: None,
            scan: ScanOptions::default(),
            matching: MatchOptions::default(),
            render: RenderOptions::default(),
            output: OutputOptions::default(),
        }
    }
}

impl Config {
    /// Creates a configuration rooted at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use treetext::config::Config;
    ///
    /// let config = Config::with_root(PathBuf::from("/tmp"));
    /// assert_eq!(config.root_path, PathBuf::from("/tmp"));
    /// ```
    #[must_use]
    pub fn with_root(root_path: PathBuf) -> Self {
        Self {
            root_path,
            ..Self::default()
        }
    }

    /// Validates the configuration and fills in derived fields.
    ///
    /// Steps, in order:
    ///
    /// 1. Option conflict checks
    /// 2. Root path validation and canonicalization
    /// 3. Format resolution (built-ins plus formats file)
    /// 4. Line-break override application
    /// 5. Fail-fast mask validation
    /// 6. Base-path derivation (parent of the root unless overridden)
    /// 7. Limit normalization (0 becomes unlimited)
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` encountered.
    pub fn validate(mut self) -> ConfigResult<Self> {
        // 1. Conflicts
        self.check_conflicts()?;

        // 2. Root path
        self.validate_and_canonicalize_root_path()?;

        // 3. Format resolution
        let formats = available_formats(self.formats_file.as_deref())?;
        let format = formats
            .get(&self.format_name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownFormat {
                name: self.format_name.clone(),
                available: formats.keys().cloned().collect::<Vec<_>>().join(", "),
            })?;
        self.format = format;

        // 4. Line-break override
        if let Some(ref lb) = self.render.line_break_override {
            self.format.line_break = lb.clone();
        }

        // 5. Fail-fast mask validation
        self.format.validate(&self.format_name)?;

        // 6. Base path
        self.base_path = if self.render.no_base_path {
            None
        } else if let Some(ref base) = self.render.base_path_override {
            Some(base.clone())
        } else {
            self.root_path.parent().map(Path::to_path_buf)
        };

        // 7. Limit normalization
        self.scan.max_depth = self.scan.max_depth.filter(|&n| n > 0);
        self.scan.max_dirs = self.scan.max_dirs.filter(|&n| n > 0);
        self.scan.max_files = self.scan.max_files.filter(|&n| n > 0);

        Ok(self)
    }

    /// Checks for mutually exclusive option combinations.
    fn check_conflicts(&self) -> ConfigResult<()> {
        if self.output.silent && self.output.output_path.is_none() {
            return Err(ConfigError::SilentWithoutOutput);
        }

        if self.render.no_base_path && self.render.base_path_override.is_some() {
            return Err(ConfigError::ConflictingOptions {
                opt_a: "--no-base-path".to_string(),
                opt_b: "--base-path".to_string(),
                reason: "cannot both disable and override the base path".to_string(),
            });
        }

        Ok(())
    }

    /// Verifies the root path exists and is a directory, then canonicalizes it.
    fn validate_and_canonicalize_root_path(&mut self) -> ConfigResult<()> {
        if !self.root_path.exists() {
            return Err(ConfigError::InvalidPath {
                path: self.root_path.clone(),
                reason: "path does not exist".to_string(),
            });
        }
        if !self.root_path.is_dir() {
            return Err(ConfigError::InvalidPath {
                path: self.root_path.clone(),
                reason: "not a directory".to_string(),
            });
        }

        self.root_path =
            dunce::canonicalize(&self.root_path).map_err(|e| ConfigError::InvalidPath {
                path: self.root_path.clone(),
                reason: e.to_string(),
            })?;

        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

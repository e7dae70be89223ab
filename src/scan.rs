//! Scan module: lists one directory level for the renderer.
//!
//! The scanner is deliberately not recursive. It answers a single question:
//! "which entries of this directory should be rendered, in what order?"
//! Recursion lives in the render module, which calls back into the scanner
//! for every directory it descends into. The module provides:
//!
//! - **`Filesystem`**: the collaborator contract (`exists` / `list_entries` /
//!   `is_directory`) with `OsFilesystem` as the real implementation
//! - **`scan_level`**: classification, exclusion, dirs-only filtering, and
//!   independent per-group truncation with a `...` placeholder
//! - **`ExcludeMatcher`**: bare-name glob matching where a leading `**/`
//!   may match zero path segments
//! - **`IgnoreChain`**: layered `.gitignore` rules, deepest file wins
//!
//! Entry order is whatever the underlying listing call returns; the scanner
//! never sorts, it only partitions directories before files.
//!
//! File: src/scan.rs
//! Date: 2026-02-18

#![forbid(unsafe_code)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glob::Pattern;
use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::config::ScanOptions;
use crate::error::{MatchError, ScanError};

// ============================================================================
// Constants
// ============================================================================

/// Canonical marker inserted when a group is truncated against its limit.
///
/// The placeholder is always the last element of its group, is never a
/// directory, and is never recursed into.
pub const TRUNCATION_PLACEHOLDER: &str = "...";

// ============================================================================
// Filesystem Collaborator
// ============================================================================

/// Read-only filesystem operations consumed by the scanner.
///
/// Implementations must preserve listing order as returned by the OS (or by
/// the backing store); the renderer's output order is defined in terms of it.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use treetext::scan::{Filesystem, OsFilesystem};
///
/// let fs = OsFilesystem;
/// assert!(fs.exists(Path::new(".")));
/// assert!(fs.is_directory(Path::new(".")));
/// ```
pub trait Filesystem {
    /// Returns whether the path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Returns the bare names of the path's immediate entries, in
    /// listing order.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error when the directory cannot be read.
    fn list_entries(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Returns whether the path is a directory (following symlinks).
    fn is_directory(&self, path: &Path) -> bool;
}

/// The real filesystem, backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_entries(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

// ============================================================================
// Entry Model
// ============================================================================

/// Filesystem entry kind.
///
/// # Examples
///
/// ```
/// use treetext::scan::EntryKind;
///
/// assert_ne!(EntryKind::Directory, EntryKind::File);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A directory, eligible for recursion.
    Directory,
    /// A regular (non-directory) entry.
    File,
    /// The synthetic truncation marker. Treated as a leaf and formatted
    /// through the file mask set.
    Placeholder,
}

/// One entry of a scanned directory level.
///
/// Transient: produced by the scanner, consumed by the renderer, and
/// discarded within the same render call.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use treetext::scan::{EntryKind, LevelEntry};
///
/// let entry = LevelEntry {
///     name: "src".to_string(),
///     path: PathBuf::from("/repo/src"),
///     kind: EntryKind::Directory,
/// };
/// assert!(entry.is_dir());
/// assert!(!entry.is_placeholder());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelEntry {
    /// Bare entry name.
    pub name: String,
    /// Full path of the entry (the literal marker for placeholders).
    pub path: PathBuf,
    /// Entry kind.
    pub kind: EntryKind,
}

impl LevelEntry {
    /// Creates the synthetic truncation placeholder.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetext::scan::LevelEntry;
    ///
    /// let entry = LevelEntry::placeholder();
    /// assert!(entry.is_placeholder());
    /// assert!(!entry.is_dir());
    /// ```
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            name: TRUNCATION_PLACEHOLDER.to_string(),
            path: PathBuf::from(TRUNCATION_PLACEHOLDER),
            kind: EntryKind::Placeholder,
        }
    }

    /// Returns whether the entry is a real directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Returns whether the entry is the truncation placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.kind == EntryKind::Placeholder
    }
}

// ============================================================================
// Exclusion Matching
// ============================================================================

/// Compiled exclusion patterns, matched against bare entry names.
///
/// A pattern with a `**/` prefix is additionally compiled with the prefix
/// stripped, so the globstar can match zero leading path segments: both
/// `node_modules` and `**/node_modules` exclude a directory named
/// `node_modules` at any level.
///
/// # Examples
///
/// ```
/// use treetext::scan::ExcludeMatcher;
///
/// let matcher = ExcludeMatcher::new(&["*.log".to_string(), "**/target".to_string()]).unwrap();
/// assert!(matcher.matches("debug.log"));
/// assert!(matcher.matches("target"));
/// assert!(!matcher.matches("src"));
/// ```
#[derive(Debug, Clone)]
pub struct ExcludeMatcher {
    /// Compiled patterns, including stripped globstar variants.
    patterns: Vec<Pattern>,
}

impl ExcludeMatcher {
    /// Compiles a list of glob strings into a matcher.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidPattern` for the first pattern that does
    /// not compile.
    pub fn new(globs: &[String]) -> Result<Self, MatchError> {
        let mut patterns = Vec::with_capacity(globs.len());
        for raw in globs {
            patterns.push(
                Pattern::new(raw).map_err(|e| MatchError::from_glob_error(raw, e.msg))?,
            );
            if let Some(stripped) = raw.strip_prefix("**/") {
                patterns.push(
                    Pattern::new(stripped)
                        .map_err(|e| MatchError::from_glob_error(stripped, e.msg))?,
                );
            }
        }
        Ok(Self { patterns })
    }

    /// Returns whether the bare name matches any exclusion pattern.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }

    /// Returns whether the matcher holds no patterns at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

// ============================================================================
// Gitignore Chain
// ============================================================================

/// Layered `.gitignore` rules accumulated along the walk.
///
/// Each directory that carries a `.gitignore` contributes one layer; when a
/// path is tested, layers are consulted deepest-first and the first matching
/// rule wins (an ignore rule hides the entry, a whitelist rule re-includes
/// it). The chain is cheap to clone and is threaded by value through the
/// recursion together with the rest of the walk state.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use treetext::scan::IgnoreChain;
///
/// let chain = IgnoreChain::new().descend(Path::new("/repo")).unwrap();
/// let ignored = chain.is_ignored(Path::new("/repo/target"), true);
/// println!("{ignored}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IgnoreChain {
    /// Compiled matchers, shallowest first.
    layers: Vec<Arc<Gitignore>>,
}

impl IgnoreChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a chain extended with the `.gitignore` of `dir`, if present.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::GitignoreBuildError` when an existing
    /// `.gitignore` cannot be read or compiled.
    pub fn descend(&self, dir: &Path) -> Result<Self, MatchError> {
        let mut next = self.clone();
        let gitignore_file = dir.join(".gitignore");
        if gitignore_file.is_file() {
            let mut builder = GitignoreBuilder::new(dir);
            if let Some(err) = builder.add(&gitignore_file) {
                return Err(err.into());
            }
            let compiled = builder.build().map_err(MatchError::from)?;
            next.layers.push(Arc::new(compiled));
        }
        Ok(next)
    }

    /// Returns whether a path is hidden by the accumulated rules.
    #[must_use]
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        for layer in self.layers.iter().rev() {
            let matched = layer.matched(path, is_dir);
            if matched.is_ignore() {
                return true;
            }
            if matched.is_whitelist() {
                return false;
            }
        }
        false
    }

    /// Returns whether the chain holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

// ============================================================================
// Level Scanning
// ============================================================================

/// Lists exactly the entries to render at one directory level.
///
/// Returns directories first, then files, each group in listing order and
/// independently truncated against its limit (the first N entries are kept
/// and a placeholder is appended). A missing directory yields an empty list
/// rather than an error; any other access failure aborts the render.
///
/// # Arguments
///
/// * `filesystem` - The filesystem collaborator
/// * `path` - The directory to list
/// * `exclude` - Bare-name exclusion patterns
/// * `ignore_chain` - Accumulated gitignore rules (empty when disabled)
/// * `options` - Dirs-only flag and per-group limits
///
/// # Errors
///
/// Returns a `ScanError` when the directory cannot be read.
pub fn scan_level(
    filesystem: &dyn Filesystem,
    path: &Path,
    exclude: &ExcludeMatcher,
    ignore_chain: &IgnoreChain,
    options: &ScanOptions,
) -> Result<Vec<LevelEntry>, ScanError> {
    if !filesystem.exists(path) {
        return Ok(Vec::new());
    }

    let names = match filesystem.list_entries(path) {
        Ok(names) => names,
        // The directory vanished between the existence check and the
        // listing; indistinguishable from "never existed".
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(ScanError::from_io_error(e, path.to_path_buf())),
    };

    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for name in names {
        if exclude.matches(&name) {
            continue;
        }

        let full_path = path.join(&name);
        let is_dir = filesystem.is_directory(&full_path);

        if ignore_chain.is_ignored(&full_path, is_dir) {
            continue;
        }

        if is_dir {
            dirs.push(LevelEntry {
                name,
                path: full_path,
                kind: EntryKind::Directory,
            });
        } else if !options.dirs_only {
            files.push(LevelEntry {
                name,
                path: full_path,
                kind: EntryKind::File,
            });
        }
    }

    truncate_group(&mut dirs, options.max_dirs);
    truncate_group(&mut files, options.max_files);

    dirs.extend(files);
    Ok(dirs)
}

/// Truncates one group against its limit, appending the placeholder.
fn truncate_group(group: &mut Vec<LevelEntry>, max: Option<usize>) {
    if let Some(max) = max {
        if group.len() > max {
            group.truncate(max);
            group.push(LevelEntry::placeholder());
        }
    }
}

// ============================================================================
// In-memory Filesystem (test support)
// ============================================================================


// ============================================================================
// Unit Tests
// ============================================================================

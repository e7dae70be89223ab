//! Render module: turns a directory tree into one flat string.
//!
//! Rendering is a single depth-first pass over the tree. The module splits
//! the work into three small pieces that compose in that pass:
//!
//! - **Formatter**: `resolve_mask` picks the mask for an entry's role and
//!   type, `apply_mask` substitutes the `#0` / `#1` / `#2` tokens
//! - **Recursor**: `TreeRenderer::walk` scans each level, computes the
//!   first/last flags and indentation, and descends into directories
//! - **`RenderResult`**: the rendered string plus entry counts and timing
//!
//! `TreeRenderer` itself is immutable. Depth and the parent-is-last flag
//! travel as call parameters, so one renderer can serve any number of
//! render calls without carry-over between them.
//!
//! File: src/render.rs
//! Date: 2026-02-18

#![forbid(unsafe_code)]

use std::path::Path;
use std::time::{Duration, Instant};

use crate::config::{Config, Masks};
use crate::error::TreetextResult;
use crate::scan::{
    scan_level, EntryKind, ExcludeMatcher, Filesystem, IgnoreChain, OsFilesystem,
};

// ============================================================================
// Constants
// ============================================================================

/// Mask token replaced by the display level.
pub const TOKEN_LEVEL: &str = "#0";

/// Mask token replaced by the bare entry name.
pub const TOKEN_NAME: &str = "#1";

/// Mask token replaced by the base-path-adjusted entry path.
pub const TOKEN_PATH: &str = "#2";

/// The real filesystem, shared by every default-constructed renderer.
static OS_FILESYSTEM: OsFilesystem = OsFilesystem;

// ============================================================================
// Entry Roles
// ============================================================================

/// Position of an entry within its rendered level.
///
/// The role decides which mask of the applicable set formats the entry.
/// `Last` wins over `First`, so a sole entry of a level formats through the
/// last mask.
///
/// # Examples
///
/// ```
/// use treetext::render::EntryRole;
///
/// assert_ne!(EntryRole::First, EntryRole::Last);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRole {
    /// The tree root itself, always display level 1.
    Root,
    /// First entry of its level.
    First,
    /// Last entry of its level (placeholders always take this role).
    Last,
    /// Any other entry.
    Middle,
}

/// Picks the mask for a role from the applicable mask set.
///
/// Priority: root mask (for the root, when configured) over `last` over
/// `first` over `default`. An unconfigured or empty optional mask falls
/// through to the next candidate; a root without a root mask is formatted
/// as the first entry of the directory set.
///
/// # Examples
///
/// ```
/// use treetext::config::{Masks, MaskSet};
/// use treetext::render::{resolve_mask, EntryRole};
///
/// let masks = Masks {
///     root: None,
///     directory: MaskSet::uniform("[#1]"),
///     file: MaskSet::uniform("#1"),
/// };
/// assert_eq!(resolve_mask(EntryRole::Root, &masks, true), "[#1]");
/// assert_eq!(resolve_mask(EntryRole::Middle, &masks, false), "#1");
/// ```
#[must_use]
pub fn resolve_mask(role: EntryRole, masks: &Masks, is_directory: bool) -> &str {
    if role == EntryRole::Root {
        if let Some(root) = masks.root.as_deref() {
            if !root.is_empty() {
                return root;
            }
        }
    }

    let set = if is_directory {
        &masks.directory
    } else {
        &masks.file
    };

    let role = if role == EntryRole::Root {
        EntryRole::First
    } else {
        role
    };

    match role {
        EntryRole::Last => set
            .last
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(&set.default),
        EntryRole::First => set
            .first
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(&set.default),
        _ => &set.default,
    }
}

/// Substitutes the mask tokens, each at most once.
///
/// A token that occurs twice in the mask keeps its second occurrence
/// verbatim.
///
/// # Examples
///
/// ```
/// use treetext::render::apply_mask;
///
/// let line = apply_mask("#0: #1 (#2)", 2, "src", "/repo/src");
/// assert_eq!(line, "2: src (/repo/src)");
/// ```
#[must_use]
pub fn apply_mask(mask: &str, level: usize, name: &str, path: &str) -> String {
    mask.replacen(TOKEN_LEVEL, &level.to_string(), 1)
        .replacen(TOKEN_NAME, name, 1)
        .replacen(TOKEN_PATH, path, 1)
}

// ============================================================================
// Render Result
// ============================================================================

/// Outcome of one render call.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use treetext::config::Config;
/// use treetext::render;
///
/// let config = Config::with_root(PathBuf::from(".")).validate().unwrap();
/// let result = render::render(&config).unwrap();
/// println!("{} dirs, {} files", result.directory_count, result.file_count);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    /// The complete rendered string, including before/after text.
    pub content: String,
    /// Rendered directory lines, the root included.
    pub directory_count: usize,
    /// Rendered file lines (truncation placeholders are not counted).
    pub file_count: usize,
    /// Wall-clock time spent rendering.
    pub duration: Duration,
}

/// Running line counts threaded through the walk.
#[derive(Debug, Default)]
struct Counts {
    directories: usize,
    files: usize,
}

// ============================================================================
// Tree Renderer
// ============================================================================

/// Renders the configured root through the `Filesystem` collaborator.
///
/// Holds only borrowed, immutable state; repeated calls to
/// [`TreeRenderer::render`] are independent of each other.
pub struct TreeRenderer<'a> {
    /// Validated configuration.
    config: &'a Config,
    /// Filesystem collaborator (the OS by default, in-memory in tests).
    filesystem: &'a dyn Filesystem,
    /// Compiled exclusion patterns.
    exclude: ExcludeMatcher,
}

impl<'a> TreeRenderer<'a> {
    /// Creates a renderer over the real filesystem.
    ///
    /// # Errors
    ///
    /// Returns a `MatchError` wrapped in `TreetextError` when an exclusion
    /// pattern does not compile.
    pub fn new(config: &'a Config) -> TreetextResult<Self> {
        Self::with_filesystem(config, &OS_FILESYSTEM)
    }

    /// Creates a renderer over an explicit filesystem collaborator.
    ///
    /// # Errors
    ///
    /// Returns a `MatchError` wrapped in `TreetextError` when an exclusion
    /// pattern does not compile.
    pub fn with_filesystem(
        config: &'a Config,
        filesystem: &'a dyn Filesystem,
    ) -> TreetextResult<Self> {
        let exclude = ExcludeMatcher::new(&config.matching.exclude_patterns)?;
        Ok(Self {
            config,
            filesystem,
            exclude,
        })
    }

    /// Renders the whole tree into one string.
    ///
    /// The root line and the wrapping text are emitted unconditionally; a
    /// missing root only renders an empty subtree below them. Any other
    /// filesystem failure aborts the render with no partial output.
    ///
    /// # Errors
    ///
    /// Returns a `ScanError` or `MatchError` wrapped in `TreetextError`.
    pub fn render(&self) -> TreetextResult<RenderResult> {
        let start = Instant::now();
        let format = &self.config.format;
        let root = &self.config.root_path;

        let mut out = String::new();
        out.push_str(&format.before_tree);

        let root_name = root
            .file_name()
            .map_or_else(|| root.to_string_lossy().into_owned(), |n| {
                n.to_string_lossy().into_owned()
            });
        out.push_str(&self.format_entry(EntryRole::Root, 1, &root_name, root, true));
        out.push_str(&format.line_break);

        let chain = if self.config.scan.respect_gitignore {
            IgnoreChain::new().descend(root)?
        } else {
            IgnoreChain::new()
        };

        let mut counts = Counts {
            directories: 1,
            files: 0,
        };
        self.walk(root, 0, false, &chain, &mut out, &mut counts)?;

        out.push_str(&format.after_tree);

        Ok(RenderResult {
            content: out,
            directory_count: counts.directories,
            file_count: counts.files,
            duration: start.elapsed(),
        })
    }

    /// Renders one directory level and recurses into its subdirectories.
    fn walk(
        &self,
        path: &Path,
        depth: usize,
        parent_is_last: bool,
        chain: &IgnoreChain,
        out: &mut String,
        counts: &mut Counts,
    ) -> TreetextResult<()> {
        let entries = scan_level(
            self.filesystem,
            path,
            &self.exclude,
            chain,
            &self.config.scan,
        )?;
        let line_break = &self.config.format.line_break;

        for (index, entry) in entries.iter().enumerate() {
            let is_last = index == entries.len() - 1 || entry.is_placeholder();
            let role = if is_last {
                EntryRole::Last
            } else if index == 0 {
                EntryRole::First
            } else {
                EntryRole::Middle
            };

            out.push_str(&self.indentation(depth, parent_is_last));
            out.push_str(&self.format_entry(
                role,
                depth + 2,
                &entry.name,
                &entry.path,
                entry.is_dir(),
            ));
            out.push_str(line_break);

            match entry.kind {
                EntryKind::Directory => counts.directories += 1,
                EntryKind::File => counts.files += 1,
                EntryKind::Placeholder => {}
            }

            if entry.is_dir() && self.should_descend(depth) {
                let child_chain = if self.config.scan.respect_gitignore {
                    chain.descend(&entry.path)?
                } else {
                    chain.clone()
                };
                self.walk(&entry.path, depth + 1, is_last, &child_chain, out, counts)?;
            }
        }

        Ok(())
    }

    /// Returns whether directories at this depth are descended into.
    fn should_descend(&self, depth: usize) -> bool {
        self.config
            .scan
            .max_depth
            .is_none_or(|max| depth != max - 1)
    }

    /// Builds the indentation prefix for one line.
    ///
    /// When the parent directory was the last entry of its own level and
    /// the format configures a parent-last indent, that indent replaces the
    /// deepest regular indent step.
    fn indentation(&self, depth: usize, parent_is_last: bool) -> String {
        let format = &self.config.format;
        if parent_is_last && depth > 0 {
            if let Some(parent_last) = &format.indent_parent_last {
                return format.indent.repeat(depth - 1) + parent_last;
            }
        }
        format.indent.repeat(depth)
    }

    /// Formats one entry line (without indentation or line break).
    fn format_entry(
        &self,
        role: EntryRole,
        level: usize,
        name: &str,
        path: &Path,
        is_directory: bool,
    ) -> String {
        let mask = resolve_mask(role, &self.config.format.masks, is_directory);
        apply_mask(mask, level, name, &self.adjust_path(path))
    }

    /// Strips the first textual occurrence of the base path.
    fn adjust_path(&self, path: &Path) -> String {
        let raw = path.to_string_lossy();
        match &self.config.base_path {
            Some(base) => raw.replacen(base.to_string_lossy().as_ref(), "", 1),
            None => raw.into_owned(),
        }
    }
}

/// Renders the configured tree over the real filesystem.
///
/// # Errors
///
/// Returns a `TreetextError` when an exclusion pattern does not compile or
/// the tree cannot be read.
pub fn render(config: &Config) -> TreetextResult<RenderResult> {
    TreeRenderer::new(config)?.render()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MaskSet, TreeFormat};
    use crate::scan::memfs::MemoryFilesystem;
    use crate::scan::TRUNCATION_PLACEHOLDER;
    use std::path::PathBuf;

    // ------------------------------------------------------------------------
    // Test Helpers
    // ------------------------------------------------------------------------

    /// Two-level tree with deterministic listing order:
    /// files first in the raw listing, the subdirectory last.
    fn suite_fs() -> MemoryFilesystem {
        let mut fs = MemoryFilesystem::new();
        fs.add_dir(
            "/work/suite",
            &["l0f1.txt", "l0f2.txt", "l0f3.txt", "l0f4.txt", "l1"],
        );
        fs.add_dir("/work/suite/l1", &["l1f1.txt", "l1f2.txt", "l1f3.txt"]);
        fs
    }

    /// Marker-heavy format that makes mask selection visible per line.
    fn suite_config() -> Config {
        let mut config = Config::with_root(PathBuf::from("/work/suite"));
        config.base_path = Some(PathBuf::from("/work"));
        config.format = TreeFormat {
            before_tree: String::new(),
            after_tree: String::new(),
            indent: "┃ ".to_string(),
            indent_parent_last: None,
            line_break: "<br/>".to_string(),
            masks: Masks {
                root: Some("# HEADING #0: #1 (#2)".to_string()),
                directory: MaskSet {
                    default: "#! #0: #1 (#2)/".to_string(),
                    first: None,
                    last: Some("#? #0: #1 (#2)/".to_string()),
                },
                file: MaskSet {
                    default: "+! #0: #1 (#2)".to_string(),
                    first: None,
                    last: Some("+? #0: #1 (#2)".to_string()),
                },
            },
        };
        config
    }

    fn render_with(config: &Config, fs: &MemoryFilesystem) -> RenderResult {
        TreeRenderer::with_filesystem(config, fs)
            .expect("renderer should build")
            .render()
            .expect("render should succeed")
    }

    // ------------------------------------------------------------------------
    // Mask Resolution
    // ------------------------------------------------------------------------

    fn marker_masks() -> Masks {
        Masks {
            root: Some("R #1".to_string()),
            directory: MaskSet {
                default: "D #1".to_string(),
                first: Some("DF #1".to_string()),
                last: Some("DL #1".to_string()),
            },
            file: MaskSet {
                default: "F #1".to_string(),
                first: Some("FF #1".to_string()),
                last: Some("FL #1".to_string()),
            },
        }
    }

    #[test]
    fn should_resolve_masks_by_role_and_type() {
        let masks = marker_masks();

        assert_eq!(resolve_mask(EntryRole::Root, &masks, true), "R #1");
        assert_eq!(resolve_mask(EntryRole::First, &masks, true), "DF #1");
        assert_eq!(resolve_mask(EntryRole::Last, &masks, true), "DL #1");
        assert_eq!(resolve_mask(EntryRole::Middle, &masks, true), "D #1");
        assert_eq!(resolve_mask(EntryRole::First, &masks, false), "FF #1");
        assert_eq!(resolve_mask(EntryRole::Last, &masks, false), "FL #1");
        assert_eq!(resolve_mask(EntryRole::Middle, &masks, false), "F #1");
    }

    #[test]
    fn should_fall_back_to_default_for_unset_optional_masks() {
        let mut masks = marker_masks();
        masks.directory.first = None;
        masks.file.last = Some(String::new());

        assert_eq!(resolve_mask(EntryRole::First, &masks, true), "D #1");
        assert_eq!(resolve_mask(EntryRole::Last, &masks, false), "F #1");
    }

    #[test]
    fn should_format_root_as_first_directory_without_root_mask() {
        let mut masks = marker_masks();
        masks.root = None;
        assert_eq!(resolve_mask(EntryRole::Root, &masks, true), "DF #1");

        masks.root = Some(String::new());
        assert_eq!(resolve_mask(EntryRole::Root, &masks, true), "DF #1");
    }

    // ------------------------------------------------------------------------
    // Token Substitution
    // ------------------------------------------------------------------------

    #[test]
    fn should_substitute_each_token_once() {
        assert_eq!(
            apply_mask("#0 #1 #2", 3, "name", "/p/name"),
            "3 name /p/name"
        );
    }

    #[test]
    fn should_leave_repeated_tokens_untouched() {
        assert_eq!(apply_mask("#1 and #1", 1, "x", ""), "x and #1");
    }

    #[test]
    fn should_handle_masks_without_tokens() {
        assert_eq!(apply_mask("---", 1, "x", "/x"), "---");
    }

    // ------------------------------------------------------------------------
    // Full Tree Rendering
    // ------------------------------------------------------------------------

    #[test]
    fn should_render_two_level_tree_exactly() {
        let result = render_with(&suite_config(), &suite_fs());

        assert_eq!(
            result.content,
            "# HEADING 1: suite (/suite)<br/>\
             #! 2: l1 (/suite/l1)/<br/>\
             ┃ +! 3: l1f1.txt (/suite/l1/l1f1.txt)<br/>\
             ┃ +! 3: l1f2.txt (/suite/l1/l1f2.txt)<br/>\
             ┃ +? 3: l1f3.txt (/suite/l1/l1f3.txt)<br/>\
             +! 2: l0f1.txt (/suite/l0f1.txt)<br/>\
             +! 2: l0f2.txt (/suite/l0f2.txt)<br/>\
             +! 2: l0f3.txt (/suite/l0f3.txt)<br/>\
             +? 2: l0f4.txt (/suite/l0f4.txt)<br/>"
        );
    }

    #[test]
    fn should_count_rendered_entries_including_root() {
        let result = render_with(&suite_config(), &suite_fs());
        assert_eq!(result.directory_count, 2);
        assert_eq!(result.file_count, 7);
    }

    #[test]
    fn should_render_identically_on_repeated_calls() {
        let config = suite_config();
        let fs = suite_fs();
        let renderer = TreeRenderer::with_filesystem(&config, &fs).unwrap();

        let first = renderer.render().unwrap();
        let second = renderer.render().unwrap();
        assert_eq!(first.content, second.content);
        assert_eq!(first.directory_count, second.directory_count);
    }

    #[test]
    fn should_render_root_line_with_empty_subtree_for_missing_root() {
        let fs = MemoryFilesystem::new();
        let result = render_with(&suite_config(), &fs);

        assert_eq!(result.content, "# HEADING 1: suite (/suite)<br/>");
        assert_eq!(result.directory_count, 1);
        assert_eq!(result.file_count, 0);
    }

    #[test]
    fn should_wrap_missing_root_with_before_and_after_text() {
        let mut config = suite_config();
        config.format.before_tree = "<<".to_string();
        config.format.after_tree = ">>".to_string();

        let fs = MemoryFilesystem::new();
        let result = render_with(&config, &fs);
        assert_eq!(result.content, "<<# HEADING 1: suite (/suite)<br/>>>");
    }

    #[test]
    fn should_wrap_tree_with_before_and_after_text() {
        let mut config = suite_config();
        config.scan.max_depth = Some(1);
        config.format.before_tree = "<<".to_string();
        config.format.after_tree = ">>".to_string();
        config.format.masks = Masks {
            root: Some("#1".to_string()),
            directory: MaskSet::uniform("#1/"),
            file: MaskSet::uniform("#1"),
        };
        config.format.line_break = "|".to_string();

        let mut fs = MemoryFilesystem::new();
        fs.add_dir("/work/suite", &["a.txt"]);

        let result = render_with(&config, &fs);
        assert_eq!(result.content, "<<suite|a.txt|>>");
    }

    #[test]
    fn should_keep_listing_order_within_groups() {
        let mut config = suite_config();
        config.format.masks = Masks {
            root: Some("#1".to_string()),
            directory: MaskSet::uniform("#1/"),
            file: MaskSet::uniform("#1"),
        };
        config.format.line_break = "\n".to_string();

        let mut fs = MemoryFilesystem::new();
        fs.add_dir("/work/suite", &["z.txt", "beta", "a.txt", "alpha"]);
        fs.add_dir("/work/suite/beta", &[]);
        fs.add_dir("/work/suite/alpha", &[]);

        let result = render_with(&config, &fs);
        assert_eq!(result.content, "suite\nbeta/\nalpha/\nz.txt\na.txt\n");
    }

    // ------------------------------------------------------------------------
    // Depth Limiting
    // ------------------------------------------------------------------------

    #[test]
    fn should_list_but_not_descend_at_depth_limit() {
        let mut config = suite_config();
        config.scan.max_depth = Some(1);

        let result = render_with(&config, &suite_fs());
        assert!(result.content.contains("l1 (/suite/l1)/"));
        assert!(!result.content.contains("l1f1.txt"));
        assert_eq!(result.file_count, 4);
    }

    #[test]
    fn should_descend_fully_without_depth_limit() {
        let result = render_with(&suite_config(), &suite_fs());
        assert!(result.content.contains("l1f1.txt"));
    }

    // ------------------------------------------------------------------------
    // Truncation
    // ------------------------------------------------------------------------

    #[test]
    fn should_render_placeholder_through_last_file_mask() {
        let mut config = suite_config();
        config.scan.max_files = Some(2);

        let result = render_with(&config, &suite_fs());
        // Top level: the first two files survive, then the marker with the
        // file "last" mask and the literal marker in both tokens.
        assert!(result.content.contains("+! 2: l0f1.txt"));
        assert!(result.content.contains("+! 2: l0f2.txt"));
        assert!(!result.content.contains("l0f3.txt"));
        assert!(result
            .content
            .contains(&format!("+? 2: {TRUNCATION_PLACEHOLDER} ({TRUNCATION_PLACEHOLDER})")));
    }

    #[test]
    fn should_not_count_placeholder_lines() {
        let mut config = suite_config();
        config.scan.max_files = Some(2);

        let result = render_with(&config, &suite_fs());
        // Two files on each of the two levels survive the limit.
        assert_eq!(result.file_count, 4);
        assert_eq!(result.directory_count, 2);
    }

    // ------------------------------------------------------------------------
    // Exclusion and Dirs-only
    // ------------------------------------------------------------------------

    #[test]
    fn should_skip_excluded_directory_and_its_subtree() {
        let mut config = suite_config();
        config.matching.exclude_patterns = vec!["l1".to_string()];

        let result = render_with(&config, &suite_fs());
        assert!(!result.content.contains("l1 ("));
        assert!(!result.content.contains("l1f1.txt"));
        assert!(result.content.contains("l0f1.txt"));
    }

    #[test]
    fn should_render_only_directories_in_dirs_only_mode() {
        let mut config = suite_config();
        config.scan.dirs_only = true;

        let result = render_with(&config, &suite_fs());
        assert_eq!(
            result.content,
            "# HEADING 1: suite (/suite)<br/>#? 2: l1 (/suite/l1)/<br/>"
        );
        assert_eq!(result.file_count, 0);
    }

    #[test]
    fn should_reject_invalid_exclude_pattern_at_construction() {
        let mut config = suite_config();
        config.matching.exclude_patterns = vec!["a[".to_string()];

        let fs = suite_fs();
        assert!(TreeRenderer::with_filesystem(&config, &fs).is_err());
    }

    // ------------------------------------------------------------------------
    // Indentation
    // ------------------------------------------------------------------------

    #[test]
    fn should_use_parent_last_indent_under_last_directory() {
        let mut config = suite_config();
        config.format.indent = "| ".to_string();
        config.format.indent_parent_last = Some(". ".to_string());
        config.format.line_break = "\n".to_string();
        config.format.masks = Masks {
            root: Some("#1".to_string()),
            directory: MaskSet::uniform("#1/"),
            file: MaskSet::uniform("#1"),
        };

        // "mid" is not last (a file follows), "tail" below it is last.
        let mut fs = MemoryFilesystem::new();
        fs.add_dir("/work/suite", &["mid", "after.txt"]);
        fs.add_dir("/work/suite/mid", &["tail"]);
        fs.add_dir("/work/suite/mid/tail", &["deep.txt"]);

        let result = render_with(&config, &fs);
        assert_eq!(
            result.content,
            "suite\nmid/\n| tail/\n| . deep.txt\nafter.txt\n"
        );
    }

    #[test]
    fn should_repeat_regular_indent_without_override() {
        let mut config = suite_config();
        config.format.indent = "..".to_string();
        config.format.indent_parent_last = None;
        config.format.line_break = "\n".to_string();
        config.format.masks = Masks {
            root: Some("#1".to_string()),
            directory: MaskSet::uniform("#1/"),
            file: MaskSet::uniform("#1"),
        };

        let mut fs = MemoryFilesystem::new();
        fs.add_dir("/work/suite", &["sub"]);
        fs.add_dir("/work/suite/sub", &["inner"]);
        fs.add_dir("/work/suite/sub/inner", &["leaf.txt"]);

        let result = render_with(&config, &fs);
        assert_eq!(result.content, "suite\nsub/\n..inner/\n....leaf.txt\n");
    }

    // ------------------------------------------------------------------------
    // Base Path
    // ------------------------------------------------------------------------

    #[test]
    fn should_keep_full_paths_without_base_path() {
        let mut config = suite_config();
        config.base_path = None;

        let result = render_with(&config, &suite_fs());
        assert!(result.content.contains("(/work/suite/l1)"));
    }

    #[test]
    fn should_strip_only_the_first_base_path_occurrence() {
        let mut config = suite_config();
        config.root_path = PathBuf::from("/work/suite/work/suite");
        config.base_path = Some(PathBuf::from("/work/suite"));

        let mut fs = MemoryFilesystem::new();
        fs.add_dir("/work/suite/work/suite", &["a.txt"]);

        let result = render_with(&config, &fs);
        assert!(result.content.contains("(/work/suite/a.txt)"));
    }
}

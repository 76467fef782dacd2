use std::fmt;
use std::path::{Path, PathBuf};

/// A regular file observed in the target directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path of the file
    pub path: PathBuf,
    /// File name including extension
    pub name: String,
    /// File name without its extension
    pub stem: String,
    /// Extension including the leading dot, empty when the name has none
    pub extension: String,
}

impl FileEntry {
    /// Build an entry from a directory path and a file name
    pub fn new(dir: &Path, name: &str) -> Self {
        let (stem, extension) = split_name(name);
        Self {
            path: dir.join(name),
            name: name.to_string(),
            stem,
            extension,
        }
    }
}

/// Split a file name into stem and extension, preserving the extension
/// verbatim. Dotfiles such as ".gitignore" are treated as extension-less.
fn split_name(name: &str) -> (String, String) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (name[..idx].to_string(), name[idx..].to_string()),
        _ => (name.to_string(), String::new()),
    }
}

/// Why a file was skipped rather than renamed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing left of the stem once removal words were stripped
    EmptyAfterClean,
    /// The normalized name equals the current name
    NoChange,
    /// The target name is taken by another file or an earlier entry
    NameConflict,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyAfterClean => write!(f, "name would be empty after cleaning"),
            SkipReason::NoChange => write!(f, "no change needed"),
            SkipReason::NameConflict => write!(f, "target name already taken"),
        }
    }
}

/// Planned outcome for a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file will be renamed to the proposed name
    Rename { new_name: String },
    /// The file is left untouched
    Skip { reason: SkipReason },
}

/// One file paired with its planned outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub entry: FileEntry,
    pub outcome: Outcome,
}

/// The in-memory, not-yet-applied mapping from existing files to
/// proposed names. Entries are ordered by original file name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenamePlan {
    pub entries: Vec<PlanEntry>,
}

impl RenamePlan {
    /// Number of entries planned for renaming
    pub fn pending(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, Outcome::Rename { .. }))
            .count()
    }
}

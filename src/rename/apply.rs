use std::fs;
use std::path::PathBuf;

use crate::models::{Outcome, RenamePlan};

/// What happened to one planned rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyStatus {
    /// The file was renamed on disk
    Renamed,
    /// Dry run: the file would have been renamed
    WouldRename,
    /// The rename failed; the run continued with the next file
    Failed(String),
}

/// Per-file result of applying a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub original: String,
    pub target: String,
    pub status: ApplyStatus,
}

/// Ordered per-file results of one apply run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplyReport {
    pub results: Vec<ApplyResult>,
}

impl ApplyReport {
    /// Files renamed, or that would be renamed in a dry run
    pub fn renamed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.status, ApplyStatus::Renamed | ApplyStatus::WouldRename))
            .count()
    }

    /// Files whose rename failed
    pub fn failure_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.status, ApplyStatus::Failed(_)))
            .count()
    }
}

/// Apply a renaming plan, one file at a time, in plan order.
///
/// A failure renaming one file is recorded and does not abort the rest.
/// In dry-run mode no filesystem mutation occurs; skipped plan entries
/// never produce a result.
pub fn apply(plan: &RenamePlan, dry_run: bool) -> ApplyReport {
    let mut results = Vec::new();

    for planned in &plan.entries {
        let new_name = match &planned.outcome {
            Outcome::Rename { new_name } => new_name,
            Outcome::Skip { .. } => continue,
        };

        let source = &planned.entry.path;
        let target = match source.parent() {
            Some(parent) => parent.join(new_name),
            None => PathBuf::from(new_name),
        };

        let status = if dry_run {
            ApplyStatus::WouldRename
        } else if target.exists() {
            // Never overwrite a file that appeared after planning.
            ApplyStatus::Failed(format!("'{}' already exists", new_name))
        } else {
            match fs::rename(source, &target) {
                Ok(()) => {
                    tracing::debug!(from = %source.display(), to = %target.display(), "renamed");
                    ApplyStatus::Renamed
                }
                Err(e) => {
                    tracing::warn!(from = %source.display(), error = %e, "rename failed");
                    ApplyStatus::Failed(e.to_string())
                }
            }
        };

        results.push(ApplyResult {
            original: planned.entry.name.clone(),
            target: new_name.clone(),
            status,
        });
    }

    ApplyReport { results }
}

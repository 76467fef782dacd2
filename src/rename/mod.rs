//! Filename normalization: planning and applying conflict-safe renames

pub mod apply;
pub mod planner;

pub use apply::{apply, ApplyResult, ApplyStatus};
pub use planner::plan;

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{Outcome, RenameConfig, SkipReason};
use crate::utils::list_files;

/// Run the rename command against a directory: list, plan, apply, report.
pub fn run_rename(path: &Path, config: &RenameConfig) -> Result<()> {
    let dir = path
        .canonicalize()
        .map_err(|_| Error::InvalidPath(path.to_path_buf()))?;
    if !dir.is_dir() {
        return Err(Error::InvalidPath(path.to_path_buf()));
    }

    println!("Processing files in: {}", dir.display());
    println!("Mode: {}", config.mode);
    if !config.remove_words.is_empty() {
        println!("Removing words: {}", config.remove_words.join(", "));
    }
    println!("Dry run: {}", if config.dry_run { "Yes" } else { "No" });
    println!("{}", "-".repeat(50));

    let listing = list_files(&dir)?;
    if listing.is_empty() {
        println!("No files found in the directory.");
        return Ok(());
    }

    let rename_plan = plan(&listing, config);
    tracing::debug!("{} of {} files planned for renaming", rename_plan.pending(), listing.len());
    let report = apply(&rename_plan, config.dry_run);
    let by_original: HashMap<&str, &ApplyResult> = report
        .results
        .iter()
        .map(|r| (r.original.as_str(), r))
        .collect();

    for planned in &rename_plan.entries {
        let name = planned.entry.name.as_str();
        match &planned.outcome {
            Outcome::Skip {
                reason: SkipReason::EmptyAfterClean,
            } => println!("Skipping '{}' - name would be empty after cleaning", name),
            Outcome::Skip {
                reason: SkipReason::NoChange,
            } => println!("No change needed: {}", name),
            Outcome::Skip {
                reason: SkipReason::NameConflict,
            } => println!("Conflict: target name already taken - skipping '{}'", name),
            Outcome::Rename { new_name } => {
                match by_original.get(name).map(|r| &r.status) {
                    Some(ApplyStatus::Renamed) => {
                        println!("Renaming: '{}' -> '{}'", name, new_name)
                    }
                    Some(ApplyStatus::WouldRename) => {
                        println!("Would rename: '{}' -> '{}'", name, new_name)
                    }
                    Some(ApplyStatus::Failed(err)) => {
                        println!("Error renaming '{}': {}", name, err)
                    }
                    None => {}
                }
            }
        }
    }

    println!("{}", "-".repeat(50));
    println!(
        "{} {} file(s)",
        if config.dry_run { "Would rename" } else { "Renamed" },
        report.renamed_count()
    );
    if report.failure_count() > 0 {
        println!("{} file(s) failed to rename", report.failure_count());
    }

    Ok(())
}

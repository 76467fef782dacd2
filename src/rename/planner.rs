use std::collections::HashSet;

use crate::models::{CaseMode, FileEntry, Outcome, PlanEntry, RenameConfig, RenamePlan, SkipReason};
use crate::utils::{clean_stem, to_camel_case, to_lower_case};

/// Compute a renaming plan for a directory listing.
///
/// Entries are processed in lexicographic order of their original names so
/// that results are reproducible and earlier entries win target-name ties.
/// The plan never touches the filesystem; conflict detection runs against
/// the listing itself plus the names claimed earlier in the same run.
pub fn plan(listing: &[FileEntry], config: &RenameConfig) -> RenamePlan {
    let mut files: Vec<FileEntry> = listing.to_vec();
    files.sort_by(|a, b| a.name.cmp(&b.name));

    let existing: HashSet<String> = files.iter().map(|f| f.name.clone()).collect();
    let mut claimed: HashSet<String> = HashSet::new();
    let mut entries = Vec::with_capacity(files.len());

    for file in files {
        let outcome = propose(&file, config, &existing, &claimed);
        if let Outcome::Rename { new_name } = &outcome {
            claimed.insert(new_name.clone());
        }
        tracing::debug!(file = %file.name, ?outcome, "planned");
        entries.push(PlanEntry { entry: file, outcome });
    }

    RenamePlan { entries }
}

/// Normalize one file name and decide its outcome.
fn propose(
    file: &FileEntry,
    config: &RenameConfig,
    existing: &HashSet<String>,
    claimed: &HashSet<String>,
) -> Outcome {
    let cleaned = clean_stem(&file.stem, &config.remove_words);
    if cleaned.is_empty() {
        return Outcome::Skip {
            reason: SkipReason::EmptyAfterClean,
        };
    }

    let new_stem = match config.mode {
        CaseMode::Camel => to_camel_case(&cleaned),
        CaseMode::Lower => to_lower_case(&cleaned),
    };

    // The extension is carried over verbatim, case included.
    let new_name = format!("{}{}", new_stem, file.extension);

    if new_name == file.name {
        return Outcome::Skip {
            reason: SkipReason::NoChange,
        };
    }

    if claimed.contains(&new_name) || existing.contains(&new_name) {
        return Outcome::Skip {
            reason: SkipReason::NameConflict,
        };
    }

    Outcome::Rename { new_name }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn entry(name: &str) -> FileEntry {
        FileEntry::new(Path::new("/fonts"), name)
    }

    fn config(mode: CaseMode, remove: &[&str]) -> RenameConfig {
        RenameConfig::new(mode, remove.iter().map(|s| s.to_string()).collect(), false)
    }

    fn outcome_of<'a>(plan: &'a RenamePlan, name: &str) -> &'a Outcome {
        &plan
            .entries
            .iter()
            .find(|e| e.entry.name == name)
            .expect("entry present")
            .outcome
    }

    #[test]
    fn removes_words_and_camel_cases_the_stem() {
        let plan = plan(
            &[entry("My_Font-Regular.ttf")],
            &config(CaseMode::Camel, &["Regular"]),
        );
        assert_eq!(
            outcome_of(&plan, "My_Font-Regular.ttf"),
            &Outcome::Rename {
                new_name: "myFont.ttf".to_string()
            }
        );
    }

    #[test]
    fn lower_mode_joins_tokens_with_underscores() {
        let plan = plan(&[entry("ALLCAPS FILE.ttf")], &config(CaseMode::Lower, &[]));
        assert_eq!(
            outcome_of(&plan, "ALLCAPS FILE.ttf"),
            &Outcome::Rename {
                new_name: "allcaps_file.ttf".to_string()
            }
        );
    }

    #[test]
    fn extension_case_is_preserved() {
        let plan = plan(
            &[entry("My_Font-Regular.TTF")],
            &config(CaseMode::Camel, &["Regular"]),
        );
        assert_eq!(
            outcome_of(&plan, "My_Font-Regular.TTF"),
            &Outcome::Rename {
                new_name: "myFont.TTF".to_string()
            }
        );
    }

    #[test]
    fn stem_reduced_to_nothing_is_skipped() {
        let plan = plan(
            &[entry("Regular.ttf")],
            &config(CaseMode::Camel, &["Regular"]),
        );
        assert_eq!(
            outcome_of(&plan, "Regular.ttf"),
            &Outcome::Skip {
                reason: SkipReason::EmptyAfterClean
            }
        );
    }

    #[test]
    fn already_normalized_names_report_no_change() {
        let camel = plan(&[entry("myfont.ttf")], &config(CaseMode::Camel, &[]));
        assert_eq!(
            outcome_of(&camel, "myfont.ttf"),
            &Outcome::Skip {
                reason: SkipReason::NoChange
            }
        );

        let lower = plan(&[entry("allcaps_file.ttf")], &config(CaseMode::Lower, &[]));
        assert_eq!(
            outcome_of(&lower, "allcaps_file.ttf"),
            &Outcome::Skip {
                reason: SkipReason::NoChange
            }
        );
    }

    #[test]
    fn earlier_entry_wins_when_two_names_normalize_alike() {
        // Both normalize to "myFont.ttf"; "My-Font.ttf" sorts first.
        let plan = plan(
            &[entry("my_font.ttf"), entry("My-Font.ttf")],
            &config(CaseMode::Camel, &[]),
        );
        assert_eq!(
            outcome_of(&plan, "My-Font.ttf"),
            &Outcome::Rename {
                new_name: "myFont.ttf".to_string()
            }
        );
        assert_eq!(
            outcome_of(&plan, "my_font.ttf"),
            &Outcome::Skip {
                reason: SkipReason::NameConflict
            }
        );
    }

    #[test]
    fn existing_names_in_the_listing_block_renames() {
        // "My Font.ttf" would become "myFont.ttf", which another file
        // already occupies, even though that file is itself renamed.
        let plan = plan(
            &[entry("My Font.ttf"), entry("myFont.ttf")],
            &config(CaseMode::Camel, &[]),
        );
        assert_eq!(
            outcome_of(&plan, "My Font.ttf"),
            &Outcome::Skip {
                reason: SkipReason::NameConflict
            }
        );
        assert_eq!(
            outcome_of(&plan, "myFont.ttf"),
            &Outcome::Rename {
                new_name: "myfont.ttf".to_string()
            }
        );
    }

    #[test]
    fn removal_word_inside_a_larger_token_survives() {
        let plan = plan(
            &[entry("Regularized.ttf")],
            &config(CaseMode::Camel, &["Regular"]),
        );
        assert_eq!(
            outcome_of(&plan, "Regularized.ttf"),
            &Outcome::Rename {
                new_name: "regularized.ttf".to_string()
            }
        );
    }

    #[test]
    fn entries_are_ordered_lexicographically() {
        let plan = plan(
            &[entry("b file.ttf"), entry("a file.ttf")],
            &config(CaseMode::Camel, &[]),
        );
        let order: Vec<&str> = plan.entries.iter().map(|e| e.entry.name.as_str()).collect();
        assert_eq!(order, vec!["a file.ttf", "b file.ttf"]);
    }

    #[test]
    fn planning_is_idempotent() {
        let listing = vec![
            entry("My_Font-Regular.ttf"),
            entry("Regular.ttf"),
            entry("my_font.ttf"),
            entry("My-Font.ttf"),
        ];
        let cfg = config(CaseMode::Camel, &["Regular"]);
        assert_eq!(plan(&listing, &cfg), plan(&listing, &cfg));
    }

    #[test]
    fn delimiter_runs_collapse_before_casing() {
        let plan = plan(
            &[entry("My__Font--Bold.ttf")],
            &config(CaseMode::Camel, &[]),
        );
        assert_eq!(
            outcome_of(&plan, "My__Font--Bold.ttf"),
            &Outcome::Rename {
                new_name: "myFontBold.ttf".to_string()
            }
        );
    }
}

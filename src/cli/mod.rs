//! Command-line interface definitions and dispatch

mod args;

pub use args::{Cli, Command};

use crate::convert::run_convert;
use crate::error::Result;
use crate::manifest::{run_manifest, ManifestConfig};
use crate::models::RenameConfig;
use crate::rename::run_rename;

/// Dispatch a parsed command line to the matching command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Rename {
            path,
            mode,
            mut remove,
            add_remove,
            dry_run,
        } => {
            remove.extend(add_remove);
            let config = RenameConfig::new(mode, remove, dry_run);
            run_rename(&path, &config)
        }
        Command::Manifest {
            path,
            json,
            css,
            src_prefix,
            family_names,
        } => {
            let config = ManifestConfig::new(json, css, src_prefix, family_names);
            run_manifest(&path, &config)
        }
        Command::Convert {
            input,
            output,
            batch,
        } => run_convert(&input, output.as_deref(), batch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use crate::models::CaseMode;

    #[test]
    fn rename_defaults() {
        let cli = Cli::parse_from(["fontprep", "rename"]);
        match cli.command {
            Command::Rename {
                path,
                mode,
                remove,
                add_remove,
                dry_run,
            } => {
                assert_eq!(path, std::path::PathBuf::from("."));
                assert_eq!(mode, CaseMode::Camel);
                assert_eq!(remove, vec!["Regular".to_string(), "Outline".to_string()]);
                assert!(add_remove.is_empty());
                assert!(!dry_run);
            }
            _ => panic!("expected rename command"),
        }
    }

    #[test]
    fn rename_flags_override_defaults() {
        let cli = Cli::parse_from([
            "fontprep", "rename", "fonts", "-m", "lower", "-r", "Bold", "Italic",
            "--add-remove", "Thin", "--dry-run",
        ]);
        match cli.command {
            Command::Rename {
                path,
                mode,
                remove,
                add_remove,
                dry_run,
            } => {
                assert_eq!(path, std::path::PathBuf::from("fonts"));
                assert_eq!(mode, CaseMode::Lower);
                assert_eq!(remove, vec!["Bold".to_string(), "Italic".to_string()]);
                assert_eq!(add_remove, vec!["Thin".to_string()]);
                assert!(dry_run);
            }
            _ => panic!("expected rename command"),
        }
    }

    #[test]
    fn bare_remove_flag_clears_the_default_list() {
        let cli = Cli::parse_from(["fontprep", "rename", "fonts", "-r"]);
        match cli.command {
            Command::Rename { remove, .. } => assert!(remove.is_empty()),
            _ => panic!("expected rename command"),
        }
    }

    #[test]
    fn convert_and_manifest_parse() {
        let cli = Cli::parse_from(["fontprep", "convert", "in", "-o", "out", "--batch"]);
        assert!(matches!(
            cli.command,
            Command::Convert { batch: true, .. }
        ));

        let cli = Cli::parse_from(["fontprep", "manifest", "fonts", "--family-names"]);
        match cli.command {
            Command::Manifest {
                json,
                css,
                src_prefix,
                family_names,
                ..
            } => {
                assert_eq!(json, std::path::PathBuf::from("fonts.json"));
                assert_eq!(css, std::path::PathBuf::from("font_definitions.css"));
                assert_eq!(src_prefix, "../../fonts/");
                assert!(family_names);
            }
            _ => panic!("expected manifest command"),
        }
    }
}

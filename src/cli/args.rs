use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{CaseMode, RenameConfig};

/// Top-level CLI for the FontPrep toolset.
#[derive(Debug, Parser)]
#[command(name = "fontprep")]
#[command(about = "Font asset pipeline tools: rename, manifest, convert", long_about = None)]
pub struct Cli {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize filenames in a directory (camelCase or lowercase)
    Rename {
        /// Directory containing the files to rename
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Naming mode
        #[arg(short, long, value_enum, default_value_t = CaseMode::Camel)]
        mode: CaseMode,

        /// Words to strip from filenames (whole-token, case-insensitive);
        /// passing -r with no words clears the default list
        #[arg(short, long, num_args = 0.., default_values_t = RenameConfig::default_remove_words())]
        remove: Vec<String>,

        /// Additional words appended to the removal list
        #[arg(long = "add-remove", num_args = 1..)]
        add_remove: Vec<String>,

        /// Show what would be renamed without touching the filesystem
        #[arg(short = 'd', long)]
        dry_run: bool,
    },

    /// Generate fonts.json and font_definitions.css from a folder of TTF files
    Manifest {
        /// Folder containing the TTF files
        path: PathBuf,

        /// Output path for the JSON manifest
        #[arg(long, default_value = "fonts.json")]
        json: PathBuf,

        /// Output path for the CSS definitions
        #[arg(long, default_value = "font_definitions.css")]
        css: PathBuf,

        /// URL prefix used in the generated src attributes
        #[arg(long, default_value = "../../fonts/")]
        src_prefix: String,

        /// Read display names from the font name table instead of the filename
        #[arg(long)]
        family_names: bool,
    },

    /// Convert OTF font containers to TTF
    Convert {
        /// Input OTF file, or a directory of OTF files
        input: PathBuf,

        /// Output file (single mode) or directory (batch mode)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Convert every OTF file in the input directory
        #[arg(short, long)]
        batch: bool,
    },
}

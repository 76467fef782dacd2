use std::fmt;

use clap::ValueEnum;

/// Case conversion applied to a cleaned filename stem
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseMode {
    /// "My_Font-Bold" becomes "myFontBold"
    Camel,
    /// "My Font Bold" becomes "my_font_bold"
    Lower,
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMode::Camel => write!(f, "camel"),
            CaseMode::Lower => write!(f, "lowercase"),
        }
    }
}

/// Configuration for a single renaming run
#[derive(Debug, Clone)]
pub struct RenameConfig {
    /// Case mode applied to cleaned stems
    pub mode: CaseMode,
    /// Whole-token, case-insensitive words stripped from stems before case conversion
    pub remove_words: Vec<String>,
    /// When set, report the plan without touching the filesystem
    pub dry_run: bool,
}

impl RenameConfig {
    /// Create a new configuration for one run
    pub fn new(mode: CaseMode, remove_words: Vec<String>, dry_run: bool) -> Self {
        Self {
            mode,
            remove_words,
            dry_run,
        }
    }

    /// Words stripped by default when the caller supplies none
    pub fn default_remove_words() -> Vec<String> {
        vec!["Regular".to_string(), "Outline".to_string()]
    }
}

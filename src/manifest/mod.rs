//! Manifest generation: JSON and CSS font definitions from a folder of TTF files

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::font;
use crate::utils::{list_files, title_case};

/// One font entry in the generated manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontEntry {
    /// Display name shown to users
    pub name: String,
    /// File name of the font on disk
    pub font: String,
}

/// Options for manifest generation
#[derive(Debug, Clone)]
pub struct ManifestConfig {
    /// Where the JSON manifest is written
    pub json_path: PathBuf,
    /// Where the CSS definitions are written
    pub css_path: PathBuf,
    /// URL prefix for the src attribute of generated @font-face rules
    pub src_prefix: String,
    /// Read display names from the font name table instead of the filename
    pub family_names: bool,
}

impl ManifestConfig {
    pub fn new(json_path: PathBuf, css_path: PathBuf, src_prefix: String, family_names: bool) -> Self {
        Self {
            json_path,
            css_path,
            src_prefix,
            family_names,
        }
    }
}

/// Convert a snake_case file stem to a Title Case display name.
pub fn display_name(stem: &str) -> String {
    title_case(&stem.replace('_', " "))
}

/// Scan a folder for TTF files and build manifest entries, sorted by file name.
pub fn collect_fonts(dir: &Path, config: &ManifestConfig) -> Result<Vec<FontEntry>> {
    let listing = list_files(dir)?;
    let mut entries = Vec::new();

    for file in &listing {
        if !file.extension.eq_ignore_ascii_case(".ttf") {
            continue;
        }
        let name = if config.family_names {
            embedded_family(&file.path).unwrap_or_else(|| display_name(&file.stem))
        } else {
            display_name(&file.stem)
        };
        entries.push(FontEntry {
            name,
            font: file.name.clone(),
        });
    }

    Ok(entries)
}

/// Family name from the font's name table, when the file parses as a font.
fn embedded_family(path: &Path) -> Option<String> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("could not read {}: {}", path.display(), e);
            return None;
        }
    };
    match font::parse_face(&data) {
        Ok(face) => font::family_name(&face),
        Err(e) => {
            tracing::warn!("{}: {}", path.display(), e);
            None
        }
    }
}

/// Render @font-face definitions for the collected fonts.
pub fn render_css(entries: &[FontEntry], src_prefix: &str) -> String {
    let mut css = String::new();
    for entry in entries {
        css.push_str(&format!(
            "@font-face {{\n    font-family: '{}';\n    src: url({}{});\n}}\n\n",
            entry.name, src_prefix, entry.font
        ));
    }
    css
}

/// Run the manifest command against a fonts folder.
pub fn run_manifest(dir: &Path, config: &ManifestConfig) -> Result<()> {
    let dir = dir
        .canonicalize()
        .map_err(|_| Error::InvalidPath(dir.to_path_buf()))?;
    let entries = collect_fonts(&dir, config)?;

    if entries.is_empty() {
        println!("Warning: No TTF files found in '{}'", dir.display());
    }
    for entry in &entries {
        println!("Added: {} -> {}", entry.name, entry.font);
    }

    let json = serde_json::to_string_pretty(&entries)?;
    fs::write(&config.json_path, json)?;
    fs::write(&config.css_path, render_css(&entries, &config.src_prefix))?;

    println!();
    println!("Files created:");
    println!("  JSON: {}", config.json_path.display());
    println!("  CSS:  {}", config.css_path.display());
    println!("Total fonts processed: {}", entries.len());

    Ok(())
}

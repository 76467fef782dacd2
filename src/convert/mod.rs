//! Font container conversion: OTF to TTF

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::font::{self, OutlineKind};
use crate::utils::{ensure_directory_exists, list_files};

/// Per-file results of a batch conversion run, in source order
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub results: Vec<(PathBuf, Result<PathBuf>)>,
}

impl BatchSummary {
    /// Files converted successfully
    pub fn converted(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.is_ok()).count()
    }

    /// Files attempted
    pub fn total(&self) -> usize {
        self.results.len()
    }
}

/// Convert a single font file, writing the result next to the input unless
/// an output path is given. Returns the output path.
///
/// The container bytes are carried over as-is after validation; CFF
/// outlines are not re-cut into quadratic splines.
pub fn convert_file(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    if !input.is_file() {
        return Err(Error::InvalidPath(input.to_path_buf()));
    }

    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    if ext != "otf" && ext != "ttf" {
        return Err(Error::Font(format!(
            "input must be an OTF or TTF file: {}",
            input.display()
        )));
    }

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("ttf"),
    };

    tracing::info!("loading font: {}", input.display());
    let data = fs::read(input)?;

    if !font::has_font_magic(&data) {
        return Err(Error::Font(format!(
            "unrecognized font container: {}",
            input.display()
        )));
    }

    let face = font::parse_face(&data)?;
    match font::outline_kind(&face) {
        OutlineKind::Postscript => tracing::info!("font has PostScript outlines (CFF)"),
        OutlineKind::TrueType => tracing::info!("font already has TrueType outlines"),
        OutlineKind::Unknown => tracing::warn!("font outline format not identified"),
    }

    if output.as_path() != input {
        tracing::info!("saving as: {}", output.display());
        fs::write(&output, &data)?;
    }
    Ok(output)
}

/// Find OTF files directly contained in a directory, sorted by name.
pub fn find_otf_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let listing = list_files(dir)?;
    Ok(listing
        .into_iter()
        .filter(|f| f.extension.eq_ignore_ascii_case(".otf"))
        .map(|f| f.path)
        .collect())
}

/// Convert every OTF file in a directory, continuing past per-file failures.
pub fn convert_batch(input_dir: &Path, output_dir: Option<&Path>) -> Result<BatchSummary> {
    let sources = find_otf_files(input_dir)?;

    let out_dir = match output_dir {
        Some(dir) => {
            ensure_directory_exists(dir)?;
            dir.to_path_buf()
        }
        None => input_dir.to_path_buf(),
    };

    let results: Vec<(PathBuf, Result<PathBuf>)> = sources
        .par_iter()
        .map(|src| {
            let name = src.file_name().map(Path::new).unwrap_or(src.as_path());
            let target = out_dir.join(name).with_extension("ttf");
            (src.clone(), convert_file(src, Some(&target)))
        })
        .collect();

    Ok(BatchSummary { results })
}

/// Run the convert command against a file or directory.
pub fn run_convert(input: &Path, output: Option<&Path>, batch: bool) -> Result<()> {
    if batch || input.is_dir() {
        let summary = convert_batch(input, output)?;
        if summary.total() == 0 {
            println!("No OTF files found in {}", input.display());
            return Ok(());
        }

        for (src, result) in &summary.results {
            match result {
                Ok(out) => println!("Converted: {} -> {}", src.display(), out.display()),
                Err(e) => println!("Failed to convert {}: {}", src.display(), e),
            }
        }
        println!();
        println!(
            "Batch conversion complete: {}/{} files converted",
            summary.converted(),
            summary.total()
        );
    } else {
        let out = convert_file(input, output)?;
        println!("Converted: {} -> {}", input.display(), out.display());
    }
    Ok(())
}

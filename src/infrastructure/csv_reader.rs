// src/infrastructure/csv_reader.rs
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::INPUT_EXTENSION;
use crate::domain::PaperRecord;

/// Rows of one export; a row that does not fit [`PaperRecord`] is kept as its error
pub type RecordRows = Vec<Result<PaperRecord, csv::Error>>;

/// Parse an export file into records
pub fn read_records(path: impl AsRef<Path>) -> Result<RecordRows> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open export file {}", path.display()))?;

    read_records_from_reader(file)
        .with_context(|| format!("Failed to parse export file {}", path.display()))
}

/// Parse export data from any reader.
///
/// Columns are matched by header name, so column order and extra columns do
/// not matter. A broken header fails the whole input; broken rows do not.
pub fn read_records_from_reader(reader: impl Read) -> Result<RecordRows> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    csv_reader
        .headers()
        .context("Failed to read CSV header row")?;

    Ok(csv_reader.deserialize::<PaperRecord>().collect())
}

/// List export files in `dir`, sorted by name.
///
/// Only direct children are considered unless `recursive` is set.
pub fn find_export_files(dir: impl AsRef<Path>, recursive: bool) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        bail!("Source directory not found: {}", dir.display());
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let entry = entry.context("Failed to read directory entry")?;
        if entry.file_type().is_file() && is_export_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_export_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION))
}

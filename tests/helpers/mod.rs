use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: &str = "\"Document Title\",\"Authors\",\"Author Affiliations\",\"Publication Title\",\"Date Added To Xplore\",\"Publication Year\",\"Start Page\",\"End Page\",\"Abstract\",\"DOI\",\"Author Keywords\",\"PDF Link\",\"Online Date\"";

/// Scratch workspace with export directories and an output directory
#[allow(dead_code)]
pub struct TestExports {
    _temp_dir: TempDir,
    pub root: PathBuf,
    pub output_dir: PathBuf,
}

#[allow(dead_code)]
impl TestExports {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let root = temp_dir.path().to_path_buf();
        let output_dir = root.join("results");

        Ok(Self {
            _temp_dir: temp_dir,
            root,
            output_dir,
        })
    }

    /// Copy the bundled sample export into a fresh source directory
    pub fn with_sample(&self, dir_name: &str) -> Result<PathBuf> {
        let dir = self.source_dir(dir_name)?;
        std::fs::copy(Self::fixture_path("tevc_sample.csv"), dir.join("tevc_sample.csv"))
            .context("Failed to copy sample export fixture")?;
        Ok(dir)
    }

    /// Write an export file made of the common header plus `rows`
    pub fn write_export(&self, dir_name: &str, file_name: &str, rows: &[&str]) -> Result<PathBuf> {
        let dir = self.source_dir(dir_name)?;
        let mut content = format!("{}\n", HEADER);
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        let path = dir.join(file_name);
        std::fs::write(&path, content).context("Failed to write export file")?;
        Ok(path)
    }

    /// Names of the notes written so far, sorted
    pub fn note_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.output_dir).context("Failed to read output dir")? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    pub fn read_note(&self, name: &str) -> Result<String> {
        std::fs::read_to_string(self.output_dir.join(name))
            .with_context(|| format!("Failed to read note {}", name))
    }

    fn source_dir(&self, dir_name: &str) -> Result<PathBuf> {
        let dir = self.root.join(dir_name);
        std::fs::create_dir_all(&dir).context("Failed to create source directory")?;
        Ok(dir)
    }

    fn fixture_path(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }
}

/// One export row in `HEADER` column order
#[allow(dead_code)]
pub fn row(title: &str, authors: &str, date_added: &str, start: &str, end: &str) -> String {
    format!(
        "\"{}\",\"{}\",\"Univ A; Univ B\",\"IEEE Transactions on Evolutionary Computation\",\"{}\",\"2021\",\"{}\",\"{}\",\"Abstract.\",\"10.1109/TEVC.2021.1\",\"alpha;beta\",\"https://ieeexplore.ieee.org/1\",\"2020-10-01\"",
        title, authors, date_added, start, end
    )
}

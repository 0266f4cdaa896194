// src/infrastructure/note_writer.rs
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::application::NoteSink;
use crate::domain::FormattedNote;

/// Writes notes as UTF-8 Markdown files into one output directory
#[derive(Debug)]
pub struct FileNoteSink {
    output_dir: PathBuf,
}

impl FileNoteSink {
    /// Create the sink, creating `output_dir` and its parents if needed
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&output_dir).with_context(|| {
            format!("Failed to create output directory {}", output_dir.display())
        })?;
        debug!(output_dir = %output_dir.display(), "Output directory ready");

        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl NoteSink for FileNoteSink {
    #[instrument(level = "trace", skip(self, note), fields(file = note.file_name()))]
    fn write_note(&mut self, note: &FormattedNote) -> Result<PathBuf> {
        let file_path = self.output_dir.join(note.file_name());

        File::create(&file_path)
            .with_context(|| format!("Failed to create note file at {}", file_path.display()))?
            .write_all(note.render().as_bytes())
            .with_context(|| format!("Failed to write note to {}", file_path.display()))?;

        Ok(file_path)
    }
}

/// Prints notes instead of writing them, for previews
pub struct StdoutNoteSink<W: Write> {
    out: W,
}

impl StdoutNoteSink<std::io::Stdout> {
    pub fn new() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl Default for StdoutNoteSink<std::io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdoutNoteSink<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NoteSink for StdoutNoteSink<W> {
    fn write_note(&mut self, note: &FormattedNote) -> Result<PathBuf> {
        writeln!(self.out, "==> {}\n", note.file_name())
            .and_then(|_| self.out.write_all(note.render().as_bytes()))
            .context("Failed to print note")?;

        Ok(PathBuf::from(note.file_name()))
    }
}

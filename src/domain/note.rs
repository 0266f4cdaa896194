// src/domain/note.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A rendered paper note: ordered `(label, value)` sections plus the file
/// name it is written under. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedNote {
    title: String,
    file_name: String,
    sections: Vec<(String, String)>,
}

impl FormattedNote {
    pub fn new(
        title: impl Into<String>,
        file_name: impl Into<String>,
        sections: Vec<(String, String)>,
    ) -> Self {
        Self {
            title: title.into(),
            file_name: file_name.into(),
            sections,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn sections(&self) -> &[(String, String)] {
        &self.sections
    }

    /// Value of the section with the given label
    pub fn section(&self, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    /// Serialize as `**label**: value` paragraphs separated by blank lines
    pub fn render(&self) -> String {
        self.sections
            .iter()
            .map(|(label, value)| format!("**{}**: {}\n\n", label, value))
            .collect()
    }
}

/// Result of pushing one record through the formatter and sink.
#[derive(Debug, Clone, PartialEq)]
pub enum NoteOutcome {
    Written(PathBuf),
    Skipped,
    Malformed(String),
    Failed(String),
}

/// Running counters of a batch conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub files_read: usize,
    pub written: usize,
    pub skipped: usize,
    pub malformed: usize,
    pub failed: usize,
}

impl ConversionSummary {
    pub fn record(&mut self, outcome: &NoteOutcome) {
        match outcome {
            NoteOutcome::Written(_) => self.written += 1,
            NoteOutcome::Skipped => self.skipped += 1,
            NoteOutcome::Malformed(_) => self.malformed += 1,
            NoteOutcome::Failed(_) => self.failed += 1,
        }
    }
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Skipped {} records, generated {} notes",
            self.skipped, self.written
        )?;
        if self.malformed > 0 || self.failed > 0 {
            write!(f, " ({} malformed, {} failed)", self.malformed, self.failed)?;
        }
        Ok(())
    }
}

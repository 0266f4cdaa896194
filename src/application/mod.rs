// src/application/mod.rs
pub mod batch_converter;
pub mod note_formatter;

use crate::domain::FormattedNote;
use anyhow::Result;
use std::path::PathBuf;

pub use batch_converter::BatchConverter;
pub use note_formatter::{FilenameScheme, FormatOptions, Formatted, NoteFormatter};

/// Destination for finished notes
pub trait NoteSink {
    /// Persist a note, replacing any previous note of the same name.
    /// Returns where the note ended up.
    fn write_note(&mut self, note: &FormattedNote) -> Result<PathBuf>;
}

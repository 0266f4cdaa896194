// src/domain/mod.rs
pub mod error;
pub mod note;
pub mod record;

pub use error::RecordError;
pub use note::{ConversionSummary, FormattedNote, NoteOutcome};
pub use record::PaperRecord;

// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Malformed page range '{start}'-'{end}' for '{title}'")]
    MalformedPages {
        title: String,
        start: String,
        end: String,
    },
    #[error("Malformed row in {file}: {message}")]
    MalformedRow { file: String, message: String },
    #[error("Failed to write note '{title}': {message}")]
    WriteFailed { title: String, message: String },
}

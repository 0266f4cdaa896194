// src/infrastructure/mod.rs
pub mod config;
pub mod csv_reader;
pub mod note_writer;

pub use config::Config;
pub use note_writer::{FileNoteSink, StdoutNoteSink};

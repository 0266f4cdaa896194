// src/util/testing.rs

use anyhow::{anyhow, Result};
use std::collections::HashSet;
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteSink;
use crate::domain::FormattedNote;

/// In-memory sink for exercising the batch converter without a filesystem
///
/// # Examples
///
/// ```
/// use papernote::util::testing::MockNoteSink;
///
/// let sink = MockNoteSink::builder()
///     .with_write_failure("2023 - Locked.md")
///     .build();
/// assert!(sink.written().is_empty());
/// ```
pub struct MockNoteSink {
    written: Vec<FormattedNote>,
    failing: HashSet<String>,
}

impl MockNoteSink {
    pub fn builder() -> MockNoteSinkBuilder {
        MockNoteSinkBuilder::new()
    }

    /// Notes accepted so far, in write order
    pub fn written(&self) -> &[FormattedNote] {
        &self.written
    }
}

impl NoteSink for MockNoteSink {
    fn write_note(&mut self, note: &FormattedNote) -> Result<PathBuf> {
        if self.failing.contains(note.file_name()) {
            return Err(anyhow!("Permission denied: {}", note.file_name()));
        }
        self.written.push(note.clone());
        Ok(PathBuf::from(note.file_name()))
    }
}

/// Builder for MockNoteSink
pub struct MockNoteSinkBuilder {
    failing: HashSet<String>,
}

impl MockNoteSinkBuilder {
    pub fn new() -> Self {
        Self {
            failing: HashSet::new(),
        }
    }

    /// Make writes of the note with this file name fail
    pub fn with_write_failure(mut self, file_name: impl Into<String>) -> Self {
        self.failing.insert(file_name.into());
        self
    }

    pub fn build(self) -> MockNoteSink {
        MockNoteSink {
            written: Vec::new(),
            failing: self.failing,
        }
    }
}

impl Default for MockNoteSinkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["walkdir"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

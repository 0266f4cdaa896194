// src/application/batch_converter.rs
use crate::application::note_formatter::{FormatOptions, Formatted, NoteFormatter};
use crate::application::NoteSink;
use crate::domain::{ConversionSummary, NoteOutcome, PaperRecord, RecordError};
use crate::infrastructure::csv_reader::{self, RecordRows};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Drives a conversion: source directories -> export files -> records -> notes
pub struct BatchConverter<S: NoteSink> {
    sink: S,
    formatter: NoteFormatter,
    fail_fast: bool,
    summary: ConversionSummary,
    errors: Vec<String>,
}

impl<S: NoteSink> BatchConverter<S> {
    /// Create a converter writing through `sink`.
    ///
    /// With `fail_fast` the first malformed record or failed write aborts the
    /// run; otherwise it is logged, counted and the batch continues.
    pub fn new(sink: S, options: FormatOptions, fail_fast: bool) -> Self {
        Self {
            sink,
            formatter: NoteFormatter::new(options),
            fail_fast,
            summary: ConversionSummary::default(),
            errors: Vec::new(),
        }
    }

    pub fn summary(&self) -> &ConversionSummary {
        &self.summary
    }

    /// Messages for every record or file that did not produce a note
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Convert every export file found in `source_dirs`
    pub fn convert_dirs(
        &mut self,
        source_dirs: &[PathBuf],
        recursive: bool,
    ) -> Result<ConversionSummary> {
        for dir in source_dirs {
            let files = csv_reader::find_export_files(dir, recursive)
                .with_context(|| format!("Failed to scan source directory {}", dir.display()))?;
            debug!(dir = %dir.display(), count = files.len(), "Found export files");

            for file in files {
                self.convert_file(&file)?;
            }
        }

        info!(
            files = self.summary.files_read,
            written = self.summary.written,
            skipped = self.summary.skipped,
            malformed = self.summary.malformed,
            failed = self.summary.failed,
            "Conversion finished"
        );
        Ok(self.summary.clone())
    }

    /// Convert all rows of a single export file
    pub fn convert_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!(file = %path.display(), "Reading export file");

        let records = match csv_reader::read_records(path) {
            Ok(records) => records,
            Err(e) if self.fail_fast => return Err(e),
            Err(e) => {
                let message = format!("{}: {:#}", path.display(), e);
                warn!(%message, "Skipping unreadable export file");
                self.errors.push(message);
                self.summary.failed += 1;
                return Ok(());
            }
        };
        self.summary.files_read += 1;

        self.convert_rows(path, records)
    }

    /// Convert rows already read from `origin`
    pub fn convert_rows(&mut self, origin: &Path, records: RecordRows) -> Result<()> {
        for (index, record) in records.into_iter().enumerate() {
            match record {
                Ok(record) => {
                    self.process_record(record)?;
                }
                Err(e) => {
                    let error = RecordError::MalformedRow {
                        file: origin.display().to_string(),
                        message: format!("row {}: {}", index + 1, e),
                    };
                    self.reject(NoteOutcome::Malformed(error.to_string()), error)?;
                }
            }
        }

        Ok(())
    }

    /// Format one record and hand the note to the sink
    pub fn process_record(&mut self, record: PaperRecord) -> Result<NoteOutcome> {
        match self.formatter.format(record) {
            Ok(Formatted::Skipped { .. }) => {
                let outcome = NoteOutcome::Skipped;
                self.summary.record(&outcome);
                Ok(outcome)
            }
            Ok(Formatted::Note(note)) => match self.sink.write_note(&note) {
                Ok(path) => {
                    debug!(path = %path.display(), "Wrote note");
                    let outcome = NoteOutcome::Written(path);
                    self.summary.record(&outcome);
                    Ok(outcome)
                }
                Err(e) => {
                    let error = RecordError::WriteFailed {
                        title: note.title().to_string(),
                        message: format!("{:#}", e),
                    };
                    self.reject(NoteOutcome::Failed(error.to_string()), error)
                }
            },
            Err(error) => self.reject(NoteOutcome::Malformed(error.to_string()), error),
        }
    }

    fn reject(&mut self, outcome: NoteOutcome, error: RecordError) -> Result<NoteOutcome> {
        if self.fail_fast {
            return Err(error.into());
        }
        warn!(%error, "Record did not produce a note");
        self.errors.push(error.to_string());
        self.summary.record(&outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MockNoteSink;

    fn paper(title: &str) -> PaperRecord {
        PaperRecord {
            title: Some(title.to_string()),
            authors: Some("A. Author".to_string()),
            publication_year: Some(2022),
            start_page: Some("1".to_string()),
            end_page: Some("12".to_string()),
            date_added: Some("2022-02-01".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn given_paper_when_processing_then_writes_note_and_counts_it() {
        let mut converter =
            BatchConverter::new(MockNoteSink::builder().build(), FormatOptions::default(), false);

        let outcome = converter.process_record(paper("Paper One")).unwrap();

        assert_eq!(
            outcome,
            NoteOutcome::Written(PathBuf::from("2022-02-01 - Paper One.md"))
        );
        assert_eq!(converter.summary().written, 1);
        assert_eq!(converter.sink().written().len(), 1);
    }

    #[test]
    fn given_non_paper_when_processing_then_skips_without_writing() {
        let mut converter =
            BatchConverter::new(MockNoteSink::builder().build(), FormatOptions::default(), false);

        let outcome = converter
            .process_record(PaperRecord {
                title: Some("Front Cover".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(outcome, NoteOutcome::Skipped);
        assert_eq!(converter.summary().skipped, 1);
        assert!(converter.sink().written().is_empty());
    }

    #[test]
    fn given_malformed_pages_when_processing_then_counts_malformed_and_continues() {
        let mut converter =
            BatchConverter::new(MockNoteSink::builder().build(), FormatOptions::default(), false);
        let broken = PaperRecord {
            start_page: Some("S1".to_string()),
            ..paper("Broken")
        };

        let outcome = converter.process_record(broken).unwrap();
        converter.process_record(paper("Fine")).unwrap();

        assert!(matches!(outcome, NoteOutcome::Malformed(_)));
        assert_eq!(converter.summary().malformed, 1);
        assert_eq!(converter.summary().written, 1);
        assert_eq!(converter.errors().len(), 1);
        assert!(converter.errors()[0].contains("Broken"));
    }

    #[test]
    fn given_fail_fast_when_processing_malformed_then_returns_error() {
        let mut converter =
            BatchConverter::new(MockNoteSink::builder().build(), FormatOptions::default(), true);
        let broken = PaperRecord {
            end_page: Some("?".to_string()),
            ..paper("Broken")
        };

        let result = converter.process_record(broken);

        assert!(result.is_err());
        assert_eq!(converter.summary().malformed, 0);
    }

    #[test]
    fn given_row_with_invalid_utf8_when_converting_rows_then_reports_malformed_row() {
        let mut data = b"Document Title,Authors,Start Page,End Page\nGood,A,1,2\n".to_vec();
        data.extend_from_slice(b"Bad\xff\xfe,A,1,2\nAlso Good,B,3,4\n");
        let rows = csv_reader::read_records_from_reader(data.as_slice()).unwrap();
        let mut converter =
            BatchConverter::new(MockNoteSink::builder().build(), FormatOptions::default(), false);

        converter
            .convert_rows(Path::new("issue1.csv"), rows)
            .unwrap();

        assert_eq!(converter.summary().malformed, 1);
        assert_eq!(converter.summary().written, 2);
        assert_eq!(converter.errors().len(), 1);
        assert!(converter.errors()[0].contains("issue1.csv"));
        assert!(converter.errors()[0].contains("row 2"));
    }

    #[test]
    fn given_fail_fast_when_converting_invalid_row_then_returns_error() {
        let data = b"Document Title,Authors,Start Page,End Page\nBad\xff,A,1,2\n".to_vec();
        let rows = csv_reader::read_records_from_reader(data.as_slice()).unwrap();
        let mut converter =
            BatchConverter::new(MockNoteSink::builder().build(), FormatOptions::default(), true);

        let result = converter.convert_rows(Path::new("issue1.csv"), rows);

        assert!(result.is_err());
    }

    #[test]
    fn given_failing_sink_when_processing_then_reports_failure_with_title() {
        let sink = MockNoteSink::builder()
            .with_write_failure("2022-02-01 - Locked.md")
            .build();
        let mut converter = BatchConverter::new(sink, FormatOptions::default(), false);

        let outcome = converter.process_record(paper("Locked")).unwrap();

        match outcome {
            NoteOutcome::Failed(message) => assert!(message.contains("Locked")),
            other => panic!("Expected failure, got {:?}", other),
        }
        assert_eq!(converter.summary().failed, 1);
        assert_eq!(converter.summary().written, 0);
    }
}

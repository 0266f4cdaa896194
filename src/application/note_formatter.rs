// src/application/note_formatter.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::constants::*;
use crate::domain::{FormattedNote, PaperRecord, RecordError};
use crate::util::text::{sanitize_title, split_entries, strip_tex_commands};

/// How the leading segment of a note's file name is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FilenameScheme {
    /// Publication date, with an early access marker when there is no formal date
    #[default]
    Date,
    /// Publication year only
    Year,
}

/// Switches between the note layouts the formatter can produce
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FormatOptions {
    #[serde(default)]
    pub filename_scheme: FilenameScheme,
    #[serde(default = "default_true")]
    pub mirror_links: bool,
    #[serde(default = "default_mirror_base_url")]
    pub mirror_base_url: String,
    #[serde(default = "default_true")]
    pub progress_marker: bool,
    #[serde(default = "default_true")]
    pub trim_whitespace: bool,
    /// Render the title as `[title](pdf link) (year)`
    #[serde(default)]
    pub linked_title: bool,
}

fn default_true() -> bool { true }
fn default_mirror_base_url() -> String { DEFAULT_MIRROR_BASE_URL.to_string() }

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            filename_scheme: FilenameScheme::default(),
            mirror_links: default_true(),
            mirror_base_url: default_mirror_base_url(),
            progress_marker: default_true(),
            trim_whitespace: default_true(),
            linked_title: false,
        }
    }
}

/// What the formatter made of a record
#[derive(Debug, Clone, PartialEq)]
pub enum Formatted {
    Note(FormattedNote),
    Skipped { title: String },
}

/// Publication date as far as the export can tell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationDate {
    Formal {
        formal: NaiveDate,
        online: Option<NaiveDate>,
    },
    EarlyAccess {
        online: NaiveDate,
    },
    Unknown,
}

impl PublicationDate {
    pub fn resolve(record: &PaperRecord) -> Self {
        match (record.formal_date(), record.online_date()) {
            (Some(formal), online) => Self::Formal { formal, online },
            (None, Some(online)) => Self::EarlyAccess { online },
            (None, None) => Self::Unknown,
        }
    }

    pub fn is_early_access(&self) -> bool {
        matches!(self, Self::EarlyAccess { .. })
    }

    /// Text shown in the date section
    pub fn label(&self, year: Option<i32>) -> String {
        match self {
            Self::Formal {
                formal,
                online: Some(online),
            } => format!(
                "{}: {}; {}: {}",
                ONLINE_DATE_PREFIX, online, FORMAL_DATE_PREFIX, formal
            ),
            Self::Formal {
                formal,
                online: None,
            } => format!("{}: {}", FORMAL_DATE_PREFIX, formal),
            Self::EarlyAccess { online } => format!(
                "{}: {}; {}: {}",
                ONLINE_DATE_PREFIX, online, FORMAL_DATE_PREFIX, NOT_YET_PUBLISHED
            ),
            Self::Unknown => year_text(year),
        }
    }

    /// Leading segment of the note file name
    pub fn file_segment(&self, scheme: FilenameScheme, year: Option<i32>) -> String {
        match (scheme, self) {
            (FilenameScheme::Year, _) | (FilenameScheme::Date, Self::Unknown) => year_text(year),
            (FilenameScheme::Date, Self::Formal { formal, .. }) => formal.to_string(),
            (FilenameScheme::Date, Self::EarlyAccess { online }) => {
                format!("{} {}", online, EARLY_ACCESS_MARKER)
            }
        }
    }
}

fn year_text(year: Option<i32>) -> String {
    year.map(|y| y.to_string())
        .unwrap_or_else(|| "undated".to_string())
}

/// Turns export rows into paper notes
pub struct NoteFormatter {
    options: FormatOptions,
}

impl NoteFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Format one record.
    ///
    /// Records without authors come back as [`Formatted::Skipped`]. A page
    /// range that is not numeric yields [`RecordError::MalformedPages`].
    pub fn format(&self, record: PaperRecord) -> Result<Formatted, RecordError> {
        if !record.is_paper() {
            info!(title = record.title(), "Skipping record without authors");
            return Ok(Formatted::Skipped {
                title: record.title().to_string(),
            });
        }

        let date = PublicationDate::resolve(&record);
        if date.is_early_access() {
            debug!(title = record.title(), "No formal publication date, treating as early access");
        }

        let file_name = format!(
            "{} - {}.{}",
            date.file_segment(self.options.filename_scheme, record.publication_year),
            file_stem(&record),
            NOTE_EXTENSION
        );

        let num_pages = page_count(&record)?;
        let display_title = strip_tex_commands(record.title()).trim().to_string();

        let mut sections = vec![
            (LABEL_TITLE.to_string(), self.format_title(&display_title, &record)),
            (LABEL_DATE.to_string(), date.label(record.publication_year)),
            (LABEL_JOURNAL.to_string(), record.publication_title().to_string()),
            (LABEL_AUTHORS.to_string(), self.format_authors(&record)),
            (LABEL_ABSTRACT.to_string(), record.abstract_text().to_string()),
            (LABEL_KEYWORDS.to_string(), self.format_keywords(record.keywords())),
            (LABEL_PAGES.to_string(), num_pages.to_string()),
            (LABEL_LINKS.to_string(), self.format_links(&record)),
        ];
        if self.options.progress_marker {
            sections.push((LABEL_PROGRESS.to_string(), PROGRESS_MARKER.to_string()));
        }

        debug!(?file_name, "Formatted note");
        Ok(Formatted::Note(FormattedNote::new(
            display_title,
            file_name,
            sections,
        )))
    }

    /// Plain title, or `[title](pdf link) (year)` when linked titles are on
    pub fn format_title(&self, title: &str, record: &PaperRecord) -> String {
        let pdf_link = record.pdf_link().trim();
        if !self.options.linked_title || pdf_link.is_empty() {
            return title.to_string();
        }
        match record.publication_year {
            Some(year) => format!("[{}]({}) ({})", title, pdf_link, year),
            None => format!("[{}]({})", title, pdf_link),
        }
    }

    /// Author list followed by one numbered, italic line per affiliation
    pub fn format_authors(&self, record: &PaperRecord) -> String {
        let authors = record.authors().unwrap_or("");
        let affiliations = match record.affiliations() {
            Some(text) if self.options.trim_whitespace => split_entries(text, ";", true),
            Some(text) => split_entries(text, "; ", false),
            None => Vec::new(),
        };

        affiliations
            .iter()
            .enumerate()
            .fold(authors.to_string(), |mut out, (i, affiliation)| {
                out.push_str(&format!("\n*{} - {}*", i + 1, affiliation));
                out
            })
    }

    /// Keywords as inline code spans joined by `"; "`
    pub fn format_keywords(&self, keywords: Option<&str>) -> String {
        let keywords = keywords.unwrap_or(MISSING_KEYWORDS);
        split_entries(keywords, ";", self.options.trim_whitespace)
            .iter()
            .map(|k| format!("`{}`", k))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// PDF link plus, when enabled, a mirror link built from the DOI
    pub fn format_links(&self, record: &PaperRecord) -> String {
        let mut links = Vec::new();
        let pdf_link = record.pdf_link().trim();
        if !pdf_link.is_empty() {
            links.push(format!("[{}]({})", PDF_LINK_TEXT, pdf_link));
        }
        if self.options.mirror_links {
            if let Some(doi) = record.doi() {
                links.push(format!(
                    "[{}]({}{})",
                    MIRROR_LINK_TEXT, self.options.mirror_base_url, doi
                ));
            }
        }
        links.join(" | ")
    }
}

impl Default for NoteFormatter {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}

/// Title part of the file name.
///
/// Untitled papers are named after their DOI so they do not collide.
fn file_stem(record: &PaperRecord) -> String {
    let stem = sanitize_title(record.title()).trim().to_string();
    if !stem.is_empty() {
        return stem;
    }
    match record.doi() {
        Some(doi) => {
            warn!(doi, "Paper has no title, naming note after its DOI");
            sanitize_title(doi)
        }
        None => {
            warn!(
                authors = record.authors().unwrap_or(""),
                "Paper has neither title nor DOI, note name may collide"
            );
            UNTITLED.to_string()
        }
    }
}

/// Inclusive page count of the record's page range.
///
/// An end page before the start page is malformed.
pub fn page_count(record: &PaperRecord) -> Result<i64, RecordError> {
    let start = record.start_page().trim();
    let end = record.end_page().trim();

    match (start.parse::<i64>(), end.parse::<i64>()) {
        (Ok(first), Ok(last)) if last >= first => Ok(last - first + 1),
        _ => Err(RecordError::MalformedPages {
            title: record.title().to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }),
    }
}

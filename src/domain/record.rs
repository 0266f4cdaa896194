// src/domain/record.rs
use chrono::NaiveDate;
use serde::Deserialize;

use crate::util::date::parse_export_date;

/// One row of an IEEE Xplore style metadata export.
///
/// Every column is optional: exports mix papers with front matter rows
/// (editorials, tables of contents) that leave most cells empty.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PaperRecord {
    #[serde(rename = "Document Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Authors", default)]
    pub authors: Option<String>,
    #[serde(rename = "Author Affiliations", default)]
    pub affiliations: Option<String>,
    #[serde(rename = "Publication Title", default)]
    pub publication_title: Option<String>,
    #[serde(
        rename = "Publication Year",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub publication_year: Option<i32>,
    #[serde(rename = "Start Page", default)]
    pub start_page: Option<String>,
    #[serde(rename = "End Page", default)]
    pub end_page: Option<String>,
    #[serde(rename = "Abstract", default)]
    pub abstract_text: Option<String>,
    #[serde(rename = "Author Keywords", default)]
    pub keywords: Option<String>,
    #[serde(rename = "PDF Link", default)]
    pub pdf_link: Option<String>,
    #[serde(rename = "DOI", default)]
    pub doi: Option<String>,
    #[serde(rename = "Date Added To Xplore", default)]
    pub date_added: Option<String>,
    #[serde(rename = "Online Date", default)]
    pub online_date: Option<String>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

impl PaperRecord {
    pub fn title(&self) -> &str {
        present(&self.title).unwrap_or("")
    }

    pub fn authors(&self) -> Option<&str> {
        present(&self.authors)
    }

    /// Rows without authors are front matter, not papers.
    pub fn is_paper(&self) -> bool {
        self.authors().is_some()
    }

    pub fn affiliations(&self) -> Option<&str> {
        present(&self.affiliations)
    }

    pub fn publication_title(&self) -> &str {
        present(&self.publication_title).unwrap_or("")
    }

    pub fn abstract_text(&self) -> &str {
        present(&self.abstract_text).unwrap_or("")
    }

    pub fn keywords(&self) -> Option<&str> {
        present(&self.keywords)
    }

    pub fn pdf_link(&self) -> &str {
        present(&self.pdf_link).unwrap_or("")
    }

    pub fn doi(&self) -> Option<&str> {
        present(&self.doi).map(str::trim)
    }

    pub fn start_page(&self) -> &str {
        present(&self.start_page).unwrap_or("")
    }

    pub fn end_page(&self) -> &str {
        present(&self.end_page).unwrap_or("")
    }

    /// Formal publication date; `None` for early access items.
    pub fn formal_date(&self) -> Option<NaiveDate> {
        present(&self.date_added).and_then(parse_export_date)
    }

    pub fn online_date(&self) -> Option<NaiveDate> {
        present(&self.online_date).and_then(parse_export_date)
    }
}

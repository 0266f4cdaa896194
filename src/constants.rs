// src/constants.rs
//
// Note labels and fixed strings shared by the formatter, the writers and tests.

/// Section labels, in the order they appear in a note.
pub const LABEL_TITLE: &str = "论文题目";
pub const LABEL_DATE: &str = "发表日期";
pub const LABEL_JOURNAL: &str = "期刊名";
pub const LABEL_AUTHORS: &str = "作者";
pub const LABEL_ABSTRACT: &str = "摘要";
pub const LABEL_KEYWORDS: &str = "关键字";
pub const LABEL_PAGES: &str = "页数";
pub const LABEL_LINKS: &str = "下载链接";
pub const LABEL_PROGRESS: &str = "阅读进度";

/// Date label prefixes
pub const ONLINE_DATE_PREFIX: &str = "在线发表";
pub const FORMAL_DATE_PREFIX: &str = "正式发表";

/// Shown in place of the formal date for early access items
pub const NOT_YET_PUBLISHED: &str = "尚未正式发表 (Early Access)";

/// Appended to the date segment of early access file names
pub const EARLY_ACCESS_MARKER: &str = "Early Access";

/// Placeholder used when a record has no author keywords.
///
/// It goes through keyword splitting like any other value.
pub const MISSING_KEYWORDS: &str = "missing";

/// Unchecked reading checklist item
pub const PROGRESS_MARKER: &str = "- [ ] 已读完";

pub const PDF_LINK_TEXT: &str = "PDF";
pub const MIRROR_LINK_TEXT: &str = "Mirror";

/// Base URL the DOI is appended to for the secondary download link
pub const DEFAULT_MIRROR_BASE_URL: &str = "https://doi.org/";

/// File name stem for papers with neither title nor DOI
pub const UNTITLED: &str = "untitled";

pub const NOTE_EXTENSION: &str = "md";
pub const INPUT_EXTENSION: &str = "csv";

// src/util/text.rs
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TEX_COMMAND_REGEX: Regex =
        Regex::new(r"\\[a-zA-Z]+\s*").expect("Failed to compile TeX command regex");
}

/// Characters that are illegal or awkward in file names on common platforms
pub const ILLEGAL_FILENAME_CHARS: &[char] = &['*', ':', '?', '"', '<', '>', '/', '|'];

/// Remove TeX-style directives such as `\textbf ` left over from typesetting.
///
/// # Examples
///
/// ```
/// use papernote::util::text::strip_tex_commands;
///
/// assert_eq!(strip_tex_commands(r"\textbf Evolutionary Search"), "Evolutionary Search");
/// ```
pub fn strip_tex_commands(text: &str) -> String {
    TEX_COMMAND_REGEX.replace_all(text, "").into_owned()
}

/// Make a paper title usable as a file name.
///
/// TeX directives are dropped first, then every character in
/// [`ILLEGAL_FILENAME_CHARS`] becomes an underscore.
///
/// # Examples
///
/// ```
/// use papernote::util::text::sanitize_title;
///
/// assert_eq!(sanitize_title("MOEA/D: A Survey?"), "MOEA_D_ A Survey_");
/// ```
pub fn sanitize_title(title: &str) -> String {
    strip_tex_commands(title).replace(ILLEGAL_FILENAME_CHARS, "_")
}

/// Split a delimiter-joined cell into entries.
///
/// With `trim` set each entry is trimmed and empty entries are dropped;
/// otherwise entries are returned exactly as they appear between separators.
pub fn split_entries(text: &str, separator: &str, trim: bool) -> Vec<String> {
    let parts = text.split(separator);
    if trim {
        parts
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        parts.map(str::to_string).collect()
    }
}

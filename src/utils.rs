// src/utils.rs
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*?>").expect("Invalid regex pattern"));

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\(\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+")
        .expect("Invalid regex pattern")
});

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9 ]").expect("Invalid regex pattern"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("Invalid regex pattern"));

/// Strip markup, URLs and punctuation from scraped text.
///
/// The result only contains ASCII letters, digits and single spaces, with no
/// leading or trailing space. Applying it twice gives the same result.
pub fn clean_text(text: &str) -> String {
    let text = TAG_PATTERN.replace_all(text, "");
    let text = URL_PATTERN.replace_all(&text, "");
    let text = NON_ALPHANUMERIC.replace_all(&text, "");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

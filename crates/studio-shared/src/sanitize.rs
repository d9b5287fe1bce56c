//! Input sanitizers mirroring the host's sanitizer semantics.
//!
//! Everything a request can influence passes through one of these before it is
//! compared against schema names or placed into a selector.

use once_cell::sync::Lazy;
use regex::Regex;

const MAX_NAME_LENGTH: usize = 128;
const MAX_TEXT_LENGTH: usize = 255;

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

fn name_filter(value: &str, extra: &[char]) -> String {
    let mapped: String = value
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || extra.contains(&c) {
                c
            } else {
                '_'
            }
        })
        .collect();
    mapped
        .trim_matches('_')
        .chars()
        .take(MAX_NAME_LENGTH)
        .collect()
}

/// Sanitize to a field-name token: `[A-Za-z0-9_]`, max 128 characters.
pub fn field_name(value: &str) -> String {
    name_filter(value, &[])
}

/// Sanitize to a page/template name token: `[A-Za-z0-9_.-]`, max 128 characters.
pub fn name(value: &str) -> String {
    name_filter(value, &['-', '.'])
}

/// Single-line plain text: markup removed, line breaks collapsed, max 255 characters.
pub fn text(value: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(value, "");
    let single_line: String = stripped
        .chars()
        .map(|c| if matches!(c, '\r' | '\n' | '\t') { ' ' } else { c })
        .collect();
    single_line.trim().chars().take(MAX_TEXT_LENGTH).collect()
}

/// Collapse whitespace so text is safe inside a one-line code comment.
pub fn comment_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

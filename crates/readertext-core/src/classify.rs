//! Line classification predicates.
//!
//! Four independent boolean predicates over a single text line:
//! [`looks_like_header_or_footer`], [`is_code_like`], [`is_list_like`],
//! and [`is_heading_like`]. Nothing is cached on a line; classification is
//! recomputed from content wherever it is needed.
//!
//! During reflow the predicates are consulted in a fixed priority order
//! (code, then heading, then list) so that short indented headings or
//! numbered headings are not misrouted as list items.

use std::sync::OnceLock;

use regex::Regex;

/// Running header like "8 Chapter 1 The Role of Algorithms in Computing".
fn chapter_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^\d+\s+(Chapter|Part)\s+\d+\b").unwrap())
}

/// Section header with trailing page number, like "1.1 Algorithms 7".
fn section_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+(\.\d+)*\s+.+\s+\d{1,4}$").unwrap())
}

/// "Chapter"/"Part" at the start of a line, as a whole word.
fn chapter_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^(Chapter|Part)\b").unwrap())
}

/// Dotted section number followed by content, like "1.2.3 Lower bounds".
fn section_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+(\.\d+)*\s+\S").unwrap())
}

/// Returns whether a line looks like running page furniture (header/footer).
///
/// Matches: a bare 1–4 digit page number; a `<n> Chapter <n> ...` /
/// `<n> Part <n> ...` running header; or a section title with a trailing
/// 1–4 digit page number, provided the line has at least 6 alphabetic
/// characters (guards against numeric-only false positives).
///
/// Known limitation: the section-title rule can over-trigger on ordinary
/// sentences that start with a number and end with one.
pub fn looks_like_header_or_footer(line: &str) -> bool {
    let t = line.trim();
    if t.is_empty() {
        return false;
    }

    // Bare page number.
    if t.len() <= 4 && t.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }

    if chapter_header_re().is_match(t) {
        return true;
    }

    if section_header_re().is_match(t) {
        let letters = t.chars().filter(|c| c.is_alphabetic()).count();
        if letters >= 6 {
            return true;
        }
    }

    false
}

/// Returns whether a line is meaningfully indented (code or pseudocode).
///
/// True iff the untrimmed line begins with 2 or more whitespace characters
/// followed by a non-whitespace character. Only the binary signal is used
/// for classification; the original leading whitespace is preserved when
/// the line is emitted as part of a code block.
pub fn is_code_like(line: &str) -> bool {
    let leading = line.chars().take_while(|c| c.is_whitespace()).count();
    leading >= 2 && leading < line.chars().count()
}

/// Strip a numeric list marker (`1.`, `2)`, `3.1`) from the start of `text`.
///
/// Returns the remainder after the marker, or `None` if no marker is present.
/// The caller still has to check that the remainder is whitespace + content.
fn strip_numeric_marker(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == 0 || i >= bytes.len() {
        return None;
    }

    match bytes[i] {
        b')' => Some(&text[i + 1..]),
        b'.' => {
            // "1." or "1.2" are both markers
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            Some(&text[j..])
        }
        _ => None,
    }
}

/// Returns whether a line starts a list item.
///
/// True if the trimmed line starts with a bullet marker (`*`, `•`, `-`) or
/// a numeric marker (`1.`, `2)`, `3.1`), followed by whitespace and content.
pub fn is_list_like(line: &str) -> bool {
    let t = line.trim_start();

    let rest = if let Some(rest) = t.strip_prefix(['*', '•', '-']) {
        rest
    } else if let Some(rest) = strip_numeric_marker(t) {
        rest
    } else {
        return false;
    };

    rest.starts_with(|c: char| c.is_whitespace()) && !rest.trim_start().is_empty()
}

/// Python-style `str.isupper()`: at least one cased character, none lowercase.
fn is_all_uppercase(t: &str) -> bool {
    t.chars().any(char::is_uppercase) && !t.chars().any(char::is_lowercase)
}

/// Returns whether a line looks like a standalone heading.
///
/// Rejects lines shorter than 3 or longer than 80 characters and lines
/// ending with a period. Accepts `Chapter ...` / `Part ...` and dotted
/// section numbers outright. Otherwise falls back to a title-case
/// heuristic: list-marker lines are list items, more than one of `,:;()`
/// disqualifies, an all-uppercase line longer than 50 characters is noise,
/// and a line starting with a lowercase letter is a wrapped continuation,
/// not a title.
pub fn is_heading_like(line: &str) -> bool {
    let t = line.trim();
    let len = t.chars().count();
    if len < 3 || len > 80 {
        return false;
    }
    if t.ends_with('.') {
        return false;
    }

    if chapter_prefix_re().is_match(t) {
        return true;
    }
    if section_number_re().is_match(t) {
        return true;
    }

    // Bullet and bare numeric markers belong to list items. Dotted section
    // numbers were already accepted above, so numbered headings still win.
    if is_list_like(t) {
        return false;
    }

    let punct = t
        .chars()
        .filter(|c| matches!(c, ',' | ':' | ';' | '(' | ')'))
        .count();
    if punct > 1 {
        return false;
    }
    if len > 50 && is_all_uppercase(t) {
        return false;
    }
    if t.chars().next().is_some_and(char::is_lowercase) {
        return false;
    }

    true
}

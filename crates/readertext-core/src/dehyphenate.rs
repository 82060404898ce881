//! Hyphenation joining for hard-wrapped lines.
//!
//! When a word is split across two lines with a hyphen ("com-" / "puting"),
//! rejoining the lines should fuse the word back together instead of
//! keeping the line-break hyphen.

/// Join two adjacent lines across a hyphenation break.
///
/// If `prev` ends with a literal hyphen and `next` starts with a lowercase
/// letter, returns `prev` with the hyphen removed, concatenated directly
/// with `next` (no space, no hyphen). Returns `None` otherwise; the caller
/// falls back to joining with a single space.
///
/// The lowercase requirement keeps legitimate hyphens intact: "end-" /
/// "User" is most likely a compound or a sentence boundary, not a split
/// word.
pub fn dehyphenate_join(prev: &str, next: &str) -> Option<String> {
    let stem = prev.strip_suffix('-')?;
    let first = next.chars().next()?;
    if first.is_lowercase() {
        Some(format!("{stem}{next}"))
    } else {
        None
    }
}

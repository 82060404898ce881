//! Unicode fixups for layout-extracted text.
//!
//! Provides [`normalize_unicode`] for replacing the PDF-style artifacts that
//! the downstream classifiers and joiners cannot handle (ligature glyphs,
//! smart quotes, dashes, non-breaking spaces), and [`UnicodeForm`] for an
//! optional full normalization pass on top.

use unicode_normalization::UnicodeNormalization;

/// The five standard Latin ligature glyphs and their ASCII expansions.
const LIGATURES: [(char, &str); 5] = [
    ('\u{FB00}', "ff"),
    ('\u{FB01}', "fi"),
    ('\u{FB02}', "fl"),
    ('\u{FB03}', "ffi"),
    ('\u{FB04}', "ffl"),
];

/// Replace common typographic artifacts with their ASCII equivalents.
///
/// Expands ligature glyphs (ﬀ ﬁ ﬂ ﬃ ﬄ), collapses left/right smart quotes
/// to `'` and `"`, collapses en/em dashes to `-`, and replaces non-breaking
/// spaces with ordinary spaces. All other characters pass through unchanged.
///
/// Must run before any line classification: the classifiers assume ASCII
/// punctuation.
pub fn normalize_unicode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.chars() {
        if let Some((_, expansion)) = LIGATURES.iter().find(|(glyph, _)| *glyph == ch) {
            out.push_str(expansion);
            continue;
        }
        match ch {
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{00A0}' => out.push(' '),
            other => out.push(other),
        }
    }

    out
}

/// Optional Unicode normalization form applied after the fixup table.
///
/// Different extraction backends may produce different representations for
/// the same visual text (composed vs. decomposed accents). The fixup table
/// handles the artifacts the pipeline depends on; this pass is for callers
/// that additionally want canonical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnicodeForm {
    /// No extra normalization (default).
    #[default]
    None,
    /// Canonical Decomposition, followed by Canonical Composition (NFC).
    Nfc,
    /// Compatibility Decomposition, followed by Canonical Composition (NFKC).
    Nfkc,
}

impl UnicodeForm {
    /// Apply this normalization form to the given string.
    ///
    /// Returns the input unchanged if the form is `None`.
    pub fn apply(&self, text: &str) -> String {
        match self {
            UnicodeForm::None => text.to_string(),
            UnicodeForm::Nfc => text.nfc().collect(),
            UnicodeForm::Nfkc => text.nfkc().collect(),
        }
    }
}

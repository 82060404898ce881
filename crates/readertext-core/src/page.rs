//! Per-page pipeline: normalize, strip, collapse, reflow.

use crate::blanks::collapse_blank_runs;
use crate::headers::strip_headers_footers;
use crate::normalize::{UnicodeForm, normalize_unicode};
use crate::reflow::reflow_lines;

/// Options for per-page processing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageOptions {
    /// Extra Unicode normalization form applied after the fixup table.
    /// Default: `UnicodeForm::None`.
    pub unicode_form: UnicodeForm,
}

/// The cleaned text of one page.
///
/// Created by [`process_page`], immutable afterward, consumed once by
/// [`format_pages`](crate::document::format_pages).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageText {
    /// 1-based page number in the source document.
    pub page_num: usize,
    /// Cleaned output lines, blocks separated by single blank lines.
    pub lines: Vec<String>,
}

/// Run the full cleanup pipeline over one page's raw layout lines.
///
/// Stages: trailing-whitespace trim + Unicode fixups per line, then
/// header/footer stripping, a loose blank collapse (at most 2 consecutive
/// blanks), and the reflow engine (which finishes with a strict collapse).
/// Total over any input; malformed text degrades into plain paragraphs.
pub fn process_page(raw_lines: &[String], page_num: usize, options: &PageOptions) -> PageText {
    let normalized: Vec<String> = raw_lines
        .iter()
        .map(|line| {
            let mut text = normalize_unicode(line);
            if options.unicode_form != UnicodeForm::None {
                text = options.unicode_form.apply(&text);
            }
            text.truncate(text.trim_end().len());
            text
        })
        .collect();

    let stripped = strip_headers_footers(&normalized);
    let collapsed = collapse_blank_runs(&stripped, 2);
    let lines = reflow_lines(&collapsed);

    PageText { page_num, lines }
}

//! Paragraph reflow engine.
//!
//! Walks a stripped, normalized line sequence with a single cursor and
//! rebuilds it as structural blocks: code blocks kept verbatim, headings
//! on their own padded line, list items and paragraphs merged into one
//! line each. This is the stage that undoes hard line-wraps.

use crate::blanks::{collapse_blank_runs, is_blank};
use crate::classify::{is_code_like, is_heading_like, is_list_like};
use crate::dehyphenate::dehyphenate_join;

/// Merge hard-wrapped lines into paragraphs while preserving structure.
///
/// Classification priority at each cursor position: code, then heading,
/// then list item, then plain paragraph.
///
/// - Indented lines are kept verbatim as code blocks (no joining, no
///   dehyphenation), with blank lines inside the block trimmed at its
///   edges.
/// - Heading-like lines are emitted standalone with blank padding.
/// - List items and paragraphs pull in continuation lines until a blank
///   or structural line, fusing hyphenation breaks and otherwise joining
///   with a single space.
///
/// The output never contains more than one consecutive blank line and
/// never starts or ends with one. Pure function of its input; identical
/// input always yields identical output.
pub fn reflow_lines(lines: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let n = lines.len();
    let mut i = 0;

    while i < n {
        let line = &lines[i];
        let trimmed = line.trim();

        if trimmed.is_empty() {
            push_blank(&mut out);
            i += 1;
            continue;
        }

        if is_code_like(line) {
            push_blank(&mut out);
            i = emit_code_block(lines, i, &mut out);
            push_blank(&mut out);
            continue;
        }

        if is_heading_like(line) {
            push_blank(&mut out);
            out.push(trimmed.to_string());
            push_blank(&mut out);
            i += 1;
            continue;
        }

        // List items and paragraphs share one continuation-merge rule;
        // is_list_like only matters as a stop condition below.
        let (merged, next) = merge_continuations(lines, trimmed, i + 1);
        out.push(merged);
        i = next;

        // Any blank run after the block becomes a single separator.
        while i < n && is_blank(&lines[i]) {
            push_blank(&mut out);
            i += 1;
        }
    }

    collapse_blank_runs(&out, 1)
}

/// Append a blank separator unless the output already ends with one.
fn push_blank(out: &mut Vec<String>) {
    if out.last().is_some_and(|l| !l.is_empty()) {
        out.push(String::new());
    }
}

/// Consume a run of code-like and blank lines starting at `i`, emitting the
/// run verbatim (leading/trailing blanks trimmed). Returns the cursor past
/// the run. A non-indented, non-blank line ends the block.
fn emit_code_block(lines: &[String], mut i: usize, out: &mut Vec<String>) -> usize {
    let mut buf: Vec<&str> = Vec::new();
    while i < lines.len() && (is_blank(&lines[i]) || is_code_like(&lines[i])) {
        buf.push(lines[i].trim_end());
        i += 1;
    }

    while buf.first().is_some_and(|l| is_blank(l)) {
        buf.remove(0);
    }
    while buf.last().is_some_and(|l| is_blank(l)) {
        buf.pop();
    }

    out.extend(buf.into_iter().map(String::from));
    i
}

/// Merge continuation lines into `first` starting at cursor `i`.
///
/// A continuation is a non-blank line that is not itself list-like,
/// code-like, or heading-like. Each continuation is fused via
/// [`dehyphenate_join`] when possible, otherwise joined with a single
/// space. Returns the merged line and the cursor past the consumed lines.
fn merge_continuations(lines: &[String], first: &str, mut i: usize) -> (String, usize) {
    let mut merged = first.to_string();

    while i < lines.len() {
        let next = &lines[i];
        let next_trimmed = next.trim();
        if next_trimmed.is_empty() {
            break;
        }
        if is_code_like(next) || is_list_like(next) || is_heading_like(next) {
            break;
        }

        match dehyphenate_join(&merged, next_trimmed) {
            Some(joined) => merged = joined,
            None => {
                merged.push(' ');
                merged.push_str(next_trimmed);
            }
        }
        i += 1;
    }

    (merged, i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn wrapped_paragraph_merges_into_one_line() {
        let input = lines(&[
            "This paragraph, hard-wrapped, spans",
            "several physical lines that should",
            "come back together.",
        ]);
        assert_eq!(
            reflow_lines(&input),
            lines(&[
                "This paragraph, hard-wrapped, spans several physical lines that should come back together."
            ])
        );
    }

    #[test]
    fn paragraph_merge_dehyphenates() {
        let input = lines(&["He wrote, at length, about com-", "puting machinery."]);
        assert_eq!(
            reflow_lines(&input),
            lines(&["He wrote, at length, about computing machinery."])
        );
    }

    #[test]
    fn blank_line_separates_paragraphs() {
        let input = lines(&[
            "The first paragraph, it seems, goes on",
            "and wraps here.",
            "",
            "Second one.",
        ]);
        assert_eq!(
            reflow_lines(&input),
            lines(&[
                "The first paragraph, it seems, goes on and wraps here.",
                "",
                "Second one.",
            ])
        );
    }

    #[test]
    fn code_block_kept_verbatim() {
        let input = lines(&["  for i in range(n):", "    print(i)", "", "Normal text."]);
        assert_eq!(
            reflow_lines(&input),
            lines(&["  for i in range(n):", "    print(i)", "", "Normal text."])
        );
    }

    #[test]
    fn blank_lines_inside_code_block_trimmed_at_edges() {
        let input = lines(&["Intro paragraph here.", "", "  first = 1", "", "  second = 2"]);
        assert_eq!(
            reflow_lines(&input),
            lines(&["Intro paragraph here.", "", "  first = 1", "", "  second = 2"])
        );
    }

    #[test]
    fn code_block_ends_at_unindented_line() {
        let input = lines(&["  x = 1", "back to prose that", "wraps around."]);
        assert_eq!(
            reflow_lines(&input),
            lines(&["  x = 1", "", "back to prose that wraps around."])
        );
    }

    #[test]
    fn heading_gets_blank_padding() {
        let input = lines(&[
            "An intro, brief as it is, leads",
            "into the section.",
            "1.2 Analyzing algorithms",
            "The body, for its part, continues on",
            "the next line.",
        ]);
        assert_eq!(
            reflow_lines(&input),
            lines(&[
                "An intro, brief as it is, leads into the section.",
                "",
                "1.2 Analyzing algorithms",
                "",
                "The body, for its part, continues on the next line.",
            ])
        );
    }

    #[test]
    fn list_item_merges_continuation_with_hyphenation() {
        let input = lines(&["- This is a long com-", "puting example", "", "Next paragraph."]);
        assert_eq!(
            reflow_lines(&input),
            lines(&["- This is a long computing example", "", "Next paragraph."])
        );
    }

    #[test]
    fn adjacent_list_items_stay_separate() {
        let input = lines(&["- first item", "- second item", "- third item"]);
        assert_eq!(
            reflow_lines(&input),
            lines(&["- first item", "- second item", "- third item"])
        );
    }

    #[test]
    fn list_item_continuation_stops_at_heading() {
        let input = lines(&["1. an item that wraps", "onto this line", "2.1 Next Section Title"]);
        assert_eq!(
            reflow_lines(&input),
            lines(&["1. an item that wraps onto this line", "", "2.1 Next Section Title"])
        );
    }

    #[test]
    fn output_never_has_double_blanks_or_blank_edges() {
        let input = lines(&["", "", "One paragraph.", "", "", "", "Two.", "", ""]);
        let output = reflow_lines(&input);
        assert_eq!(output, lines(&["One paragraph.", "", "Two."]));
        assert!(!output.first().is_some_and(|l| l.is_empty()));
        assert!(!output.last().is_some_and(|l| l.is_empty()));
    }

    #[test]
    fn deterministic() {
        let input = lines(&["- item one", "wrapped", "", "  code()", "", "Heading Line Here", "prose."]);
        assert_eq!(reflow_lines(&input), reflow_lines(&input));
    }

    #[test]
    fn empty_input() {
        assert!(reflow_lines(&[]).is_empty());
    }
}

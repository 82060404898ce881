//! Document assembly: per-page processing and final text concatenation.

use crate::page::{PageOptions, PageText, process_page};
use crate::source::PageSource;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Options for assembling processed pages into the final text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssembleOptions {
    /// Insert a literal `=== PAGE <n> ===` marker line before each page.
    /// Default: `false`.
    pub keep_page_breaks: bool,
}

/// The literal page marker line for a 1-based page number.
pub fn page_marker(page_num: usize) -> String {
    format!("=== PAGE {page_num} ===")
}

/// Process an inclusive 1-based page range `[start, end]` from a source.
///
/// Pages are independent: each one is cleaned in isolation and the results
/// come back in page order. An empty range (start past end) yields no
/// pages. With the `parallel` feature the per-page map runs on rayon
/// while preserving ordering.
#[cfg(feature = "parallel")]
pub fn process_document<S>(
    source: &S,
    start: usize,
    end: usize,
    options: &PageOptions,
) -> Vec<PageText>
where
    S: PageSource + Sync,
{
    let page_nums: Vec<usize> = (start..=end).collect();
    page_nums
        .into_par_iter()
        .map(|num| process_page(&source.page_lines(num - 1), num, options))
        .collect()
}

/// Process an inclusive 1-based page range `[start, end]` from a source.
///
/// Pages are independent: each one is cleaned in isolation and the results
/// come back in page order. An empty range (start past end) yields no
/// pages. With the `parallel` feature the per-page map runs on rayon
/// while preserving ordering.
#[cfg(not(feature = "parallel"))]
pub fn process_document<S>(
    source: &S,
    start: usize,
    end: usize,
    options: &PageOptions,
) -> Vec<PageText>
where
    S: PageSource + Sync,
{
    (start..=end)
        .map(|num| process_page(&source.page_lines(num - 1), num, options))
        .collect()
}

/// Concatenate processed pages into the final document text.
///
/// With page breaks kept, each page is preceded by its marker line and
/// followed by a blank line. Without markers a blank line still separates
/// pages, so paragraphs never merge across a page boundary. The result has
/// trailing whitespace trimmed and exactly one trailing newline.
pub fn format_pages(pages: &[PageText], options: &AssembleOptions) -> String {
    let mut parts: Vec<String> = Vec::new();

    for page in pages {
        if options.keep_page_breaks {
            parts.push(page_marker(page.page_num));
        }
        parts.extend(page.lines.iter().cloned());
        // Blank after each page, marker or not.
        parts.push(String::new());
    }

    let mut text = parts.join("\n");
    text.truncate(text.trim_end().len());
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(num: usize, v: &[&str]) -> PageText {
        PageText {
            page_num: num,
            lines: v.iter().map(|s| s.to_string()).collect(),
        }
    }

    struct FixtureSource {
        pages: Vec<Vec<String>>,
    }

    impl PageSource for FixtureSource {
        fn page_count(&self) -> usize {
            self.pages.len()
        }

        fn page_lines(&self, index: usize) -> Vec<String> {
            self.pages[index].clone()
        }
    }

    fn fixture(pages: &[&[&str]]) -> FixtureSource {
        FixtureSource {
            pages: pages
                .iter()
                .map(|p| p.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn marker_format() {
        assert_eq!(page_marker(1), "=== PAGE 1 ===");
        assert_eq!(page_marker(312), "=== PAGE 312 ===");
    }

    #[test]
    fn pages_separated_by_blank_line_without_markers() {
        let pages = vec![page(1, &["one"]), page(2, &["two"])];
        let text = format_pages(&pages, &AssembleOptions::default());
        assert_eq!(text, "one\n\ntwo\n");
    }

    #[test]
    fn markers_precede_each_page() {
        let pages = vec![page(1, &["one"]), page(2, &["two"])];
        let options = AssembleOptions {
            keep_page_breaks: true,
        };
        let text = format_pages(&pages, &options);
        assert_eq!(text, "=== PAGE 1 ===\none\n\n=== PAGE 2 ===\ntwo\n");
    }

    #[test]
    fn single_trailing_newline() {
        let pages = vec![page(1, &["only line"])];
        let text = format_pages(&pages, &AssembleOptions::default());
        assert!(text.ends_with("line\n"));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn no_pages_yields_single_newline() {
        let text = format_pages(&[], &AssembleOptions::default());
        assert_eq!(text, "\n");
    }

    #[test]
    fn document_range_is_one_based_inclusive() {
        let source = fixture(&[&["Page one text."], &["Page two text."], &["Page three text."]]);
        let pages = process_document(&source, 2, 3, &PageOptions::default());
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_num, 2);
        assert_eq!(pages[0].lines, vec!["Page two text.".to_string()]);
        assert_eq!(pages[1].page_num, 3);
    }

    #[test]
    fn empty_range_yields_no_pages() {
        let source = fixture(&[&["Page one text."]]);
        let pages = process_document(&source, 1, 0, &PageOptions::default());
        assert!(pages.is_empty());
    }

    #[test]
    fn page_ordering_preserved() {
        let source = fixture(&[
            &["Alpha text here."],
            &["Beta text here."],
            &["Gamma text here."],
            &["Delta text here."],
        ]);
        let pages = process_document(&source, 1, 4, &PageOptions::default());
        let nums: Vec<usize> = pages.iter().map(|p| p.page_num).collect();
        assert_eq!(nums, vec![1, 2, 3, 4]);
    }
}

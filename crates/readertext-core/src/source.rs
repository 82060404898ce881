//! The page layout source boundary.

/// A source of raw, layout-ordered page text.
///
/// Implementations sit outside the pipeline (a PDF layout extractor, a
/// paginated text file, a test fixture). The contract: lines are roughly
/// ordered top-to-bottom, left-to-right; block separators appear as empty
/// lines; line breaks inside a layout chunk are meaningful; and leading
/// whitespace reflects visual indentation.
pub trait PageSource {
    /// Number of pages available.
    fn page_count(&self) -> usize;

    /// Raw text lines of the page at `index` (0-based).
    fn page_lines(&self, index: usize) -> Vec<String>;
}

use std::fs;
use std::io;
use std::path::Path;

use readertext_core::PageSource;

/// A [`PageSource`] over a plain-text file whose pages are separated by
/// form-feed (U+000C) characters.
///
/// This is the stand-in layout source for text-to-text cleanup runs and
/// tests; a PDF layout extractor would implement the same trait.
pub struct PlainTextSource {
    pages: Vec<Vec<String>>,
}

impl PlainTextSource {
    /// Read and paginate a text file.
    pub fn open(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// Paginate already-loaded text on form-feed separators.
    pub fn from_text(text: &str) -> Self {
        let pages = text
            .split('\u{0C}')
            .map(|page| page.lines().map(str::to_string).collect())
            .collect();
        Self { pages }
    }
}

impl PageSource for PlainTextSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_lines(&self, index: usize) -> Vec<String> {
        self.pages[index].clone()
    }
}

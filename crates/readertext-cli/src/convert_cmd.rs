use std::fs;
use std::path::Path;

use readertext_core::{
    AssembleOptions, PageOptions, PageSource, UnicodeForm, format_pages, is_code_like,
    process_document,
};

use crate::page_range::resolve_page_range;
use crate::text_source::PlainTextSource;

pub fn run(
    input: &Path,
    output: &Path,
    start: usize,
    end: Option<usize>,
    keep_page_breaks: bool,
    unicode_form: UnicodeForm,
    debug: bool,
) -> Result<(), i32> {
    if !input.exists() {
        eprintln!("Error: file not found: {}", input.display());
        return Err(1);
    }

    let source = PlainTextSource::open(input).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", input.display());
        1
    })?;

    // Range errors are fatal before any page is processed.
    let (start, end) = resolve_page_range(start, end, source.page_count()).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    let page_options = PageOptions { unicode_form };
    let pages = process_document(&source, start, end, &page_options);

    if debug {
        for page in &pages {
            let raw = source.page_lines(page.page_num - 1).len();
            let code_lines = page.lines.iter().filter(|l| is_code_like(l)).count();
            eprintln!(
                "[debug] page {}: raw={raw} lines -> cleaned={} lines (code_lines={code_lines})",
                page.page_num,
                page.lines.len()
            );
        }
    }

    let text = format_pages(
        &pages,
        &AssembleOptions {
            keep_page_breaks,
        },
    );

    fs::write(output, &text).map_err(|e| {
        eprintln!("Error: failed to write {}: {e}", output.display());
        1
    })?;

    if debug {
        eprintln!(
            "[debug] wrote {} ({} chars)",
            output.display(),
            text.chars().count()
        );
    }

    Ok(())
}

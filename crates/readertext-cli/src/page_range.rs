/// Resolve a 1-based inclusive page range against the document page count.
///
/// `start` is clamped up to 1 and `end` (or the page count when absent)
/// is clamped down to the page count. A start past the resolved end is a
/// fatal configuration error, reported before any processing begins.
pub fn resolve_page_range(
    start: usize,
    end: Option<usize>,
    page_count: usize,
) -> Result<(usize, usize), String> {
    let start = start.max(1);
    let end = end.unwrap_or(page_count).min(page_count);

    if start > end {
        return Err(format!(
            "start page ({start}) is greater than end page ({end})"
        ));
    }

    Ok((start, end))
}

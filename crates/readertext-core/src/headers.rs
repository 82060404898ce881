//! Running header/footer removal.

use crate::classify::looks_like_header_or_footer;

/// Drop every line that looks like running page furniture.
///
/// Conservative filter: order and blank lines are preserved, nothing is
/// merged. Applied to all lines of a page; detection is heuristic (see
/// [`looks_like_header_or_footer`]).
pub fn strip_headers_footers(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| !looks_like_header_or_footer(line))
        .cloned()
        .collect()
}

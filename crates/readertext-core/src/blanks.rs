//! Blank-line run collapsing.

/// Returns whether a line is blank (empty or pure whitespace).
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Bound consecutive blank lines and trim blanks from both ends.
///
/// Walks the sequence counting consecutive blank lines, emitting at most
/// `max_blanks` per run and dropping the excess. Blank lines are emitted as
/// empty strings regardless of their original whitespace content. Leading
/// and trailing blank lines are removed entirely, so the output never
/// starts or ends with a blank line.
///
/// Idempotent: collapsing an already-collapsed sequence with the same
/// bound is a no-op.
pub fn collapse_blank_runs(lines: &[String], max_blanks: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut blank_run = 0;

    for line in lines {
        if is_blank(line) {
            blank_run += 1;
            if blank_run <= max_blanks {
                out.push(String::new());
            }
        } else {
            blank_run = 0;
            out.push(line.clone());
        }
    }

    while out.first().is_some_and(|l| is_blank(l)) {
        out.remove(0);
    }
    while out.last().is_some_and(|l| is_blank(l)) {
        out.pop();
    }

    out
}

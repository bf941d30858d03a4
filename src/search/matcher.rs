// ── Substring matcher ─────────────────────────────────────────────────────────
//
// Single left-to-right pass over the target producing the ordered, non-
// overlapping set of match ranges for a query.  Each scan resumes at the end
// of the previous match, never inside it.  All offsets are byte positions
// into the original (unfolded) target.

use tracing::debug;

use crate::search::{
    fold_char,
    results::{MatchRange, ResultSet},
    Query,
};

/// Find every occurrence of `query` in `target`.
///
/// An empty query text yields an empty [`ResultSet`] — searching for the
/// empty string would otherwise "match" at every position.
pub fn scan(query: &Query, target: &str) -> ResultSet {
    let t0 = std::time::Instant::now();
    let ranges = if query.text.is_empty() {
        Vec::new()
    } else if query.case_sensitive {
        scan_exact(&query.text, target)
    } else {
        scan_folded(&query.text, target)
    };
    debug!(
        query_len = query.text.len(),
        case_sensitive = query.case_sensitive,
        matches = ranges.len(),
        elapsed_us = t0.elapsed().as_micros() as u64,
        "substring scan complete"
    );
    ResultSet::from_ranges(ranges)
}

/// Case-sensitive scan: repeated `str::find`, resuming at each match end.
fn scan_exact(needle: &str, target: &str) -> Vec<MatchRange> {
    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(i) = target[from..].find(needle) {
        let start = from + i;
        let end = start + needle.len();
        ranges.push(MatchRange { start, end });
        from = end;
    }
    ranges
}

/// Case-insensitive scan: compare codepoint-by-codepoint under simple folding
/// while tracking byte offsets in the original target.
fn scan_folded(needle: &str, target: &str) -> Vec<MatchRange> {
    let needle: Vec<char> = needle.chars().map(fold_char).collect();
    let hay: Vec<(usize, char)> = target
        .char_indices()
        .map(|(i, c)| (i, fold_char(c)))
        .collect();

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        let window = hay[i..i + needle.len()].iter().map(|&(_, c)| c);
        if window.eq(needle.iter().copied()) {
            let after = i + needle.len();
            let start = hay[i].0;
            let end = match hay.get(after) {
                Some(&(off, _)) => off,
                None => target.len(),
            };
            ranges.push(MatchRange { start, end });
            i = after;
        } else {
            i += 1;
        }
    }
    ranges
}

// ── Tests ─────────────────────────────────────────────────────────────────────

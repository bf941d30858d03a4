// ── Match ranges & result cursor ──────────────────────────────────────────────
//
// The ordered output of one matcher run, plus the caret-relative "next match"
// lookup with wrap-around.  There is no persisted current-index; the next hit
// is recomputed from the caret on every call, so external caret movement
// (mouse clicks, edits) is picked up automatically.

/// One occurrence of the query in the target text.
///
/// Half-open byte interval `[start, end)` into the original target;
/// `end > start` always (empty queries produce no ranges at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRange {
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
}

/// A match chosen by the cursor, with its 1-based position for "i/N" display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// 1-based index of `range` within the result set.
    pub position: usize,
    /// The chosen match.
    pub range: MatchRange,
}

/// The ordered matches of one search run.
///
/// Ranges ascend by start offset and never overlap — both guaranteed by the
/// matcher's left-to-right resume-at-match-end scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    ranges: Vec<MatchRange>,
}

impl ResultSet {
    /// Wrap the matcher's scan output.  `ranges` must already be in scan
    /// order (ascending, non-overlapping).
    pub(crate) fn from_ranges(ranges: Vec<MatchRange>) -> Self {
        Self { ranges }
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// `true` when the search produced no matches.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// All matches in ascending order, e.g. for highlighting every occurrence.
    pub fn ranges(&self) -> &[MatchRange] {
        &self.ranges
    }

    /// The first match strictly after `caret`, wrapping to the first match in
    /// the set when the caret is already past all of them.
    ///
    /// Returns `None` only when the set is empty.  A caret beyond the end of
    /// the text is valid and simply wraps.
    pub fn next_after(&self, caret: usize) -> Option<Hit> {
        for (i, range) in self.ranges.iter().enumerate() {
            if range.start > caret {
                return Some(Hit {
                    position: i + 1,
                    range: *range,
                });
            }
        }
        // Past every match — wrap around to the first.
        self.ranges.first().map(|range| Hit {
            position: 1,
            range: *range,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// A set with ranges starting at 2, 10 and 20 (each 3 bytes long).
    fn sample() -> ResultSet {
        ResultSet::from_ranges(vec![
            MatchRange { start: 2, end: 5 },
            MatchRange { start: 10, end: 13 },
            MatchRange { start: 20, end: 23 },
        ])
    }

    #[test]
    fn empty_set_has_no_next() {
        assert_eq!(ResultSet::default().next_after(0), None);
        assert_eq!(ResultSet::default().next_after(999), None);
    }

    #[test]
    fn picks_first_range_past_the_caret() {
        let hit = sample().next_after(5).expect("match");
        assert_eq!(hit.position, 2);
        assert_eq!(hit.range.start, 10);
    }

    #[test]
    fn caret_before_everything_picks_the_first() {
        let hit = sample().next_after(0).expect("match");
        assert_eq!(hit.position, 1);
        assert_eq!(hit.range.start, 2);
    }

    #[test]
    fn caret_past_all_matches_wraps_to_first() {
        let hit = sample().next_after(25).expect("match");
        assert_eq!(hit.position, 1);
        assert_eq!(hit.range.start, 2);
    }

    // The comparison is strict: a caret sitting exactly on a match start
    // advances to the following match.
    #[test]
    fn caret_on_a_match_start_advances_past_it() {
        let hit = sample().next_after(10).expect("match");
        assert_eq!(hit.position, 3);
        assert_eq!(hit.range.start, 20);
    }

    #[test]
    fn caret_on_last_match_start_wraps() {
        let hit = sample().next_after(20).expect("match");
        assert_eq!(hit.position, 1);
        assert_eq!(hit.range.start, 2);
    }

    #[test]
    fn single_match_always_returned() {
        let set = ResultSet::from_ranges(vec![MatchRange { start: 4, end: 6 }]);
        assert_eq!(set.next_after(0).expect("match").position, 1);
        assert_eq!(set.next_after(4).expect("match").position, 1);
        assert_eq!(set.next_after(100).expect("match").position, 1);
    }

    #[test]
    fn len_and_is_empty_agree() {
        assert_eq!(sample().len(), 3);
        assert!(!sample().is_empty());
        assert!(ResultSet::default().is_empty());
    }
}

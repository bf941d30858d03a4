// ── Search query ──────────────────────────────────────────────────────────────
//
// The user-entered search parameters, plus the "effective text" derivation
// that drives the bar's dirty check.  No I/O; usable from any module.

pub mod matcher;
pub mod results;

/// Parameters for a single search operation.
///
/// Held by [`SearchBar`](crate::SearchBar) and mutated by query-changed and
/// case-toggle events; the matcher reads it on each run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// The search text as typed.
    pub text: String,
    /// When `false`, query and target are case-folded before comparison.
    pub case_sensitive: bool,
}

impl Query {
    /// A new query with the given text.  Searches are case-insensitive until
    /// the case toggle is activated.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            case_sensitive: false,
        }
    }

    /// `true` when the query text is empty (an empty query never matches).
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The query text normalized per case-sensitivity.
    ///
    /// Two queries with equal effective text produce the same ResultSet for a
    /// given target, so the bar re-runs the matcher only when this changes.
    pub fn effective_text(&self) -> String {
        if self.case_sensitive {
            self.text.clone()
        } else {
            self.text.chars().map(fold_char).collect()
        }
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new("")
    }
}

// ── Case folding ──────────────────────────────────────────────────────────────

/// Locale-independent simple case fold: one codepoint in, one codepoint out.
///
/// A codepoint whose lowercase form expands to multiple codepoints (e.g.
/// U+0130 LATIN CAPITAL LETTER I WITH DOT ABOVE) folds to itself, so folded
/// text stays codepoint-aligned with the original and match offsets remain
/// valid byte positions in the unfolded target.
pub(crate) fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

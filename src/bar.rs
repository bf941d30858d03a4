// ── Search bar controller ─────────────────────────────────────────────────────
//
// A single `SearchBar` is created per searchable text panel and owned by the
// embedding view for its lifetime.  All mutations happen on the UI thread in
// response to discrete input events — there is no shared state and no
// locking.  The presentation layer is an adapter: it translates raw
// key/button events into `SearchEvent`s and renders the returned status.

use tracing::trace;

use crate::{
    lang::Status,
    search::{
        matcher,
        results::{Hit, MatchRange, ResultSet},
        Query,
    },
};

// ── Events ────────────────────────────────────────────────────────────────────

/// Abstract input events the bar consumes.
///
/// The embedding UI maps its own affordances onto these: typing into the
/// input field, pressing the find-next key, clicking the `Aa` toggle, and
/// Escape / the close button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The input field content changed.
    QueryChanged(String),
    /// Find-next was triggered with the caret at the given byte offset.
    FindNext {
        /// Caret byte offset in the target text.
        caret: usize,
    },
    /// The case-sensitivity toggle was activated.
    ToggleCase,
    /// The bar was dismissed (Escape or close button).
    Close,
}

/// What a handled event asks the presentation layer to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Nothing to render; state was updated internally.
    None,
    /// A find-next ran; render the status and move to the hit, if any.
    Find(FindOutcome),
    /// The bar should be hidden, its status display cleared, and focus
    /// returned to the text panel.
    CloseIntent,
}

/// Result of one find-next trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindOutcome {
    /// The chosen match, or `None` when the query has no matches.
    pub hit: Option<Hit>,
    /// Status to display, updated on every trigger.
    pub status: Status,
}

// ── SearchBar ─────────────────────────────────────────────────────────────────

/// Query state, cached results, and the dirty flag tying them together.
///
/// The target text is pulled fresh from the provider on every matcher run;
/// the cached [`ResultSet`] is reused as long as the effective query text is
/// unchanged.
pub struct SearchBar {
    /// Returns the current full text of the searched document.
    text: Box<dyn Fn() -> String>,
    /// Receives the chosen range on a hit; absent callback is a no-op.
    on_match: Option<Box<dyn FnMut(MatchRange)>>,
    query: Query,
    /// `true` when `results` is stale relative to `query`.
    dirty: bool,
    /// Effective query text of the last matcher run.
    last_searched: Option<String>,
    results: ResultSet,
}

impl SearchBar {
    /// Create a bar over the given text provider, with an empty query.
    pub fn new(text: impl Fn() -> String + 'static) -> Self {
        Self {
            text: Box::new(text),
            on_match: None,
            query: Query::default(),
            dirty: true,
            last_searched: None,
            results: ResultSet::default(),
        }
    }

    /// Install the match consumer, typically used by the embedding view to
    /// move the caret/selection into view.
    pub fn set_on_match(&mut self, on_match: impl FnMut(MatchRange) + 'static) {
        self.on_match = Some(Box::new(on_match));
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The current query.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Matches of the last run, e.g. for highlighting every occurrence.
    /// Stale while [`is_dirty`](Self::is_dirty) is `true`.
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// `true` when the cached results no longer reflect the query.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ── Event dispatch ────────────────────────────────────────────────────────

    /// Apply one abstract input event.
    pub fn handle(&mut self, event: SearchEvent) -> Response {
        match event {
            SearchEvent::QueryChanged(text) => {
                self.set_text(&text);
                Response::None
            }
            SearchEvent::FindNext { caret } => Response::Find(self.find_next(caret)),
            SearchEvent::ToggleCase => {
                self.toggle_case();
                Response::None
            }
            SearchEvent::Close => {
                self.reset();
                Response::CloseIntent
            }
        }
    }

    // ── Query edits ───────────────────────────────────────────────────────────

    /// Replace the query text (user edit or programmatic).
    pub fn set_text(&mut self, text: &str) {
        if self.query.text != text {
            self.query.text = text.to_owned();
            self.refresh_dirty();
        }
    }

    /// Flip case sensitivity.  The cached results stay valid when the
    /// effective query text is unchanged (e.g. an all-lowercase query).
    pub fn toggle_case(&mut self) {
        self.query.case_sensitive = !self.query.case_sensitive;
        self.refresh_dirty();
        trace!(
            case_sensitive = self.query.case_sensitive,
            "case sensitivity toggled"
        );
    }

    /// Clear the query and cached results, keeping the case toggle.
    pub fn reset(&mut self) {
        self.query.text.clear();
        self.results = ResultSet::default();
        self.last_searched = None;
        self.dirty = true;
        trace!("search bar reset");
    }

    // ── Find next ─────────────────────────────────────────────────────────────

    /// Run the search if the query is dirty, then pick the next match after
    /// `caret` (wrapping around).  The status is updated on every trigger; a
    /// hit is also delivered to the match consumer.
    pub fn find_next(&mut self, caret: usize) -> FindOutcome {
        if self.dirty {
            self.run_search();
        }
        let hit = self.results.next_after(caret);
        let status = match hit {
            Some(hit) => Status::Position {
                index: hit.position,
                total: self.results.len(),
            },
            None => Status::NoResults,
        };
        if let (Some(hit), Some(on_match)) = (hit, self.on_match.as_mut()) {
            on_match(hit.range);
        }
        FindOutcome { hit, status }
    }

    /// Pull the target text and recompute the result set.
    fn run_search(&mut self) {
        let target = (self.text)();
        self.results = matcher::scan(&self.query, &target);
        self.last_searched = Some(self.query.effective_text());
        self.dirty = false;
    }

    /// Recompute the dirty flag: results are stale exactly when the effective
    /// query text differs from the last one searched.
    fn refresh_dirty(&mut self) {
        let effective = self.query.effective_text();
        self.dirty = self.last_searched.as_deref() != Some(effective.as_str());
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

// ── Safety policy ────────────────────────────────────────────────────────────
// No unsafe code anywhere: this crate is pure state and string scanning, with
// no FFI surface.
#![forbid(unsafe_code)]

// ── Crate layout ─────────────────────────────────────────────────────────────
//
// findbar is the logic core of an editor-panel search widget: the embedding
// application renders the input field, count label, and toggles, and feeds
// abstract `SearchEvent`s to a `SearchBar`; the bar scans the target text on
// demand and answers with the chosen match range plus a status value.
//
//   search::matcher   non-overlapping substring scan (with case folding)
//   search::results   match ranges + caret-relative next-match cursor
//   bar               query state machine with dirty tracking & callbacks
//   lang              status values and replaceable display templates
//   error             crate error type (string table loading only)

pub mod bar;
pub mod error;
pub mod lang;
pub mod search;

pub use bar::{FindOutcome, Response, SearchBar, SearchEvent};
pub use error::{FindbarError, Result};
pub use lang::{Status, Strings};
pub use search::{
    results::{Hit, MatchRange, ResultSet},
    Query,
};

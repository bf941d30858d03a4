// ── Status values & display strings ───────────────────────────────────────────
//
// The bar reports outcomes as a pure `Status` value; turning that into text
// is the presentation layer's job.  `Strings` holds the two display
// templates, with built-in English defaults and a JSON loader so embedding
// applications can substitute their own localization.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

// ── Status ────────────────────────────────────────────────────────────────────

/// Outcome of a find-next trigger, independent of any display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The current query has no matches in the target (including the empty
    /// query, which never matches).
    NoResults,
    /// The cursor chose match `index` (1-based) out of `total`.
    Position {
        /// 1-based position of the chosen match.
        index: usize,
        /// Total number of matches.
        total: usize,
    },
}

// ── Strings ───────────────────────────────────────────────────────────────────

/// Display templates for [`Status`] values, keyed by fixed field names.
///
/// The `position` template substitutes `{i}` (1-based match position) and
/// `{n}` (total match count).  Unknown keys in a loaded table are ignored;
/// missing keys fall back to the English defaults, so a partial translation
/// still parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strings {
    /// Shown when the result set is empty.
    pub no_results: String,
    /// Shown when a match was chosen; `{i}`/`{n}` are substituted.
    pub position: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            no_results: "No results".to_owned(),
            position: "{i}/{n}".to_owned(),
        }
    }
}

impl Strings {
    /// Parse a string table from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a string table file.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Render a status value with these templates.
    pub fn render(&self, status: Status) -> String {
        match status {
            Status::NoResults => self.no_results.clone(),
            Status::Position { index, total } => self
                .position
                .replace("{i}", &index.to_string())
                .replace("{n}", &total.to_string()),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

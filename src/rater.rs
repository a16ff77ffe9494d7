// src/rater.rs
//
// The rating state machine. Rendering-agnostic: the terminal loop in
// cli.rs drives it through Command/dispatch, and the generated page's JS
// implements the same transitions against localStorage.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Item;
use crate::store::{SessionState, SessionStore};

/// The closed rating vocabulary. Serialized labels are fixed wire format:
/// they appear in localStorage, export files, and the generated page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatingLabel {
    Love,
    Like,
    Ok,
    #[serde(rename = "Dont like")]
    DontLike,
    #[serde(rename = "Not familiar")]
    NotFamiliar,
}

/// Display order for summary buckets.
pub const RATINGS_ORDER: [RatingLabel; 5] = [
    RatingLabel::Love,
    RatingLabel::Like,
    RatingLabel::Ok,
    RatingLabel::DontLike,
    RatingLabel::NotFamiliar,
];

impl RatingLabel {
    /// Canonical label, as persisted.
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingLabel::Love => "Love",
            RatingLabel::Like => "Like",
            RatingLabel::Ok => "Ok",
            RatingLabel::DontLike => "Dont like",
            RatingLabel::NotFamiliar => "Not familiar",
        }
    }

    /// Human-facing label (apostrophes allowed here, unlike the wire form).
    pub fn display(&self) -> &'static str {
        match self {
            RatingLabel::DontLike => "Don't like",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for RatingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Rating,
    Summary,
}

/// User actions, independent of any front-end.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Rate(RatingLabel),
    Skip,
    Previous,
    ViewSummary,
    BackToRating,
    Restart,
    /// Raw JSON text of a results file.
    Import(String),
}

/// Export/import payload: `{ "ratings": {..}, "brawlers": [..] }`.
/// On import, a missing `brawlers` falls back to the base catalog and a
/// missing `ratings` to empty — but a present field of the wrong type is
/// rejected outright.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsSnapshot {
    #[serde(default)]
    pub ratings: BTreeMap<String, RatingLabel>,
    #[serde(default, rename = "brawlers", skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
}

/// Why an import was rejected. No state is mutated on rejection.
#[derive(Debug)]
pub enum ImportError {
    /// Payload was not valid JSON at all.
    Json(serde_json::Error),
    /// Valid JSON, but not a structured object.
    NotAnObject,
    /// An object, but a known field has the wrong shape.
    Shape(serde_json::Error),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Json(e) => write!(f, "Failed to parse JSON: {e}"),
            ImportError::NotAnObject => write!(f, "Invalid JSON format: expected an object"),
            ImportError::Shape(e) => write!(f, "Invalid results file: {e}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::Json(e) | ImportError::Shape(e) => Some(e),
            ImportError::NotAnObject => None,
        }
    }
}

/// The state machine proper. Every mutating transition persists
/// `{currentIndex, ratings}` through the store immediately; store
/// failures are logged and the in-memory session carries on.
pub struct Rater<S: SessionStore> {
    base_items: Vec<Item>,
    items: Vec<Item>,
    ratings: BTreeMap<String, RatingLabel>,
    current_index: usize,
    view: View,
    store: S,
}

impl<S: SessionStore> Rater<S> {
    /// Restore a session over `items`. A persisted index out of range is
    /// clamped into `[0, len-1]`; when every item already carries a
    /// rating the session opens on the summary.
    pub fn new(items: Vec<Item>, store: S) -> Self {
        let persisted = match store.load() {
            Ok(state) => state,
            Err(e) => {
                loge!("Store: load failed: {e}");
                None
            }
        };

        let (mut current_index, ratings) = persisted
            .map(|st| (st.current_index, st.ratings))
            .unwrap_or_default();

        if items.is_empty() {
            current_index = 0;
        } else if current_index >= items.len() {
            current_index = items.len() - 1;
        }

        let all_rated = !items.is_empty() && items.iter().all(|it| ratings.contains_key(&it.name));
        let view = if all_rated { View::Summary } else { View::Rating };

        Self {
            base_items: items.clone(),
            items,
            ratings,
            current_index,
            view,
            store,
        }
    }

    /* ---------- read side ---------- */

    pub fn view(&self) -> View {
        self.view
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.items.get(self.current_index)
    }

    pub fn ratings(&self) -> &BTreeMap<String, RatingLabel> {
        &self.ratings
    }

    pub fn rated_count(&self) -> usize {
        self.ratings.len()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every item in exactly one bucket, in display order. Items without
    /// an explicit rating fall into the "Not familiar" bucket; the
    /// ratings map itself keeps the unrated/explicit distinction.
    pub fn buckets(&self) -> Vec<(RatingLabel, Vec<&Item>)> {
        RATINGS_ORDER
            .iter()
            .map(|label| {
                let members = self
                    .items
                    .iter()
                    .filter(|it| {
                        self.ratings
                            .get(&it.name)
                            .copied()
                            .unwrap_or(RatingLabel::NotFamiliar)
                            == *label
                    })
                    .collect();
                (*label, members)
            })
            .collect()
    }

    /// Pure snapshot for external persistence. No state change.
    pub fn export_results(&self) -> ResultsSnapshot {
        ResultsSnapshot {
            ratings: self.ratings.clone(),
            items: Some(self.items.clone()),
        }
    }

    /* ---------- transitions ---------- */

    /// Map a user action to a transition. Only `Import` can fail.
    pub fn dispatch(&mut self, cmd: Command) -> Result<(), ImportError> {
        match cmd {
            Command::Rate(label) => self.rate(label),
            Command::Skip => self.skip(),
            Command::Previous => self.previous(),
            Command::ViewSummary => self.view_summary(),
            Command::BackToRating => self.back_to_rating(),
            Command::Restart => self.restart(),
            Command::Import(text) => return self.import_results(&text),
        }
        Ok(())
    }

    /// Record a label for the current item and advance. Reaching the end
    /// of the catalog switches to the summary.
    pub fn rate(&mut self, label: RatingLabel) {
        if self.view != View::Rating {
            return;
        }
        let Some(item) = self.items.get(self.current_index) else {
            return;
        };
        self.ratings.insert(item.name.clone(), label);
        self.advance();
    }

    /// Advance without recording a rating.
    pub fn skip(&mut self) {
        if self.view != View::Rating {
            return;
        }
        self.advance();
    }

    /// Step back one item; no-op at index 0.
    pub fn previous(&mut self) {
        if self.view != View::Rating || self.current_index == 0 {
            return;
        }
        self.current_index -= 1;
        self.persist();
    }

    /// Peek at the summary without touching index or ratings.
    pub fn view_summary(&mut self) {
        self.view = View::Summary;
    }

    /// Return to rating, clamping the index back into valid bounds
    /// (it may sit at the all-done sentinel).
    pub fn back_to_rating(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.current_index >= self.items.len() {
            self.current_index = self.items.len() - 1;
            self.persist();
        }
        self.view = View::Rating;
    }

    /// Clear everything and start from the original catalog.
    pub fn restart(&mut self) {
        self.ratings.clear();
        self.current_index = 0;
        self.items = self.base_items.clone();
        self.persist();
        self.view = View::Rating;
    }

    /// Replace catalog and ratings wholesale from an exported file.
    /// Malformed payloads are rejected without any state change.
    pub fn import_results(&mut self, text: &str) -> Result<(), ImportError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(ImportError::Json)?;
        if !value.is_object() {
            return Err(ImportError::NotAnObject);
        }
        let snapshot: ResultsSnapshot =
            serde_json::from_value(value).map_err(ImportError::Shape)?;

        self.items = snapshot.items.unwrap_or_else(|| self.base_items.clone());
        self.ratings = snapshot.ratings;
        self.current_index = 0;
        self.persist();
        self.view = View::Summary;
        Ok(())
    }

    /* ---------- internals ---------- */

    fn advance(&mut self) {
        self.current_index += 1;
        if self.current_index >= self.items.len() {
            // Sentinel: index == item count means all done.
            self.view = View::Summary;
        }
        self.persist();
    }

    fn persist(&mut self) {
        let state = SessionState {
            current_index: self.current_index,
            ratings: self.ratings.clone(),
        };
        if let Err(e) = self.store.save(&state) {
            // Quota, disabled storage, read-only disk… the session keeps
            // working in memory without persistence guarantees.
            loge!("Store: save failed: {e}");
        }
    }
}

//! Suggestion dropdown state
//!
//! Tracks the draft the dropdown belongs to, the latest fetched suggestion
//! list, and the keyboard cursor. A fetch result is applied only if the query
//! it was issued for still equals the current draft; otherwise it is stale
//! and dropped. In-flight fetches are never cancelled.

use crate::api::{ApiError, PromptSuggestion};

/// One entry in the dropdown
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionItem {
    pub text: String,
    /// Opaque similarity value from the service, higher is closer
    pub score: f64,
}

impl SuggestionItem {
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

impl From<PromptSuggestion> for SuggestionItem {
    fn from(suggestion: PromptSuggestion) -> Self {
        Self {
            text: suggestion.prompt,
            score: suggestion.similarity,
        }
    }
}

/// A fetch the caller must issue for the current draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub query: String,
    pub request_id: u64,
}

/// What [`SuggestState::apply_fetch`] did with a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Result replaced the list and opened the dropdown
    Applied,
    /// Draft changed since the fetch was issued; nothing changed
    Stale,
    /// Fetch failed; list cleared and dropdown hidden
    Failed,
}

/// Suggestion dropdown state
///
/// Invariant: `highlighted` is `None` or a valid index into `items`.
#[derive(Debug, Default)]
pub struct SuggestState {
    /// Draft value the controller last saw
    draft: String,
    items: Vec<SuggestionItem>,
    visible: bool,
    highlighted: Option<usize>,
    last_request_id: u64,
}

impl SuggestState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn items(&self) -> &[SuggestionItem] {
        &self.items
    }

    /// Raw visibility flag
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the dropdown should be drawn: visible with something to show
    pub fn is_shown(&self) -> bool {
        self.visible && !self.items.is_empty()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_item(&self) -> Option<&SuggestionItem> {
        self.highlighted.and_then(|i| self.items.get(i))
    }

    /// Record a user edit of the draft
    ///
    /// A blank draft clears and hides the dropdown and needs no fetch.
    /// Anything else returns the fetch to issue; the current list stays on
    /// screen until a matching result arrives.
    pub fn on_draft_changed(&mut self, text: &str) -> Option<FetchRequest> {
        self.draft = text.to_string();

        if text.trim().is_empty() {
            self.items.clear();
            self.visible = false;
            self.highlighted = None;
            return None;
        }

        self.last_request_id = self.last_request_id.wrapping_add(1);
        Some(FetchRequest {
            query: text.to_string(),
            request_id: self.last_request_id,
        })
    }

    /// Apply a finished fetch issued for `query`
    pub fn apply_fetch(
        &mut self,
        query: &str,
        result: Result<Vec<SuggestionItem>, ApiError>,
    ) -> FetchOutcome {
        if query != self.draft {
            log::debug!("Discarding stale suggestions for {:?}", query);
            return FetchOutcome::Stale;
        }

        match result {
            Ok(items) => {
                self.items = items;
                self.visible = true;
                self.highlighted = None;
                FetchOutcome::Applied
            }
            Err(e) => {
                log::debug!("Suggestion fetch for {:?} failed: {}", query, e);
                self.items.clear();
                self.visible = false;
                self.highlighted = None;
                FetchOutcome::Failed
            }
        }
    }

    /// Move the highlight down, wrapping from last to first
    ///
    /// Returns false (and does nothing) when the dropdown is not shown.
    pub fn highlight_next(&mut self) -> bool {
        if !self.is_shown() {
            return false;
        }

        let len = self.items.len();
        self.highlighted = Some(match self.highlighted {
            Some(current) => (current + 1) % len,
            None => 0,
        });
        true
    }

    /// Move the highlight up, wrapping from first to last
    ///
    /// With nothing highlighted the last entry is selected.
    pub fn highlight_previous(&mut self) -> bool {
        if !self.is_shown() {
            return false;
        }

        let len = self.items.len();
        self.highlighted = Some(match self.highlighted {
            Some(0) | None => len - 1,
            Some(current) => current - 1,
        });
        true
    }

    /// Take the highlighted entry as the new draft
    ///
    /// Returns the new draft text, or `None` when nothing is highlighted (the
    /// caller then treats Enter as a send).
    pub fn accept_highlighted(&mut self) -> Option<String> {
        if !self.visible {
            return None;
        }

        let text = self.highlighted_item()?.text.clone();
        self.select(&text);
        Some(text)
    }

    /// Take the entry at `index` as the new draft, whatever is highlighted
    pub fn click_item(&mut self, index: usize) -> Option<String> {
        let text = self.items.get(index)?.text.clone();
        self.select(&text);
        Some(text)
    }

    pub fn on_escape(&mut self) {
        self.visible = false;
    }

    /// Pointer press outside the input and dropdown bounds
    pub fn on_blur_outside(&mut self) {
        self.visible = false;
    }

    /// Input regained focus: reopen if there is something to show
    pub fn on_focus_gained(&mut self) {
        if !self.items.is_empty() {
            self.visible = true;
        }
    }

    /// Selection overwrites the draft without a fetch; the list is kept
    fn select(&mut self, text: &str) {
        self.draft = text.to_string();
        self.visible = false;
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;

//! Filter operations for the combobox menu.
//!
//! Filtering is a pure, order-preserving substring match: an option stays
//! visible when the input text occurs (case-insensitively) in its label or
//! its value. Empty input keeps every option visible.

use super::model::Model;
use super::types::SelectOption;

/// Reports whether an option matches an already-lowercased query.
pub(super) fn matches_query(option: &SelectOption, query_lower: &str) -> bool {
    query_lower.is_empty()
        || option.label.to_lowercase().contains(query_lower)
        || option.value.to_lowercase().contains(query_lower)
}

/// Returns the options whose label or value contains the input text.
///
/// Matching is case-insensitive on both fields and the ordering of the source
/// list is preserved. An empty input returns the full list. The function has
/// no side effects and no error conditions, and it is idempotent: filtering
/// an already-filtered result by the same input returns the same list.
///
/// # Examples
///
/// ```rust
/// use bubbletea_combobox::combobox::{filter_options, SelectOption};
///
/// let options = vec![
///     SelectOption::new("us", "United States"),
///     SelectOption::new("uk", "United Kingdom"),
/// ];
///
/// let filtered = filter_options(&options, "king");
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].value, "uk");
///
/// // Values are matched too
/// let filtered = filter_options(&options, "UK");
/// assert_eq!(filtered.len(), 1);
///
/// assert_eq!(filter_options(&options, "").len(), 2);
/// ```
pub fn filter_options(options: &[SelectOption], input: &str) -> Vec<SelectOption> {
    let query_lower = input.to_lowercase();
    options
        .iter()
        .filter(|option| matches_query(option, &query_lower))
        .cloned()
        .collect()
}

impl Model {
    /// Applies the current input text to the option list and updates the
    /// filtered results.
    ///
    /// Recomputes the visible menu entries, then clamps the highlight and the
    /// menu scroll window so both stay within the new result set. The
    /// filtered list carries no identity across recomputations; the highlight
    /// resets to the top whenever the result set changes.
    pub(super) fn apply_filter(&mut self) {
        let query_lower = self.value().to_lowercase();
        let filtered: Vec<usize> = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| matches_query(option, &query_lower))
            .map(|(index, _)| index)
            .collect();

        if filtered != self.filtered {
            self.highlighted = 0;
            self.menu_offset = 0;
        }
        self.filtered = filtered;
        self.sync_menu_window();
    }

    /// Keeps the highlighted row inside the visible menu window.
    pub(super) fn sync_menu_window(&mut self) {
        if self.filtered.is_empty() {
            self.highlighted = 0;
            self.menu_offset = 0;
            return;
        }

        if self.highlighted >= self.filtered.len() {
            self.highlighted = self.filtered.len() - 1;
        }

        let max_visible = self.max_visible.max(1);
        if self.highlighted < self.menu_offset {
            self.menu_offset = self.highlighted;
        } else if self.highlighted >= self.menu_offset + max_visible {
            self.menu_offset = self.highlighted + 1 - max_visible;
        }

        let max_offset = self.filtered.len().saturating_sub(max_visible);
        if self.menu_offset > max_offset {
            self.menu_offset = max_offset;
        }
    }
}

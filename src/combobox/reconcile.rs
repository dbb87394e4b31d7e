//! Blur reconciliation for the combobox.
//!
//! When the input loses focus the in-progress text must be snapped back to a
//! valid state: the displayed text is always either the label of the current
//! selection or empty, never a stale edit. The reconciliation itself is a
//! pure function; the component installs it as the default blur policy and
//! applications may swap in their own.

use super::types::{BlurPolicy, Reconciled, SelectOption};

/// Reconciles in-progress input text against the option list on blur.
///
/// Performs a case-insensitive exact match of `input` against option labels:
///
/// - exact match found → commit: text becomes the matched option's label
///   (canonical casing) and that option becomes the selection
/// - no match, prior selection exists → revert: the edit is discarded and the
///   prior selection's label is restored
/// - no match, no prior selection → clear: text empties and the selection
///   stays unset
///
/// The function is pure and idempotent: reconciling its own output yields the
/// same result.
///
/// # Examples
///
/// ```rust
/// use bubbletea_combobox::combobox::{reconcile, SelectOption};
///
/// let options = vec![
///     SelectOption::new("us", "United States"),
///     SelectOption::new("uk", "United Kingdom"),
/// ];
///
/// // Exact match commits (canonical label casing wins)
/// let result = reconcile("united kingdom", None, &options);
/// assert_eq!(result.text, "United Kingdom");
/// assert_eq!(result.selection, Some(1));
///
/// // No match with a prior selection reverts
/// let result = reconcile("xyz", Some(0), &options);
/// assert_eq!(result.text, "United States");
/// assert_eq!(result.selection, Some(0));
///
/// // No match and no prior selection clears
/// let result = reconcile("xyz", None, &options);
/// assert_eq!(result.text, "");
/// assert_eq!(result.selection, None);
/// ```
pub fn reconcile(input: &str, selection: Option<usize>, options: &[SelectOption]) -> Reconciled {
    let input_lower = input.to_lowercase();
    if let Some(index) = options
        .iter()
        .position(|option| option.label.to_lowercase() == input_lower)
    {
        return Reconciled {
            text: options[index].label.clone(),
            selection: Some(index),
        };
    }

    match selection {
        Some(index) if index < options.len() => Reconciled {
            text: options[index].label.clone(),
            selection: Some(index),
        },
        _ => Reconciled {
            text: String::new(),
            selection: None,
        },
    }
}

/// Returns the default blur policy, wrapping [`reconcile`].
///
/// Installed on every new combobox; replace it with
/// [`super::Model::set_blur_policy`] to customize what persists on blur.
pub fn default_blur_policy() -> BlurPolicy {
    Box::new(|input, selection, options| reconcile(input, selection, options))
}

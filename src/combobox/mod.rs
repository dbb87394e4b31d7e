//! Searchable dropdown/combobox component for Bubble Tea applications.
//!
//! The combobox combines a single-line text input with a menu of selectable
//! options. Typing narrows the menu to the options whose label or value
//! contains the input text (case-insensitive substring match), and losing
//! focus reconciles the field back to a valid option:
//!
//! - input exactly matches an option label → that option is committed
//! - otherwise, a prior selection's label is restored
//! - otherwise, the input clears
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_combobox::combobox::{new, SelectOption};
//!
//! let options = vec![
//!     SelectOption::new("us", "United States"),
//!     SelectOption::new("uk", "United Kingdom"),
//! ];
//! let mut combo = new("country", options);
//! combo.focus();
//! combo.set_width(30);
//! ```
//!
//! # Blur Policy
//!
//! The reconciliation that runs on blur is a replaceable strategy function.
//! The default policy implements the commit/revert/clear behavior above; see
//! [`Model::set_blur_policy`] to install a custom one.

pub mod filter;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod reconcile;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

// Re-export main types and functions for public API
pub use filter::filter_options;
pub use keymap::{default_key_map, KeyMap};
pub use model::{new, Model};
pub use reconcile::{default_blur_policy, reconcile};
pub use types::{BlurPolicy, PasteErrMsg, PasteMsg, Reconciled, SelectOption};

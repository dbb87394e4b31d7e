#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-combobox/")]

//! # bubbletea-combobox
//!
//! A searchable dropdown/combobox component for terminal applications built
//! with [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The combobox pairs a single-line text input with a filtered option menu.
//! As the user types, the menu narrows to the options whose label or value
//! contains the input (case-insensitive). When the input loses focus, a
//! reconciliation policy snaps the field back to a valid option: an exact
//! label match commits that option, otherwise the field reverts to the last
//! confirmed selection or clears.
//!
//! The component follows the Elm Architecture pattern used by bubbletea-rs,
//! with `update()` and `view()` methods driven by the runtime's message loop.
//! Keyboard navigation, focus handling, and command scheduling are delegated
//! to the runtime; the combobox itself only supplies the filtering and
//! reconciliation behavior plus rendering.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_combobox::prelude::*;
//!
//! let options = vec![
//!     SelectOption::new("us", "United States"),
//!     SelectOption::new("uk", "United Kingdom"),
//! ];
//! let mut combo = combobox_new("country", options);
//! let _cmd = combo.focus();
//! assert!(combo.focused());
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_combobox::prelude::*;
//! use bubbletea_rs::{Model, Cmd, Msg};
//!
//! struct App {
//!     country: Combobox,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let options = vec![
//!             SelectOption::new("us", "United States"),
//!             SelectOption::new("uk", "United Kingdom"),
//!         ];
//!         let mut country = combobox_new("country", options);
//!         let focus_cmd = country.focus();
//!         (Self { country }, focus_cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.country.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.country.view()
//!     }
//! }
//! ```

pub mod combobox;
pub mod key;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// Components that implement this trait can participate in focus management
/// systems and provide consistent behavior for keyboard navigation between
/// widgets in an application.
///
/// ## Focus States
///
/// - **Focused**: the component receives keyboard input and shows its active
///   state (visible cursor, open menu allowed)
/// - **Blurred**: the component ignores keyboard input and displays in an
///   inactive state
///
/// # Examples
///
/// ```rust
/// use bubbletea_combobox::prelude::*;
///
/// let mut combo = combobox_new("demo", vec![]);
/// assert!(!combo.focused());
///
/// combo.focus();
/// assert!(combo.focused());
///
/// Component::blur(&mut combo);
/// assert!(!combo.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command for initialization tasks such as triggering an
    /// immediate redraw.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    ///
    /// Implementations should clean up any focus-related state; for the
    /// combobox this is where blur reconciliation runs.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use combobox::{
    default_blur_policy, filter_options, new as combobox_new, reconcile, BlurPolicy,
    KeyMap as ComboboxKeyMap, Model as Combobox, PasteErrMsg, PasteMsg, Reconciled, SelectOption,
};
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
    Binding, Help as KeyHelp, KeyMap, KeyPress,
};

/// Prelude module for convenient imports.
///
/// Re-exports the most commonly used types and functions so applications can
/// pull everything in with a single `use` statement:
///
/// ```rust
/// use bubbletea_combobox::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combobox::{
        default_blur_policy, filter_options, new as combobox_new, reconcile, BlurPolicy,
        KeyMap as ComboboxKeyMap, Model as Combobox, PasteErrMsg, PasteMsg, Reconciled,
        SelectOption,
    };
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
        Binding, Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::Component;
}

//! Type-safe key bindings for combobox interaction.
//!
//! This module defines [`Binding`], a set of key presses tied to optional help
//! metadata, plus the small builder API used throughout the component keymap:
//!
//! ```rust
//! use bubbletea_combobox::key::{new_binding, with_help, with_keys_str};
//!
//! let accept = new_binding(vec![
//!     with_keys_str(&["enter"]),
//!     with_help("enter", "accept option"),
//! ]);
//! assert!(accept.enabled());
//! ```
//!
//! Bindings are matched against the runtime's `KeyMsg` with [`matches_binding`],
//! comparing both key code and modifiers.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus its modifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code of the press.
    pub code: KeyCode,
    /// Modifier keys held during the press.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Help metadata for a binding, shown in help views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key representation, e.g. "↑/↓".
    pub key: String,
    /// Description of the action, e.g. "navigate".
    pub desc: String,
}

/// A key binding: one or more key presses that trigger the same action.
///
/// Bindings carry optional help text and can be disabled at runtime to make
/// an action temporarily unavailable without rebuilding the keymap.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from a list of key presses.
    ///
    /// Accepts plain `KeyCode`s or `(KeyCode, KeyModifiers)` tuples:
    ///
    /// ```rust
    /// use bubbletea_combobox::key::Binding;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let up = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]);
    /// let save = Binding::new(vec![(KeyCode::Char('s'), KeyModifiers::CONTROL)]);
    /// assert!(up.enabled() && save.enabled());
    /// ```
    pub fn new<T: Into<KeyPress>>(keys: Vec<T>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Attaches help text to the binding.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the key presses this binding responds to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the binding's help metadata.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns whether the binding is currently enabled.
    ///
    /// A binding with no keys is considered disabled.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the given key message triggers this binding.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys.iter().any(|press| {
            if press.code != key_msg.key {
                return false;
            }
            if press.mods == key_msg.modifiers {
                return true;
            }
            // Shifted characters arrive with the SHIFT modifier set; the case
            // is already encoded in the char itself.
            press.mods.is_empty()
                && key_msg.modifiers == KeyModifiers::SHIFT
                && matches!(press.code, KeyCode::Char(_))
        })
    }
}

/// An option applied to a binding under construction by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Creates a binding from a list of options.
///
/// ```rust
/// use bubbletea_combobox::key::{new_binding, with_help, with_keys_str};
///
/// let paste = new_binding(vec![
///     with_keys_str(&["ctrl+v"]),
///     with_help("ctrl+v", "paste"),
/// ]);
/// assert_eq!(paste.help().desc, "paste");
/// ```
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Option setting the binding's key presses.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b: &mut Binding| b.keys = keys)
}

/// Option setting the binding's keys from string descriptions.
///
/// Accepts names such as `"enter"`, `"esc"`, `"up"`, `"down"`, and modifier
/// combinations such as `"ctrl+v"` or `"alt+backspace"`. Unrecognized
/// descriptions are ignored.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let presses: Vec<KeyPress> = keys.iter().filter_map(|s| parse_key(s)).collect();
    Box::new(move |b: &mut Binding| b.keys = presses)
}

/// Option setting the binding's help text.
pub fn with_help(key: impl Into<String>, desc: impl Into<String>) -> BindingOpt {
    let help = Help {
        key: key.into(),
        desc: desc.into(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Option marking the binding as disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Reports whether the key message triggers the given binding.
pub fn matches_binding(key_msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(key_msg)
}

/// Reports whether the key message triggers any of the given bindings.
pub fn matches(key_msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(key_msg))
}

/// KeyMap provides help metadata for a component's bindings.
///
/// `short_help` returns the bindings shown in a compact single-line help view;
/// `full_help` returns columns of related bindings for an expanded view.
pub trait KeyMap {
    /// Bindings for the compact help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Columns of bindings for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

fn parse_key(s: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut name = s;
    while let Some((prefix, rest)) = name.split_once('+') {
        match prefix {
            "ctrl" => mods |= KeyModifiers::CONTROL,
            "alt" => mods |= KeyModifiers::ALT,
            "shift" => mods |= KeyModifiers::SHIFT,
            _ => return None,
        }
        name = rest;
    }

    let code = match name {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = name.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(KeyPress { code, mods })
}

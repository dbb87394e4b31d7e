//! Key bindings for the combobox component.
//!
//! Menu keys follow common terminal UI conventions: `↓`/`↑` move the
//! highlight (opening the menu first when it is closed), `enter` accepts the
//! highlighted option, and `esc` closes the menu. Editing keys mirror the
//! usual readline-style text input bindings.

use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// KeyMap is the key bindings for different actions within the combobox.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move cursor one character right.
    pub character_forward: Binding,
    /// Move cursor one character left.
    pub character_backward: Binding,
    /// Move cursor one word right.
    pub word_forward: Binding,
    /// Move cursor one word left.
    pub word_backward: Binding,
    /// Delete the previous word.
    pub delete_word_backward: Binding,
    /// Delete from cursor to end of line.
    pub delete_after_cursor: Binding,
    /// Delete from start of line to cursor.
    pub delete_before_cursor: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Move to start of line.
    pub line_start: Binding,
    /// Move to end of line.
    pub line_end: Binding,
    /// Paste from clipboard.
    pub paste: Binding,
    /// Move the menu highlight down, opening the menu if closed.
    pub next_option: Binding,
    /// Move the menu highlight up.
    pub prev_option: Binding,
    /// Accept the highlighted option.
    pub accept: Binding,
    /// Close the menu without accepting.
    pub close_menu: Binding,
}

/// The default set of key bindings for navigating and editing the combobox.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        word_forward: new_binding(vec![with_keys_str(&["alt+right", "alt+f"])]),
        word_backward: new_binding(vec![with_keys_str(&["alt+left", "alt+b"])]),
        delete_word_backward: new_binding(vec![with_keys_str(&["alt+backspace", "ctrl+w"])]),
        delete_after_cursor: new_binding(vec![with_keys_str(&["ctrl+k"])]),
        delete_before_cursor: new_binding(vec![with_keys_str(&["ctrl+u"])]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
        paste: new_binding(vec![with_keys_str(&["ctrl+v"]), with_help("ctrl+v", "paste")]),
        next_option: new_binding(vec![
            with_keys_str(&["down", "ctrl+n"]),
            with_help("↓", "next option"),
        ]),
        prev_option: new_binding(vec![
            with_keys_str(&["up", "ctrl+p"]),
            with_help("↑", "prev option"),
        ]),
        accept: new_binding(vec![with_keys_str(&["enter"]), with_help("enter", "accept")]),
        close_menu: new_binding(vec![with_keys_str(&["esc"]), with_help("esc", "close")]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.next_option,
            &self.prev_option,
            &self.accept,
            &self.close_menu,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            // Column 1: menu navigation
            vec![
                &self.next_option,
                &self.prev_option,
                &self.accept,
                &self.close_menu,
            ],
            // Column 2: editing
            vec![
                &self.delete_word_backward,
                &self.delete_before_cursor,
                &self.delete_after_cursor,
                &self.paste,
            ],
        ]
    }
}

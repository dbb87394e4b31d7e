//! Core methods for the combobox Model.

use super::model::{paste, Model};
use super::types::{BlurPolicy, PasteErrMsg, PasteMsg, SelectOption};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

impl Model {
    /// Returns the current value of the text input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_combobox::combobox::new;
    ///
    /// let mut combo = new("demo", vec![]);
    /// combo.set_value("test");
    /// assert_eq!(combo.value(), "test");
    /// ```
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Sets the value of the text input and refilters the menu.
    ///
    /// This replaces the entire input content. The selection is not touched;
    /// use [`Model::select`] to commit an option or rely on blur
    /// reconciliation to restore a valid state.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        self.pos = self.value.len();
        self.handle_overflow();
        self.apply_filter();
    }

    /// Returns the current cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor to the specified position, clamped to the text end.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
        self.handle_overflow();
    }

    /// Moves the cursor to the beginning of the input field.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end of the input field.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Returns the full, immutable option list.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Returns the options currently passing the filter, in source order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_combobox::combobox::{new, SelectOption};
    ///
    /// let mut combo = new(
    ///     "country",
    ///     vec![
    ///         SelectOption::new("us", "United States"),
    ///         SelectOption::new("uk", "United Kingdom"),
    ///     ],
    /// );
    /// combo.set_value("king");
    /// let visible = combo.filtered_options();
    /// assert_eq!(visible.len(), 1);
    /// assert_eq!(visible[0].value, "uk");
    /// ```
    pub fn filtered_options(&self) -> Vec<&SelectOption> {
        self.filtered.iter().map(|&i| &self.options[i]).collect()
    }

    /// Returns the currently confirmed selection, if any.
    pub fn selected(&self) -> Option<&SelectOption> {
        self.selection.map(|i| &self.options[i])
    }

    /// Returns the index of the confirmed selection in the full option list.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection
    }

    /// Commits the option at `index` (into the full option list) as the
    /// selection, mirroring a confirmed menu choice.
    ///
    /// The input text becomes the option's label and the menu closes. Out of
    /// range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index >= self.options.len() {
            return;
        }
        self.selection = Some(index);
        self.value = self.options[index].label.chars().collect();
        self.pos = self.value.len();
        self.menu_open = false;
        self.handle_overflow();
        self.apply_filter();
    }

    /// Returns the index (into the filtered list) of the highlighted row.
    pub fn highlighted_index(&self) -> usize {
        self.highlighted
    }

    /// Returns whether the menu is currently open.
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Opens the menu.
    pub fn open_menu(&mut self) {
        self.menu_open = true;
        self.sync_menu_window();
    }

    /// Closes the menu without accepting anything.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Returns whether the combobox currently has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Sets focus on the combobox, enabling it to receive key events.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    /// Removes focus and reconciles the in-progress input.
    ///
    /// Runs the installed blur policy: an exact (case-insensitive) label
    /// match commits that option; otherwise the prior selection's label is
    /// restored, or the input clears when no selection exists. The menu
    /// always closes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_combobox::combobox::{new, SelectOption};
    ///
    /// let mut combo = new(
    ///     "country",
    ///     vec![SelectOption::new("us", "United States")],
    /// );
    /// combo.focus();
    /// combo.set_value("united states");
    /// combo.blur();
    /// assert_eq!(combo.value(), "United States");
    /// assert_eq!(combo.selected().unwrap().value, "us");
    /// ```
    pub fn blur(&mut self) {
        self.focus = false;
        let reconciled = (self.blur_policy)(&self.value(), self.selection, &self.options);
        self.value = reconciled.text.chars().collect();
        self.pos = self.value.len();
        self.selection = reconciled.selection;
        self.menu_open = false;
        self.handle_overflow();
        self.apply_filter();
    }

    /// Clears the input text and resets the cursor to the beginning.
    ///
    /// The confirmed selection is left untouched.
    pub fn reset(&mut self) {
        self.value.clear();
        self.set_cursor(0);
        self.apply_filter();
    }

    /// Sets the label rendered above the input.
    pub fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    /// Sets the placeholder text displayed when the input is empty.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the display width of the input field in characters.
    ///
    /// Text longer than the width scrolls horizontally with the cursor. Use 0
    /// for no width limit.
    pub fn set_width(&mut self, width: i32) {
        self.width = width;
        self.handle_overflow();
    }

    /// Sets the maximum number of menu rows shown at once.
    ///
    /// Longer filtered lists scroll behind a window that follows the
    /// highlight. Values below 1 are clamped to 1.
    pub fn set_max_visible(&mut self, rows: usize) {
        self.max_visible = rows.max(1);
        self.sync_menu_window();
    }

    /// Installs a custom blur reconciliation policy.
    ///
    /// The policy decides what text and selection persist when focus leaves
    /// the input. The default is [`super::default_blur_policy`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_combobox::combobox::{new, Reconciled, SelectOption};
    ///
    /// let mut combo = new("demo", vec![SelectOption::new("a", "Apple")]);
    /// // Keep whatever was typed, never snap back.
    /// combo.set_blur_policy(Box::new(|input, selection, _options| Reconciled {
    ///     text: input.to_string(),
    ///     selection,
    /// }));
    /// ```
    pub fn set_blur_policy(&mut self, policy: BlurPolicy) {
        self.blur_policy = policy;
    }

    /// Processes a message and updates the combobox state.
    ///
    /// Handles menu navigation, text editing, and clipboard messages. Should
    /// be called from the application's update loop; messages are ignored
    /// while the component is not focused.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_combobox::combobox::{new, SelectOption};
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut combo = new("demo", vec![SelectOption::new("a", "Apple")]);
    /// combo.focus();
    ///
    /// let key_msg = KeyMsg {
    ///     key: KeyCode::Char('a'),
    ///     modifiers: KeyModifiers::NONE,
    /// };
    /// combo.update(Box::new(key_msg));
    /// assert_eq!(combo.value(), "a");
    /// assert!(combo.menu_open());
    /// ```
    pub fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        if !self.focus {
            return std::option::Option::None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if let Some(cmd) = self.handle_menu_keys(key_msg) {
                return cmd;
            }
            if let Some(cmd) = self.handle_clipboard_keys(key_msg) {
                return cmd;
            }

            let before = self.value.clone();
            self.handle_deletion_keys(key_msg);
            self.handle_movement_keys(key_msg);
            self.handle_character_input(key_msg);

            if self.value != before {
                // Text edits reopen the menu and recompute the candidates.
                self.menu_open = true;
                self.apply_filter();
            }
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            let chars: Vec<char> = paste_msg.0.chars().collect();
            if !chars.is_empty() {
                self.insert_runes_from_user_input(chars);
                self.menu_open = true;
                self.apply_filter();
            }
        }

        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            self.err = Some(paste_err.0.clone());
        }

        self.handle_overflow();
        std::option::Option::None
    }

    /// Handle menu navigation and acceptance key bindings.
    fn handle_menu_keys(&mut self, key_msg: &KeyMsg) -> Option<Option<Cmd>> {
        use crate::key::matches_binding;

        if matches_binding(key_msg, &self.key_map.next_option) {
            if !self.menu_open {
                self.open_menu();
            } else if !self.filtered.is_empty() {
                self.highlighted = (self.highlighted + 1) % self.filtered.len();
                self.sync_menu_window();
            }
            return Some(None);
        }

        if matches_binding(key_msg, &self.key_map.prev_option) {
            if !self.menu_open {
                self.open_menu();
            } else if !self.filtered.is_empty() {
                self.highlighted = if self.highlighted == 0 {
                    self.filtered.len() - 1
                } else {
                    self.highlighted - 1
                };
                self.sync_menu_window();
            }
            return Some(None);
        }

        if matches_binding(key_msg, &self.key_map.accept) {
            if self.menu_open && !self.filtered.is_empty() {
                let index = self.filtered[self.highlighted];
                self.select(index);
            }
            return Some(None);
        }

        if matches_binding(key_msg, &self.key_map.close_menu) {
            if self.menu_open {
                self.close_menu();
                return Some(None);
            }
            return None;
        }

        None
    }

    /// Handle clipboard-related key bindings.
    fn handle_clipboard_keys(&mut self, key_msg: &KeyMsg) -> Option<Option<Cmd>> {
        use crate::key::matches_binding;

        if matches_binding(key_msg, &self.key_map.paste) {
            return Some(Some(paste()));
        }

        None
    }

    /// Handle deletion-related key bindings.
    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) {
        use crate::key::matches_binding;

        if matches_binding(key_msg, &self.key_map.delete_word_backward) {
            self.delete_word_backward();
        } else if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            if !self.value.is_empty() && self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward) {
            if !self.value.is_empty() && self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if matches_binding(key_msg, &self.key_map.delete_after_cursor) {
            self.value.truncate(self.pos);
        } else if matches_binding(key_msg, &self.key_map.delete_before_cursor) {
            self.value = self.value[self.pos..].to_vec();
            self.set_cursor(0);
        }
    }

    /// Handle movement-related key bindings.
    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) {
        use crate::key::matches_binding;

        if matches_binding(key_msg, &self.key_map.word_backward) {
            self.word_backward();
        } else if matches_binding(key_msg, &self.key_map.character_backward) {
            if self.pos > 0 {
                self.set_cursor(self.pos - 1);
            }
        } else if matches_binding(key_msg, &self.key_map.word_forward) {
            self.word_forward();
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            if self.pos < self.value.len() {
                self.set_cursor(self.pos + 1);
            }
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.cursor_start();
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.cursor_end();
        }
    }

    /// Handle regular character input.
    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        if let KeyCode::Char(ch) = key_msg.key {
            // Accept when no control/alt modifiers; allow shift (encoded in char case)
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_runes_from_user_input(vec![ch]);
            }
        }
    }

    /// Insert runes at the cursor position.
    pub(super) fn insert_runes_from_user_input(&mut self, runes: Vec<char>) {
        for r in runes {
            self.value.insert(self.pos, r);
            self.pos += 1;
        }
        self.handle_overflow();
    }

    /// Move the cursor to the start of the previous word.
    fn word_backward(&mut self) {
        let mut pos = self.pos;
        while pos > 0 && self.value[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !self.value[pos - 1].is_whitespace() {
            pos -= 1;
        }
        self.set_cursor(pos);
    }

    /// Move the cursor past the end of the next word.
    fn word_forward(&mut self) {
        let mut pos = self.pos;
        while pos < self.value.len() && self.value[pos].is_whitespace() {
            pos += 1;
        }
        while pos < self.value.len() && !self.value[pos].is_whitespace() {
            pos += 1;
        }
        self.set_cursor(pos);
    }

    /// Delete the word before the cursor.
    fn delete_word_backward(&mut self) {
        let end = self.pos;
        self.word_backward();
        let start = self.pos;
        self.value.drain(start..end);
        self.handle_overflow();
    }

    /// Handle overflow for the horizontal scrolling viewport.
    pub(super) fn handle_overflow(&mut self) {
        if self.width <= 0 || self.value.len() <= self.width as usize {
            self.offset = 0;
            self.offset_right = self.value.len();
            return;
        }

        self.offset_right = self.offset_right.min(self.value.len());

        if self.pos < self.offset {
            self.offset = self.pos;
            self.offset_right = (self.offset + self.width as usize).min(self.value.len());
        } else if self.pos >= self.offset_right {
            self.offset_right = self.pos;
            self.offset = self.offset_right.saturating_sub(self.width as usize);
        }
    }
}

impl Component for Model {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd> {
        self.focus()
    }

    /// Sets the component to blurred state, running blur reconciliation.
    fn blur(&mut self) {
        self.blur()
    }

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool {
        self.focused()
    }
}

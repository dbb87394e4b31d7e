//! View rendering methods for the combobox component.

use super::model::{Model, TOGGLE_CLOSED, TOGGLE_OPEN};
use unicode_width::UnicodeWidthStr;

impl Model {
    /// Renders the combobox in its current state.
    ///
    /// The output is the optional label line, the input line with the menu
    /// toggle indicator, and — while the menu is open and at least one option
    /// passes the filter — up to `max_visible` menu rows. An empty filtered
    /// list hides the menu entirely.
    pub fn view(&self) -> String {
        let mut lines = Vec::new();

        if !self.label.is_empty() {
            lines.push(self.label_style.render(&self.label));
        }

        lines.push(self.input_view());

        if self.menu_open && !self.filtered.is_empty() {
            lines.push(self.menu_view());
        }

        lines.join("\n")
    }

    /// Renders the input line: prompt, text (or placeholder), cursor, and
    /// the menu toggle indicator.
    fn input_view(&self) -> String {
        let toggle = if self.menu_open {
            TOGGLE_OPEN
        } else {
            TOGGLE_CLOSED
        };

        let body = if self.value.is_empty() && !self.placeholder.is_empty() {
            self.placeholder_view()
        } else {
            self.text_view()
        };

        format!(
            "{}{} {}",
            self.prompt_style.render(&self.prompt),
            body,
            self.toggle_style.render(toggle)
        )
    }

    /// Renders the visible slice of the input text with the cursor overlay.
    fn text_view(&self) -> String {
        let visible: &[char] = if self.offset_right <= self.value.len() {
            &self.value[self.offset..self.offset_right]
        } else {
            &self.value[self.offset..]
        };
        let pos = self.pos.saturating_sub(self.offset);

        let mut v = String::new();
        let before: String = visible[..pos.min(visible.len())].iter().collect();
        v.push_str(&self.text_style.render(&before));

        if self.focus {
            if pos < visible.len() {
                v.push_str(&self.cursor_style.render(&visible[pos].to_string()));
                let after: String = visible[pos + 1..].iter().collect();
                v.push_str(&self.text_style.render(&after));
            } else {
                v.push_str(&self.cursor_style.render(" "));
            }
        } else if pos < visible.len() {
            let after: String = visible[pos..].iter().collect();
            v.push_str(&self.text_style.render(&after));
        }

        let plain: String = visible.iter().collect();
        v.push_str(&self.padding_for(&plain, self.focus));
        v
    }

    /// Renders the placeholder with the cursor over its first character.
    fn placeholder_view(&self) -> String {
        let mut v = String::new();
        let chars: Vec<char> = self.placeholder.chars().collect();

        if self.focus {
            if let Some(first) = chars.first() {
                v.push_str(&self.cursor_style.render(&first.to_string()));
            }
            let rest: String = chars.iter().skip(1).collect();
            v.push_str(&self.placeholder_style.render(&rest));
        } else {
            v.push_str(&self.placeholder_style.render(&self.placeholder));
        }

        v.push_str(&self.padding_for(&self.placeholder, false));
        v
    }

    /// Pads the input body out to the configured width.
    fn padding_for(&self, plain: &str, cursor_at_end: bool) -> String {
        if self.width <= 0 {
            return String::new();
        }
        let mut used = plain.width();
        if cursor_at_end && self.pos >= self.value.len() {
            used += 1; // trailing cursor block
        }
        let padding = (self.width as usize).saturating_sub(used);
        " ".repeat(padding)
    }

    /// Renders the open menu window.
    fn menu_view(&self) -> String {
        let max_visible = self.max_visible.max(1);
        let end = (self.menu_offset + max_visible).min(self.filtered.len());

        let mut rows = Vec::with_capacity(end - self.menu_offset);
        for row in self.menu_offset..end {
            let option_index = self.filtered[row];
            let option = &self.options[option_index];

            let style = if row == self.highlighted {
                &self.highlight_style
            } else if Some(option_index) == self.selection {
                &self.selected_style
            } else {
                &self.option_style
            };
            rows.push(format!("  {}", style.render(&option.label)));
        }

        rows.join("\n")
    }
}

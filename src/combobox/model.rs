//! Core model implementation for the combobox component.

use super::keymap::{default_key_map, KeyMap};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{BlurPolicy, PasteErrMsg, SelectOption};
use crate::combobox::reconcile::default_blur_policy;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::time::Duration;

/// Indicator appended to the input line while the menu is closed.
pub(super) const TOGGLE_CLOSED: &str = "▼";
/// Indicator appended to the input line while the menu is open.
pub(super) const TOGGLE_OPEN: &str = "▲";

/// The searchable dropdown/combobox model for Bubble Tea applications.
///
/// The component owns a fixed, ordered list of [`SelectOption`]s and a
/// single-line text input. It supports:
/// - Case-insensitive substring filtering of the menu as the user types
/// - Highlight navigation through the filtered options
/// - Committing an option with Enter (text becomes the option's label)
/// - Blur reconciliation through a replaceable policy function
/// - Horizontal scrolling for input wider than the display width
/// - Customizable styling and key bindings
///
/// The model follows the Elm Architecture pattern used by Bubble Tea, with
/// separate `update()` and `view()` methods for state management.
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
/// combo.focus();
/// combo.set_label("Choose an option:");
/// combo.set_width(30);
/// ```
pub struct Model {
    /// Opaque identifier attached to the component for external addressing.
    pub id: String,

    /// Label rendered above the input, empty for none.
    pub label: String,
    /// Style for the label line.
    pub label_style: Style,

    /// Prompt is the prompt to display before the text input.
    pub prompt: String,
    /// Style for the prompt prefix.
    pub prompt_style: Style,

    /// TextStyle is the style of the text as it's being typed.
    pub text_style: Style,

    /// Placeholder is the placeholder text to display when the input is empty.
    pub placeholder: String,
    /// Style for the placeholder text.
    pub placeholder_style: Style,

    /// Style for the character under the cursor.
    pub cursor_style: Style,

    /// Style for the menu toggle indicator.
    pub toggle_style: Style,
    /// Style for unhighlighted menu rows.
    pub option_style: Style,
    /// Style for the highlighted menu row.
    pub highlight_style: Style,
    /// Style applied on top of a row holding the confirmed selection.
    pub selected_style: Style,

    /// Width is the maximum number of characters that can be displayed at once.
    pub width: i32,

    /// KeyMap encodes the keybindings.
    pub key_map: KeyMap,

    /// Err is an error that was not absorbed into display state, e.g. a
    /// clipboard failure.
    pub err: Option<String>,

    /// The fixed option list, immutable for the component's lifetime.
    pub(super) options: Vec<SelectOption>,

    /// Value is the value of the text input.
    pub(super) value: Vec<char>,

    /// Focus indicates whether the input is focused.
    pub(super) focus: bool,

    /// Position is the cursor position.
    pub(super) pos: usize,

    /// Internal fields for managing horizontal overflow.
    pub(super) offset: usize,
    pub(super) offset_right: usize,

    /// Indices into `options` of the rows currently passing the filter.
    pub(super) filtered: Vec<usize>,
    /// Index into `options` of the confirmed selection, if any.
    pub(super) selection: Option<usize>,
    /// Index into `filtered` of the highlighted menu row.
    pub(super) highlighted: usize,
    /// Whether the menu is open.
    pub(super) menu_open: bool,
    /// First row of the visible menu window (index into `filtered`).
    pub(super) menu_offset: usize,
    /// Maximum number of menu rows shown at once.
    pub(super) max_visible: usize,

    /// Policy deciding what text/selection persists after blur.
    pub(super) blur_policy: BlurPolicy,
}

/// Creates a new combobox model over a fixed option list.
///
/// The returned model is not focused by default; call `focus()` to enable
/// keyboard input. The menu starts closed with every option visible and the
/// default blur reconciliation policy installed.
///
/// # Arguments
///
/// * `id` - Opaque identifier for external addressing
/// * `options` - The fixed ordered list of selectable options
///
/// # Examples
///
/// ```rust
/// use bubbletea_combobox::combobox::{new, SelectOption};
///
/// let combo = new("fruit", vec![SelectOption::new("a", "Apple")]);
/// assert_eq!(combo.id, "fruit");
/// assert_eq!(combo.value(), "");
/// assert!(combo.selected().is_none());
/// ```
pub fn new(id: impl Into<String>, options: Vec<SelectOption>) -> Model {
    let filtered = (0..options.len()).collect();
    Model {
        id: id.into(),
        label: String::new(),
        label_style: Style::new().foreground(Color::from("243")),
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: "Select...".to_string(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new().reverse(true),
        toggle_style: Style::new().foreground(Color::from("243")),
        option_style: Style::new(),
        highlight_style: Style::new().reverse(true),
        selected_style: Style::new().bold(true),
        width: 0,
        key_map: default_key_map(),
        err: None,
        options,
        value: Vec::new(),
        focus: false,
        pos: 0,
        offset: 0,
        offset_right: 0,
        filtered,
        selection: None,
        highlighted: 0,
        menu_open: false,
        menu_offset: 0,
        max_visible: 5,
        blur_policy: default_blur_policy(),
    }
}

impl Default for Model {
    fn default() -> Self {
        new("combobox", Vec::new())
    }
}

/// Creates a command that retrieves text from the system clipboard.
///
/// This command reads the current clipboard contents and sends a paste
/// message that can be handled by the combobox's `update()` method. It is
/// scheduled internally when the paste binding fires.
///
/// # Errors
///
/// The returned command produces a `PasteErrMsg` if the clipboard is not
/// accessible or the `clipboard-support` feature is disabled.
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, std::option::Option<Cmd>) {
        (Model::default(), std::option::Option::None)
    }

    fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

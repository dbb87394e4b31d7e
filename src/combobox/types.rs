//! Core types for the combobox component.

use bubbletea_rs::Msg;
use std::fmt::Display;

/// A selectable option shown in the dropdown menu.
///
/// Options are immutable (value, label) pairs supplied when the component is
/// constructed; the combobox never creates or destroys them. The `value` is a
/// unique identifier and the `label` is the text displayed to the user.
///
/// # Examples
///
/// ```rust
/// use bubbletea_combobox::combobox::SelectOption;
///
/// let option = SelectOption::new("us", "United States");
/// assert_eq!(option.value, "us");
/// assert_eq!(option.label, "United States");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Unique identifier for the option.
    pub value: String,
    /// Display text shown in the input and menu.
    pub label: String,
}

impl SelectOption {
    /// Creates a new option from a value and a label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl Display for SelectOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// The outcome of blur reconciliation: the text to display and the index of
/// the selected option (into the full option list), if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    /// Text the input should display after blur.
    pub text: String,
    /// Index of the committed selection in the full option list, or `None`.
    pub selection: Option<usize>,
}

/// BlurPolicy decides what text and selection persist when the input loses
/// focus.
///
/// The policy receives the in-progress input text, the index of the prior
/// selection (if any), and the full option list. It returns the reconciled
/// (text, selection) pair that becomes the component's state. The default
/// policy is [`super::default_blur_policy`].
///
/// Add Send to satisfy the bubbletea-rs Model:Send bound transitively.
pub type BlurPolicy = Box<dyn Fn(&str, Option<usize>, &[SelectOption]) -> Reconciled + Send>;

/// Clipboard paste message carrying raw text.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste error message.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}

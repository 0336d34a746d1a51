//! Form-control model: checkboxes, text inputs, and the document that
//! holds them.

use serde::{Deserialize, Serialize};

pub mod document;

pub use document::{Document, DocumentError};

/// A checkbox-like control with a unique element identifier and a checked
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkbox {
    pub id: String,
    pub checked: bool,
}

impl Checkbox {
    pub fn new(id: impl Into<String>, checked: bool) -> Self {
        Self { id: id.into(), checked }
    }
}

/// A text-input control located by its name attribute. Name attributes are
/// logical field names and may be shared by several inputs; the element
/// identifier stays unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInput {
    pub id: String,
    pub name: String,
    pub value: String,
}

impl TextInput {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: String::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// Any control a document can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    Checkbox(Checkbox),
    TextInput(TextInput),
}

impl Control {
    /// Element identifier of the underlying control.
    pub fn id(&self) -> &str {
        match self {
            Control::Checkbox(checkbox) => &checkbox.id,
            Control::TextInput(input) => &input.id,
        }
    }
}

impl From<Checkbox> for Control {
    fn from(checkbox: Checkbox) -> Self {
        Control::Checkbox(checkbox)
    }
}

impl From<TextInput> for Control {
    fn from(input: TextInput) -> Self {
        Control::TextInput(input)
    }
}

/// How a sync call names its checkbox: a direct reference, or an element
/// identifier resolved against the document.
#[derive(Debug, Clone, Copy)]
pub enum CheckboxRef<'a> {
    Direct(&'a Checkbox),
    ById(&'a str),
}

impl<'a> From<&'a Checkbox> for CheckboxRef<'a> {
    fn from(checkbox: &'a Checkbox) -> Self {
        CheckboxRef::Direct(checkbox)
    }
}

impl<'a> From<&'a str> for CheckboxRef<'a> {
    fn from(id: &'a str) -> Self {
        CheckboxRef::ById(id)
    }
}

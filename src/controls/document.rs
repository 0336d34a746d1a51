use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, trace};
use thiserror::Error;

use super::{Checkbox, CheckboxRef, Control, TextInput};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("duplicate element identifier: {0}")]
    DuplicateId(String),
}

/// An ordered collection of form controls, queried by element identifier
/// or by name attribute. Element identifiers are unique within a document.
#[derive(Debug, Default, Clone)]
pub struct Document {
    controls: Vec<Control>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a control, rejecting a duplicate element identifier.
    pub fn insert(&mut self, control: impl Into<Control>) -> Result<(), DocumentError> {
        let control = control.into();
        if self.control_by_id(control.id()).is_some() {
            return Err(DocumentError::DuplicateId(control.id().to_string()));
        }

        self.controls.push(control);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn control_by_id(&self, id: &str) -> Option<&Control> {
        self.controls.iter().find(|control| control.id() == id)
    }

    pub fn checkbox_by_id(&self, id: &str) -> Option<&Checkbox> {
        match self.control_by_id(id) {
            Some(Control::Checkbox(checkbox)) => Some(checkbox),
            _ => None,
        }
    }

    pub fn checkbox_by_id_mut(&mut self, id: &str) -> Option<&mut Checkbox> {
        self.controls.iter_mut().find_map(|control| match control {
            Control::Checkbox(checkbox) if checkbox.id == id => Some(checkbox),
            _ => None,
        })
    }

    /// All inputs whose name attribute equals `name`, in document order.
    pub fn inputs_by_name(&self, name: &str) -> Vec<&TextInput> {
        self.controls
            .iter()
            .filter_map(|control| match control {
                Control::TextInput(input) if input.name == name => Some(input),
                _ => None,
            })
            .collect()
    }

    fn inputs_by_name_mut(&mut self, name: &str) -> Vec<&mut TextInput> {
        self.controls
            .iter_mut()
            .filter_map(|control| match control {
                Control::TextInput(input) if input.name == name => Some(input),
                _ => None,
            })
            .collect()
    }

    /// First input matching the name attribute, if any.
    pub fn input_by_name(&self, name: &str) -> Option<&TextInput> {
        self.controls.iter().find_map(|control| match control {
            Control::TextInput(input) if input.name == name => Some(input),
            _ => None,
        })
    }

    /// Mirror a checkbox's checked state into every input named
    /// `input_name`, as the string `"true"` or `"false"`.
    ///
    /// A checkbox that cannot be resolved, or a name that matches no input,
    /// leaves the document untouched.
    pub fn set_input_by_checkbox(&mut self, input_name: &str, checkbox: CheckboxRef<'_>) {
        let checked = match checkbox {
            CheckboxRef::Direct(checkbox) => checkbox.checked,
            CheckboxRef::ById(id) => match self.checkbox_by_id(id) {
                Some(checkbox) => checkbox.checked,
                None => {
                    debug!("no checkbox with id {:?}, inputs left untouched", id);
                    return;
                }
            },
        };

        let inputs = self.inputs_by_name_mut(input_name);
        let matched = inputs.len();
        for input in inputs {
            input.value = checked.to_string();
        }

        if matched == 0 {
            debug!("no input named {:?}, nothing to sync", input_name);
        } else {
            trace!(
                "synced {} input(s) named {:?} to {}",
                matched,
                input_name,
                checked
            );
        }
    }

    /// Load a control snapshot from a JSON file. A missing file yields an
    /// empty document.
    pub fn load(path: &Path) -> Result<Self> {
        let mut document = Document::new();

        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read control snapshot: {}", path.display()))?;
            let controls: Vec<Control> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse control snapshot: {}", path.display()))?;

            for control in controls {
                document.insert(control).with_context(|| {
                    format!("Invalid control snapshot: {}", path.display())
                })?;
            }

            trace!("loaded {} control(s) from {}", document.len(), path.display());
        }

        Ok(document)
    }

    /// Write the control snapshot as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.controls)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write control snapshot: {}", path.display()))?;
        Ok(())
    }
}

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::form::reducer::{add_item, remove_item, update_array_field, update_scalar_field, FormError};
use crate::models::resume::{ItemField, ResumeDocument, ScalarField, Section};

/// A single form event, already resolved to typed keys.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    UpdateField {
        field: ScalarField,
        value: String,
    },
    UpdateItem {
        section: Section,
        index: usize,
        field: ItemField,
        value: String,
    },
    AddItem {
        section: Section,
    },
    RemoveItem {
        section: Section,
        index: usize,
    },
}

impl FormAction {
    /// Builds an `UpdateField` from a raw wire key.
    pub fn update_field(key: &str, value: impl Into<String>) -> Result<Self, FormError> {
        let field = ScalarField::from_key(key).ok_or_else(|| FormError::unknown_field(key))?;
        Ok(FormAction::UpdateField {
            field,
            value: value.into(),
        })
    }

    /// Builds an `UpdateItem` from raw wire keys; the field key is resolved
    /// against the section's item shape.
    pub fn update_item(
        section_key: &str,
        index: usize,
        field_key: &str,
        value: impl Into<String>,
    ) -> Result<Self, FormError> {
        let section = parse_section(section_key)?;
        let field = ItemField::for_section(section, field_key)
            .ok_or_else(|| FormError::unknown_field(field_key))?;
        Ok(FormAction::UpdateItem {
            section,
            index,
            field,
            value: value.into(),
        })
    }

    pub fn add_item(section_key: &str) -> Result<Self, FormError> {
        Ok(FormAction::AddItem {
            section: parse_section(section_key)?,
        })
    }

    pub fn remove_item(section_key: &str, index: usize) -> Result<Self, FormError> {
        Ok(FormAction::RemoveItem {
            section: parse_section(section_key)?,
            index,
        })
    }
}

pub fn parse_section(key: &str) -> Result<Section, FormError> {
    Section::from_key(key).ok_or_else(|| FormError::UnknownSection {
        section: key.to_string(),
    })
}

/// An immutable view of the document at a given revision.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSnapshot {
    pub revision: u64,
    pub document: Arc<ResumeDocument>,
}

/// Per-section summary the form needs to draw its controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSummary {
    pub section: Section,
    pub heading: &'static str,
    pub item_count: usize,
    pub removable: bool,
}

/// Revision and section summaries read in one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub revision: u64,
    pub sections: Vec<SectionSummary>,
}

/// Owner of the canonical document. Mutations swap in a new snapshot.
#[derive(Debug, Default)]
pub struct FormStateStore {
    current: Arc<ResumeDocument>,
    revision: u64,
}

impl FormStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            revision: self.revision,
            document: Arc::clone(&self.current),
        }
    }

    #[cfg(test)]
    pub fn document(&self) -> &ResumeDocument {
        &self.current
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn apply(&mut self, action: FormAction) -> Result<DocumentSnapshot, FormError> {
        let doc = self.current.as_ref();
        let next = match &action {
            FormAction::UpdateField { field, value } => {
                update_scalar_field(doc, *field, value.as_str())
            }
            FormAction::UpdateItem {
                section,
                index,
                field,
                value,
            } => update_array_field(doc, *section, *index, *field, value.as_str())?,
            FormAction::AddItem { section } => add_item(doc, *section),
            FormAction::RemoveItem { section, index } => remove_item(doc, *section, *index)?,
        };

        if next != *doc {
            self.current = Arc::new(next);
            self.revision += 1;
            debug!(revision = self.revision, ?action, "Form state updated");
        } else {
            debug!(revision = self.revision, ?action, "Form action left document unchanged");
        }

        Ok(self.snapshot())
    }

    pub fn form_view(&self) -> FormView {
        FormView {
            revision: self.revision(),
            sections: self.sections(),
        }
    }

    fn sections(&self) -> Vec<SectionSummary> {
        Section::ALL
            .into_iter()
            .map(|section| {
                let item_count = self.current.section_len(section);
                SectionSummary {
                    section,
                    heading: section.heading(),
                    item_count,
                    removable: item_count > 1,
                }
            })
            .collect()
    }
}

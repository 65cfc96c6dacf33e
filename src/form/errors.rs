//! Per-field validation errors plus the reserved general slot.

use std::collections::BTreeMap;

use crate::form::field::Field;

/// Mapping from field to a human-readable message, with one reserved
/// slot for whole-submission failures that belong to no single field.
///
/// A field appears here only while its current value fails validation
/// or after a submission-level failure; editing a field clears its slot
/// immediately. The general slot is only cleared by the next submit
/// attempt, never by a field edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    fields: BTreeMap<Field, String>,
    general: Option<String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for one field, replacing any previous one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    /// Drop the entry for one field, if any.
    pub fn remove(&mut self, field: Field) {
        self.fields.remove(&field);
    }

    /// Current message for one field.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Record a whole-submission failure message.
    pub fn set_general(&mut self, message: impl Into<String>) {
        self.general = Some(message.into());
    }

    /// Current whole-submission failure message.
    pub fn general(&self) -> Option<&str> {
        self.general.as_deref()
    }

    /// True when no field entry and no general message is present.
    /// "Valid" is defined as exactly this.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.general.is_none()
    }

    /// Number of entries, counting the general slot as one.
    pub fn len(&self) -> usize {
        self.fields.len() + usize::from(self.general.is_some())
    }

    /// Drop every entry, general slot included.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.general = None;
    }

    /// Field entries in `Field` declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

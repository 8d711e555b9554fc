//! # Draft Validation
//!
//! Synchronous per-field checks run on every submit attempt. The result is a
//! complete map of failing fields; an empty map means the draft may be sent.

use std::collections::BTreeMap;

use lib_utils::{is_blank, is_valid_email, is_valid_phone};

use crate::draft::RegistrationDraft;
use crate::field::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    Required,
    InvalidFormat,
    SelectionRequired,
}

/// A failing field's kind and the inline message shown under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ValidationErrorKind,
    pub message: &'static str,
}

impl FieldError {
    fn new(kind: ValidationErrorKind, message: &'static str) -> Self {
        Self { kind, message }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.entries.get(&field)
    }

    pub fn kind(&self, field: Field) -> Option<ValidationErrorKind> {
        self.get(field).map(|e| e.kind)
    }

    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(|e| e.message)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    /// Failing fields in display order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.keys().copied()
    }

    /// Drop one field's entry. Returns whether there was one.
    pub fn clear(&mut self, field: Field) -> bool {
        self.entries.remove(&field).is_some()
    }

    fn insert(&mut self, field: Field, kind: ValidationErrorKind, message: &'static str) {
        self.entries.insert(field, FieldError::new(kind, message));
    }
}

/// Check every field of the draft.
pub fn validate(draft: &RegistrationDraft) -> ValidationErrors {
    use ValidationErrorKind::*;

    let mut errors = ValidationErrors::default();

    if is_blank(&draft.full_name) {
        errors.insert(Field::FullName, Required, "Name is required");
    }

    if is_blank(&draft.email) {
        errors.insert(Field::Email, Required, "Email is required");
    } else if !is_valid_email(&draft.email) {
        errors.insert(Field::Email, InvalidFormat, "Invalid email format");
    }

    if is_blank(&draft.phone) {
        errors.insert(Field::Phone, Required, "Phone is required");
    } else if !is_valid_phone(&draft.phone) {
        errors.insert(Field::Phone, InvalidFormat, "Invalid phone number");
    }

    if draft.year.is_none() {
        errors.insert(Field::Year, Required, "Year is required");
    }

    if is_blank(&draft.branch) {
        errors.insert(Field::Branch, Required, "Branch is required");
    }

    if draft.experience.is_none() {
        errors.insert(Field::Experience, Required, "Experience level is required");
    }

    if draft.interests().is_empty() {
        errors.insert(Field::Interests, SelectionRequired, "Select at least one interest");
    }

    errors
}

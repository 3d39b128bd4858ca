//! Registration form field state.
//!
//! This module contains the record of form input values, the typed field
//! names used to update it, and the check that decides whether the record may
//! be submitted.

use super::StateError;
use crate::identity::Registration;

/// Specifying the registration form fields.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Field {
    UserName,
    FirstName,
    LastName,
    Email,
    Password,
    Terms,
}

impl Field {
    /// Fields holding text, in display order.
    pub const TEXT: [Field; 5] = [
        Field::UserName,
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Password,
    ];

    /// Returns the field's name as sent to the identity service.
    ///
    pub fn name(&self) -> &'static str {
        match self {
            Field::UserName => "userName",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Password => "password",
            Field::Terms => "terms",
        }
    }

    /// Returns the label shown next to the input.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Field::UserName => "Username",
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email Address",
            Field::Password => "Password",
            Field::Terms => "Terms",
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self, Field::Terms)
    }
}

/// Value supplied when updating a field.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

/// Houses the current value of every registration input.
///
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct RegistrationForm {
    user_name: String,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    terms_accepted: bool,
}

impl RegistrationForm {
    /// Return a new instance with every field at its default.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace exactly one field, leaving the others unchanged. Checkbox
    /// fields take a checked state and text fields take the raw text.
    ///
    pub fn set_field(&mut self, field: Field, value: FieldValue) -> Result<(), StateError> {
        match (field, value) {
            (Field::Terms, FieldValue::Checked(checked)) => self.terms_accepted = checked,
            (Field::Terms, FieldValue::Text(_)) => {
                return Err(StateError::FieldTypeMismatch {
                    field: field.name(),
                    expected: "checked",
                })
            }
            (_, FieldValue::Checked(_)) => {
                return Err(StateError::FieldTypeMismatch {
                    field: field.name(),
                    expected: "text",
                })
            }
            (_, FieldValue::Text(text)) => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = text;
                }
            }
        }
        Ok(())
    }

    /// Return the current value of the field.
    ///
    pub fn value(&self, field: Field) -> FieldValue {
        match self.text(field) {
            Some(text) => FieldValue::Text(text.to_owned()),
            None => FieldValue::Checked(self.terms_accepted),
        }
    }

    /// Return the text of a text field, or None for the checkbox.
    ///
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::UserName => Some(&self.user_name),
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::Terms => None,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::UserName => Some(&mut self.user_name),
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::Terms => None,
        }
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }
}

impl From<&RegistrationForm> for Registration {
    fn from(form: &RegistrationForm) -> Self {
        Registration {
            user_name: form.user_name.clone(),
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            terms: form.terms_accepted,
        }
    }
}

/// Returns true if every text field is non-empty and the terms are accepted.
///
pub fn is_submittable(form: &RegistrationForm) -> bool {
    Field::TEXT
        .iter()
        .all(|field| form.text(*field).map_or(false, |text| !text.is_empty()))
        && form.terms_accepted
}

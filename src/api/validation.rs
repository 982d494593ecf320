//! Field constraint checks for request bodies and parameters
//!
//! All violations of a request are collected first and reported together

use serde::Serialize;

use crate::patch::Patch;

use super::Error;

/// Maximum length of names and titles
pub const NAME_MAX_LENGTH: usize = 200;

/// A single violated field constraint
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the field as it appears in the request
    pub field: &'static str,

    /// What is wrong with it
    pub message: String,
}

/// Collects field constraint violations
#[derive(Debug, Default)]
pub struct Violations {
    errors: Vec<FieldError>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a violation for a field
    pub fn push<M>(&mut self, field: &'static str, message: M) -> &mut Self
    where
        M: ToString,
    {
        self.errors.push(FieldError {
            field,
            message: message.to_string(),
        });
        self
    }

    /// Length in characters must be within `min..=max`
    pub fn length(&mut self, field: &'static str, value: &str, min: usize, max: usize) -> &mut Self {
        let length = value.chars().count();

        if length < min {
            self.push(field, format!("must be at least {min} characters"));
        } else if length > max {
            self.push(field, format!("must be at most {max} characters"));
        }

        self
    }

    /// Length in characters must not exceed `max`, when a value is given
    pub fn optional_length(
        &mut self,
        field: &'static str,
        value: Option<&str>,
        max: usize,
    ) -> &mut Self {
        if let Some(value) = value {
            self.length(field, value, 0, max);
        }

        self
    }

    /// Referenced IDs start at 1
    pub fn id(&mut self, field: &'static str, value: i64) -> &mut Self {
        if value < 1 {
            self.push(field, "must be greater than or equal to 1");
        }

        self
    }

    /// Patch on a required text column: not `null`, length within `min..=max`
    pub fn required_text_patch(
        &mut self,
        field: &'static str,
        patch: &Patch<String>,
        min: usize,
        max: usize,
    ) -> &mut Self {
        match patch {
            Patch::Missing => {}
            Patch::Null => {
                self.push(field, "may not be null");
            }
            Patch::Value(value) => {
                self.length(field, value, min, max);
            }
        }

        self
    }

    /// Patch on a nullable text column: length must not exceed `max`
    pub fn text_patch(&mut self, field: &'static str, patch: &Patch<String>, max: usize) -> &mut Self {
        self.optional_length(field, patch.value().map(String::as_str), max)
    }

    /// Patch on a required reference: not `null`, a valid ID
    pub fn required_id_patch(&mut self, field: &'static str, patch: &Patch<i64>) -> &mut Self {
        if patch.is_null() {
            self.push(field, "may not be null");
        }

        self.id_patch(field, patch)
    }

    /// Patch on a nullable reference: a valid ID when set
    pub fn id_patch(&mut self, field: &'static str, patch: &Patch<i64>) -> &mut Self {
        if let Some(value) = patch.value() {
            self.id(field, *value);
        }

        self
    }

    /// Any violations result in an error
    pub fn finish(&mut self) -> Result<(), Error> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(Error::validation(std::mem::take(&mut self.errors)))
        }
    }
}

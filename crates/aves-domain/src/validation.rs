//! Input-time validation for bird creation forms
//!
//! These checks run when the admin submits the creator form. The catalog
//! store itself never re-validates: a bird accepted by the server is stored
//! as returned.

use crate::bird::NewBird;
use serde::{Deserialize, Serialize};

/// Severity of a validation finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// A validation error tied to a single form field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl ValidationError {
    fn error(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            severity: ValidationSeverity::Error,
        }
    }
}

fn contains_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

/// Validate a bird creation payload. Empty result means the form may submit.
pub fn validate_new_bird(bird: &NewBird) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if bird.name.trim().is_empty() {
        errors.push(ValidationError::error(
            "name",
            "Por favor ingresa el nombre del ave.",
        ));
    } else if contains_digit(&bird.name) {
        errors.push(ValidationError::error(
            "name",
            "El nombre del ave no puede contener números!",
        ));
    }

    if bird.scientific_name.trim().is_empty() {
        errors.push(ValidationError::error(
            "scientific_name",
            "Por favor ingresa el nombre científico.",
        ));
    } else if contains_digit(&bird.scientific_name) {
        errors.push(ValidationError::error(
            "scientific_name",
            "El nombre científico no puede contener números!",
        ));
    }

    if bird.description.trim().is_empty() {
        errors.push(ValidationError::error(
            "description",
            "Por favor ingresa la descripción!",
        ));
    }

    if bird.image.trim().is_empty() {
        errors.push(ValidationError::error(
            "image",
            "Por favor selecciona una imagen!",
        ));
    }

    errors
}

use std::error::Error;
use std::fmt;

use crate::domain::validation::ValidationIssue;

#[derive(Debug, PartialEq)]
pub enum UserError {
    Validation(ValidationIssue),
    UnknownFields(Vec<String>),
    DuplicateEmail,
    NotFound,
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserError::Validation(
                ValidationIssue::EmailFormat | ValidationIssue::EmailDomain,
            ) => {
                write!(f, "Email no válido. Solo se aceptan emails de gmail y hotmail")
            }
            UserError::Validation(issue) => write!(f, "{}", issue.field_message()),
            UserError::UnknownFields(fields) => {
                write!(f, "Campos no permitidos: {}", fields.join(", "))
            }
            UserError::DuplicateEmail => write!(f, "El email ya está en uso"),
            UserError::NotFound => write!(f, "Usuario no encontrado"),
        }
    }
}

impl Error for UserError {}

impl From<ValidationIssue> for UserError {
    fn from(issue: ValidationIssue) -> Self {
        UserError::Validation(issue)
    }
}

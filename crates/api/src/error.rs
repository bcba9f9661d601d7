// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::viewer::ViewerError;
use timetable::CoreError;
use timetable_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// No timetable has been generated yet.
    NotGenerated,
    /// The operation is not possible in the current state.
    PreconditionFailed {
        /// A human-readable description of the missing precondition.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::NotGenerated => write!(f, "No timetable has been generated yet"),
            Self::PreconditionFailed { message } => {
                write!(f, "Precondition failed: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ViewerError> for ApiError {
    fn from(err: ViewerError) -> Self {
        match err {
            ViewerError::InvalidRole(_) => Self::InvalidInput {
                field: String::from("role"),
                message: err.to_string(),
            },
            ViewerError::MissingId(_) => Self::InvalidInput {
                field: String::from("id"),
                message: err.to_string(),
            },
            ViewerError::NoFaculty | ViewerError::NoStudents => Self::PreconditionFailed {
                message: err.to_string(),
            },
            ViewerError::UnknownFaculty(_) => Self::ResourceNotFound {
                resource_type: String::from("Faculty"),
                message: err.to_string(),
            },
            ViewerError::UnknownStudent(_) => Self::ResourceNotFound {
                resource_type: String::from("Student"),
                message: err.to_string(),
            },
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidReference {
            subject,
            faculty_id,
        } => ApiError::DomainRuleViolation {
            rule: String::from("subject_faculty_reference"),
            message: format!(
                "Subject '{subject}' references unknown faculty '{}'",
                faculty_id.value()
            ),
        },
        DomainError::FacultyNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Faculty"),
            message: format!("Faculty '{}' does not exist", id.value()),
        },
        DomainError::DuplicateId { entity, id } => ApiError::DomainRuleViolation {
            rule: format!("unique_{entity}_id"),
            message: format!("Duplicate {entity} identifier '{id}'"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

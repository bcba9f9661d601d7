// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::FacultyId;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity name is empty or invalid.
    InvalidName(String),
    /// A subject references a faculty member that does not exist.
    InvalidReference {
        /// The name of the subject carrying the reference.
        subject: String,
        /// The faculty identifier that could not be resolved.
        faculty_id: FacultyId,
    },
    /// Faculty member does not exist.
    FacultyNotFound(FacultyId),
    /// Two entities of the same kind share an identifier.
    DuplicateId {
        /// The kind of entity (e.g. "faculty").
        entity: &'static str,
        /// The repeated identifier.
        id: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidReference {
                subject,
                faculty_id,
            } => {
                write!(
                    f,
                    "Subject '{subject}' references unknown faculty '{}'",
                    faculty_id.value()
                )
            }
            Self::FacultyNotFound(id) => write!(f, "Faculty '{}' not found", id.value()),
            Self::DuplicateId { entity, id } => {
                write!(f, "Duplicate {entity} identifier '{id}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}

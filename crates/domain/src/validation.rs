// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Faculty, Subject};

/// Validates and normalizes an entity display name.
///
/// Surrounding whitespace is trimmed.
///
/// # Arguments
///
/// * `entity` - The kind of entity being named, used in the error message
/// * `name` - The raw name
///
/// # Returns
///
/// * `Ok(String)` with the trimmed name
/// * `Err(DomainError::InvalidName)` if nothing remains after trimming
///
/// # Errors
///
/// Returns an error if the name is empty or whitespace only.
pub fn validate_entity_name(entity: &str, name: &str) -> Result<String, DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidName(format!(
            "{entity} name cannot be empty"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validates that a subject's faculty reference resolves.
///
/// # Arguments
///
/// * `subject` - The subject to validate
/// * `faculties` - The registered faculty
///
/// # Errors
///
/// Returns `DomainError::InvalidReference` if no faculty carries the
/// subject's `faculty_id`.
pub fn validate_subject_faculty(
    subject: &Subject,
    faculties: &[Faculty],
) -> Result<(), DomainError> {
    if faculties.iter().any(|faculty| faculty.id == subject.faculty_id) {
        return Ok(());
    }
    Err(DomainError::InvalidReference {
        subject: subject.name.clone(),
        faculty_id: subject.faculty_id.clone(),
    })
}

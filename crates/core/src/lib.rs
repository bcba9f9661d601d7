// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod cohorts;
mod command;
mod error;
mod generate;
mod projection;
mod registry;

#[cfg(test)]
mod tests;

use timetable_domain::{DomainError, FacultyId};

// Re-export public types and functions
pub use apply::apply;
pub use cohorts::{Cohort, cohorts_for_subjects};
pub use command::Command;
pub use error::CoreError;
pub use generate::{generate, generate_with_rng};
pub use projection::{project_for_faculty, project_schedule};
pub use registry::{RegisteredEntity, Registry, TransitionResult};

/// Validates that a faculty member exists in the registry.
///
/// This is a read-only validation.
///
/// # Arguments
///
/// * `registry` - The registry to check
/// * `faculty_id` - The faculty identifier to validate
///
/// # Returns
///
/// * `Ok(())` if the faculty exists
/// * `Err(DomainError::FacultyNotFound)` if it does not
///
/// # Errors
///
/// Returns an error if the faculty has not been registered.
pub fn validate_faculty_exists(
    registry: &Registry,
    faculty_id: &FacultyId,
) -> Result<(), DomainError> {
    if registry.faculty(faculty_id).is_none() {
        return Err(DomainError::FacultyNotFound(faculty_id.clone()));
    }
    Ok(())
}

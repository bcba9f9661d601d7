// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for read-only validation functions.

use crate::{Registry, validate_faculty_exists};
use timetable_domain::{DomainError, FacultyId};

use super::helpers::create_two_faculty_registry;

#[test]
fn test_validate_faculty_exists_succeeds() {
    let registry: Registry = create_two_faculty_registry();

    let result: Result<(), DomainError> =
        validate_faculty_exists(&registry, &FacultyId::new("fac_a"));

    assert!(result.is_ok());
}

#[test]
fn test_validate_faculty_exists_fails_for_unknown_id() {
    let registry: Registry = create_two_faculty_registry();

    let result: Result<(), DomainError> =
        validate_faculty_exists(&registry, &FacultyId::new("fac_zz"));

    assert!(matches!(
        result.unwrap_err(),
        DomainError::FacultyNotFound(id) if id.value() == "fac_zz"
    ));
}

#[test]
fn test_validate_faculty_exists_fails_for_empty_registry() {
    let registry: Registry = Registry::new();

    let result: Result<(), DomainError> =
        validate_faculty_exists(&registry, &FacultyId::new("fac_a"));

    assert!(result.is_err());
}

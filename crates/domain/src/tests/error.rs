// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, FacultyId};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidName(String::from("Faculty name cannot be empty"));
    assert_eq!(format!("{err}"), "Invalid name: Faculty name cannot be empty");

    let err: DomainError = DomainError::InvalidReference {
        subject: String::from("Math"),
        faculty_id: FacultyId::new("fac_missing"),
    };
    assert_eq!(
        format!("{err}"),
        "Subject 'Math' references unknown faculty 'fac_missing'"
    );

    let err: DomainError = DomainError::FacultyNotFound(FacultyId::new("fac_1"));
    assert_eq!(format!("{err}"), "Faculty 'fac_1' not found");

    let err: DomainError = DomainError::DuplicateId {
        entity: "room",
        id: String::from("room_1"),
    };
    assert_eq!(format!("{err}"), "Duplicate room identifier 'room_1'");
}

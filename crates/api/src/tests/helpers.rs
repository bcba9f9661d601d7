// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use timetable::Registry;
use timetable_domain::{Faculty, FacultyId, Room, RoomId, Subject, SubjectId};

use crate::{AddFacultyRequest, AddSubjectRequest, LoginRequest};

pub fn faculty(id: &str, name: &str) -> Faculty {
    Faculty::new(FacultyId::new(id), name)
}

pub fn room(id: &str, name: &str) -> Room {
    Room::new(RoomId::new(id), name)
}

pub fn subject(id: &str, name: &str, faculty_id: &str) -> Subject {
    Subject::new(SubjectId::new(id), name, FacultyId::new(faculty_id))
}

/// Two faculty, two rooms, two subjects (Math taught by Ada, Physics by Ben).
pub fn create_test_registry() -> Registry {
    Registry::from_parts(
        vec![faculty("fac_a", "Ada"), faculty("fac_b", "Ben")],
        vec![room("room_1", "R1"), room("room_2", "R2")],
        vec![
            subject("sub_math", "Math", "fac_a"),
            subject("sub_phys", "Physics", "fac_b"),
        ],
    )
    .unwrap()
}

pub fn create_faculty_request(name: &str) -> AddFacultyRequest {
    AddFacultyRequest {
        name: String::from(name),
    }
}

pub fn create_subject_request(name: &str, faculty_id: &str) -> AddSubjectRequest {
    AddSubjectRequest {
        name: String::from(name),
        faculty_id: String::from(faculty_id),
    }
}

pub fn login_request(role: &str, id: Option<&str>) -> LoginRequest {
    LoginRequest {
        role: String::from(role),
        id: id.map(String::from),
    }
}

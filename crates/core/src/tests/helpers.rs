// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Registry;
use rand::SeedableRng;
use rand::rngs::StdRng;
use timetable_domain::{Faculty, FacultyId, Room, RoomId, Subject, SubjectId};

pub fn faculty(id: &str, name: &str) -> Faculty {
    Faculty::new(FacultyId::new(id), name)
}

pub fn room(id: &str, name: &str) -> Room {
    Room::new(RoomId::new(id), name)
}

pub fn subject(id: &str, name: &str, faculty_id: &str) -> Subject {
    Subject::new(SubjectId::new(id), name, FacultyId::new(faculty_id))
}

/// Two faculty, one room, two subjects (Math taught by A, Physics by B).
pub fn create_two_faculty_registry() -> Registry {
    Registry::from_parts(
        vec![faculty("fac_a", "A"), faculty("fac_b", "B")],
        vec![room("room_1", "R1")],
        vec![
            subject("sub_math", "Math", "fac_a"),
            subject("sub_phys", "Physics", "fac_b"),
        ],
    )
    .unwrap()
}

/// A larger registry where several subjects share a faculty member.
pub fn create_shared_faculty_registry() -> Registry {
    Registry::from_parts(
        vec![
            faculty("fac_a", "A"),
            faculty("fac_b", "B"),
            faculty("fac_c", "C"),
        ],
        vec![
            room("room_1", "R1"),
            room("room_2", "R2"),
            room("room_3", "R3"),
        ],
        vec![
            subject("sub_1", "Algebra", "fac_a"),
            subject("sub_2", "Geometry", "fac_a"),
            subject("sub_3", "Mechanics", "fac_b"),
            subject("sub_4", "Optics", "fac_b"),
            subject("sub_5", "Chemistry", "fac_c"),
        ],
    )
    .unwrap()
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

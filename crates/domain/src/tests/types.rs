// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Faculty, FacultyId, Room, RoomId, Subject, SubjectId};

#[test]
fn test_faculty_creation() {
    let faculty: Faculty = Faculty::new(FacultyId::new("fac_a"), "Dr. Rao");
    assert_eq!(faculty.id.value(), "fac_a");
    assert_eq!(faculty.name, "Dr. Rao");
}

#[test]
fn test_room_creation() {
    let room: Room = Room::new(RoomId::new("room_1"), "Room 101");
    assert_eq!(room.id.value(), "room_1");
    assert_eq!(room.name, "Room 101");
}

#[test]
fn test_subject_keeps_faculty_reference() {
    let subject: Subject = Subject::new(SubjectId::new("sub_m"), "Math", FacultyId::new("fac_a"));
    assert_eq!(subject.faculty_id, FacultyId::new("fac_a"));
}

#[test]
fn test_ids_display_as_raw_value() {
    assert_eq!(FacultyId::new("fac_a").to_string(), "fac_a");
    assert_eq!(RoomId::new("room_1").to_string(), "room_1");
    assert_eq!(SubjectId::new("sub_m").to_string(), "sub_m");
}

#[test]
fn test_ids_serialize_transparently() {
    let subject: Subject = Subject::new(SubjectId::new("sub_m"), "Math", FacultyId::new("fac_a"));
    let json: String = serde_json::to_string(&subject).unwrap();
    assert_eq!(json, r#"{"id":"sub_m","name":"Math","faculty_id":"fac_a"}"#);
}

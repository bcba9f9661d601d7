// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};
use timetable_domain::{Faculty, Room, Subject};

/// API request to register a faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddFacultyRequest {
    /// The faculty member's name.
    pub name: String,
}

/// API request to register a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRoomRequest {
    /// The room name (e.g. "Room 101").
    pub name: String,
}

/// API request to register a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSubjectRequest {
    /// The subject name.
    pub name: String,
    /// The faculty member teaching the subject.
    pub faculty_id: String,
}

/// Faculty information for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyInfo {
    /// The faculty identifier.
    pub id: String,
    /// The faculty member's name.
    pub name: String,
}

/// Room information for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    /// The room identifier.
    pub id: String,
    /// The room name.
    pub name: String,
}

/// Subject information for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectInfo {
    /// The subject identifier.
    pub id: String,
    /// The subject name.
    pub name: String,
    /// The faculty member teaching the subject.
    pub faculty_id: String,
    /// The faculty member's name, if the faculty is registered.
    pub faculty_name: Option<String>,
}

/// Student cohort information for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    /// The cohort identifier.
    pub id: String,
    /// The cohort name.
    pub name: String,
    /// The subject the cohort attends.
    pub subject_id: String,
}

/// API response for a successful faculty registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddFacultyResponse {
    /// The registered faculty member.
    pub faculty: FacultyInfo,
    /// A success message.
    pub message: String,
}

/// API response for a successful room registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRoomResponse {
    /// The registered room.
    pub room: RoomInfo,
    /// A success message.
    pub message: String,
}

/// API response for a successful subject registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSubjectResponse {
    /// The registered subject.
    pub subject: SubjectInfo,
    /// A success message.
    pub message: String,
}

/// API response for listing faculty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFacultiesResponse {
    /// The registered faculty.
    pub faculties: Vec<FacultyInfo>,
}

/// API response for listing rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRoomsResponse {
    /// The registered rooms.
    pub rooms: Vec<RoomInfo>,
}

/// API response for listing subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSubjectsResponse {
    /// The registered subjects.
    pub subjects: Vec<SubjectInfo>,
}

/// API response for listing student cohorts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStudentsResponse {
    /// One cohort per subject.
    pub students: Vec<StudentInfo>,
}

/// API request to generate a timetable from explicit entity lists.
///
/// Missing lists default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateTimetableRequest {
    /// Faculty to generate for.
    #[serde(default)]
    pub faculties: Vec<Faculty>,
    /// Rooms to hand out.
    #[serde(default)]
    pub rooms: Vec<Room>,
    /// Subjects to place.
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

/// API request to select a viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The role: "admin", "faculty", or "student".
    pub role: String,
    /// The faculty or cohort identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// API response describing the selected viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The viewer's role.
    pub role: String,
    /// The viewer's identifier, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The viewer's display name.
    pub name: String,
    /// The heading for the viewer's timetable.
    pub title: String,
}

/// One resolved slot of a timetable day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotInfo {
    /// The slot key (e.g. "P1").
    pub key: String,
    /// The slot label (e.g. "Period 1").
    pub label: String,
    /// Start time, `HH:MM`.
    pub start: String,
    /// End time, `HH:MM`.
    pub end: String,
    /// The cell kind: "class", "free", "break", or "lunch".
    pub kind: String,
    /// The assigned subject identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    /// The assigned subject name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// The teaching faculty identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<String>,
    /// The teaching faculty name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty: Option<String>,
    /// The room name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

/// One day of a timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInfo {
    /// The weekday name (e.g. "Monday").
    pub weekday: String,
    /// The slots in template order.
    pub slots: Vec<SlotInfo>,
}

/// API response carrying a timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableResponse {
    /// The heading for this timetable, if viewer-specific.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The number of assigned class slots.
    pub assigned_count: usize,
    /// The number of free class slots.
    pub free_count: usize,
    /// The days in schedule order.
    pub days: Vec<DayInfo>,
}

/// One slot of the day template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSlotInfo {
    /// The slot key.
    pub key: String,
    /// The slot label.
    pub label: String,
    /// Start time, `HH:MM`.
    pub start: String,
    /// End time, `HH:MM`.
    pub end: String,
    /// The slot kind: "class", "break", or "lunch".
    pub kind: String,
}

/// API response describing the weekly template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateResponse {
    /// The teaching days.
    pub weekdays: Vec<String>,
    /// The slots shared by every day.
    pub slots: Vec<TemplateSlotInfo>,
}

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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod request_response;
mod viewer;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, CurrentTimetable, GeneratedTimetable, add_faculty, add_room, add_subject,
    generate_timetable, get_template, get_timetable, list_faculties, list_rooms, list_students,
    list_subjects, login, timetable_for_viewer, timetable_to_response, view_timetable,
};
pub use request_response::{
    AddFacultyRequest, AddFacultyResponse, AddRoomRequest, AddRoomResponse, AddSubjectRequest,
    AddSubjectResponse, DayInfo, FacultyInfo, GenerateTimetableRequest, ListFacultiesResponse,
    ListRoomsResponse, ListStudentsResponse, ListSubjectsResponse, LoginRequest, LoginResponse,
    RoomInfo, SlotInfo, StudentInfo, SubjectInfo, TemplateResponse, TemplateSlotInfo,
    TimetableResponse,
};
pub use viewer::{Role, Viewer, ViewerError, resolve_viewer};

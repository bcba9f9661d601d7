// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use std::str::FromStr;
use timetable::{
    Cohort, Command, RegisteredEntity, Registry, TransitionResult, apply, cohorts_for_subjects,
    generate, project_schedule, validate_faculty_exists,
};
use timetable_domain::{
    Cell, FacultyId, Schedule, ScheduledSlot, Subject, format_time_of_day, weekdays,
    weekly_template,
};
use tracing::{debug, info, warn};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AddFacultyRequest, AddFacultyResponse, AddRoomRequest, AddRoomResponse, AddSubjectRequest,
    AddSubjectResponse, DayInfo, FacultyInfo, GenerateTimetableRequest, ListFacultiesResponse,
    ListRoomsResponse, ListStudentsResponse, ListSubjectsResponse, LoginRequest, LoginResponse,
    RoomInfo, SlotInfo, StudentInfo, SubjectInfo, TemplateResponse, TemplateSlotInfo,
    TimetableResponse,
};
use crate::viewer::{Role, Viewer, resolve_viewer};

/// The result of a registry-changing API operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The new registry after the operation.
    pub new_registry: Registry,
}

/// A generated schedule together with the entities it was generated from.
///
/// Viewer and faculty lookups against a timetable resolve through `source`,
/// which may differ from the stored registry when the timetable was
/// generated from request lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentTimetable {
    /// The full schedule.
    pub schedule: Schedule,
    /// The faculty, rooms, and subjects the schedule was generated from.
    pub source: Registry,
}

/// The result of a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTimetable {
    /// The new timetable, to be stored by the caller.
    pub timetable: CurrentTimetable,
    /// The schedule rendered for the administrator.
    pub response: TimetableResponse,
}

/// Registers a new faculty member.
///
/// # Arguments
///
/// * `registry` - The current registry
/// * `request` - The faculty registration request
///
/// # Errors
///
/// Returns an error if the name is blank.
pub fn add_faculty(
    registry: &Registry,
    request: &AddFacultyRequest,
) -> Result<ApiResult<AddFacultyResponse>, ApiError> {
    let command: Command = Command::AddFaculty {
        name: request.name.clone(),
    };
    let transition: TransitionResult = apply(registry, command).map_err(translate_core_error)?;

    let RegisteredEntity::Faculty(faculty) = transition.created else {
        return Err(unexpected_entity("faculty"));
    };

    info!(faculty_id = %faculty.id, name = %faculty.name, "Registered faculty");

    Ok(ApiResult {
        response: AddFacultyResponse {
            message: format!("Added faculty '{}'", faculty.name),
            faculty: FacultyInfo {
                id: faculty.id.value().to_string(),
                name: faculty.name,
            },
        },
        new_registry: transition.new_registry,
    })
}

/// Registers a new room.
///
/// # Errors
///
/// Returns an error if the name is blank.
pub fn add_room(
    registry: &Registry,
    request: &AddRoomRequest,
) -> Result<ApiResult<AddRoomResponse>, ApiError> {
    let command: Command = Command::AddRoom {
        name: request.name.clone(),
    };
    let transition: TransitionResult = apply(registry, command).map_err(translate_core_error)?;

    let RegisteredEntity::Room(room) = transition.created else {
        return Err(unexpected_entity("room"));
    };

    info!(room_id = %room.id, name = %room.name, "Registered room");

    Ok(ApiResult {
        response: AddRoomResponse {
            message: format!("Added room '{}'", room.name),
            room: RoomInfo {
                id: room.id.value().to_string(),
                name: room.name,
            },
        },
        new_registry: transition.new_registry,
    })
}

/// Registers a new subject taught by an existing faculty member.
///
/// # Errors
///
/// Returns an error if:
/// - The name is blank
/// - The faculty member is not registered
pub fn add_subject(
    registry: &Registry,
    request: &AddSubjectRequest,
) -> Result<ApiResult<AddSubjectResponse>, ApiError> {
    let command: Command = Command::AddSubject {
        name: request.name.clone(),
        faculty_id: FacultyId::new(request.faculty_id.trim()),
    };
    let transition: TransitionResult = apply(registry, command).map_err(|err| {
        warn!(faculty_id = %request.faculty_id, error = %err, "Rejected subject");
        translate_core_error(err)
    })?;

    let RegisteredEntity::Subject(subject) = transition.created else {
        return Err(unexpected_entity("subject"));
    };

    info!(
        subject_id = %subject.id,
        name = %subject.name,
        faculty_id = %subject.faculty_id,
        "Registered subject"
    );

    let info: SubjectInfo = subject_info(&transition.new_registry, &subject);
    Ok(ApiResult {
        response: AddSubjectResponse {
            message: format!("Added subject '{}'", subject.name),
            subject: info,
        },
        new_registry: transition.new_registry,
    })
}

/// Lists all registered faculty.
///
/// This operation never fails.
#[must_use]
pub fn list_faculties(registry: &Registry) -> ListFacultiesResponse {
    ListFacultiesResponse {
        faculties: registry
            .faculties
            .iter()
            .map(|faculty| FacultyInfo {
                id: faculty.id.value().to_string(),
                name: faculty.name.clone(),
            })
            .collect(),
    }
}

/// Lists all registered rooms.
///
/// This operation never fails.
#[must_use]
pub fn list_rooms(registry: &Registry) -> ListRoomsResponse {
    ListRoomsResponse {
        rooms: registry
            .rooms
            .iter()
            .map(|room| RoomInfo {
                id: room.id.value().to_string(),
                name: room.name.clone(),
            })
            .collect(),
    }
}

/// Lists all registered subjects with their faculty names.
///
/// This operation never fails.
#[must_use]
pub fn list_subjects(registry: &Registry) -> ListSubjectsResponse {
    ListSubjectsResponse {
        subjects: registry
            .subjects
            .iter()
            .map(|subject| subject_info(registry, subject))
            .collect(),
    }
}

/// Lists the student cohorts, one per subject.
///
/// This operation never fails.
#[must_use]
pub fn list_students(registry: &Registry) -> ListStudentsResponse {
    let cohorts: Vec<Cohort> = cohorts_for_subjects(&registry.subjects);
    ListStudentsResponse {
        students: cohorts
            .into_iter()
            .map(|cohort| StudentInfo {
                id: cohort.id,
                name: cohort.name,
                subject_id: cohort.subject_id.value().to_string(),
            })
            .collect(),
    }
}

/// Generates a new timetable.
///
/// Without a request the stored registry is used, and it must hold at least
/// one faculty member, room, and subject. Otherwise the entities in the
/// request are validated and used directly, even when the lists are empty.
///
/// # Arguments
///
/// * `registry` - The stored registry
/// * `request` - The generation request, if a body was supplied
///
/// # Errors
///
/// Returns an error if:
/// - The stored registry is used and is missing an entity kind
/// - The request lists contain duplicate identifiers
/// - A requested subject references a faculty member not in the request
pub fn generate_timetable(
    registry: &Registry,
    request: Option<&GenerateTimetableRequest>,
) -> Result<GeneratedTimetable, ApiError> {
    let source: Registry = if let Some(request) = request {
        Registry::from_parts(
            request.faculties.clone(),
            request.rooms.clone(),
            request.subjects.clone(),
        )
        .map_err(translate_domain_error)?
    } else {
        if !registry.is_ready_for_generation() {
            warn!(
                faculties = registry.faculties.len(),
                rooms = registry.rooms.len(),
                subjects = registry.subjects.len(),
                "Generation requested before registry is ready"
            );
            return Err(ApiError::PreconditionFailed {
                message: String::from(
                    "Add at least one faculty, one room, and one subject to enable generation",
                ),
            });
        }
        registry.clone()
    };

    let schedule: Schedule = generate(&source.faculties, &source.rooms, &source.subjects);

    info!(
        faculties = source.faculties.len(),
        rooms = source.rooms.len(),
        subjects = source.subjects.len(),
        assigned = schedule.assigned_count(),
        free = schedule.free_count(),
        "Generated timetable"
    );

    let response: TimetableResponse = timetable_to_response(&schedule, Some(Viewer::Admin.title()));
    Ok(GeneratedTimetable {
        timetable: CurrentTimetable { schedule, source },
        response,
    })
}

/// Returns the full current timetable.
///
/// # Errors
///
/// Returns `ApiError::NotGenerated` if no timetable exists yet.
pub fn get_timetable(current: Option<&CurrentTimetable>) -> Result<TimetableResponse, ApiError> {
    let current: &CurrentTimetable = current.ok_or(ApiError::NotGenerated)?;
    Ok(timetable_to_response(&current.schedule, None))
}

/// Returns the current timetable, projected onto one faculty member if given.
///
/// # Arguments
///
/// * `current` - The current timetable, if generated
/// * `faculty_id` - The faculty member to project onto
///
/// # Errors
///
/// Returns an error if:
/// - No timetable exists yet
/// - The faculty member is not part of the timetable's source entities
pub fn view_timetable(
    current: Option<&CurrentTimetable>,
    faculty_id: Option<&str>,
) -> Result<TimetableResponse, ApiError> {
    let current: &CurrentTimetable = current.ok_or(ApiError::NotGenerated)?;
    let Some(faculty_id) = faculty_id else {
        return Ok(timetable_to_response(&current.schedule, None));
    };

    let faculty_id: FacultyId = FacultyId::new(faculty_id);
    validate_faculty_exists(&current.source, &faculty_id).map_err(translate_domain_error)?;

    let projected: Schedule = project_schedule(&current.schedule, &faculty_id);

    debug!(
        faculty_id = %faculty_id,
        classes = projected.assigned_count(),
        "Projected timetable for faculty"
    );

    Ok(timetable_to_response(&projected, None))
}

/// Selects a viewer.
///
/// # Errors
///
/// Returns an error if the role is unknown or the viewer cannot be resolved.
pub fn login(registry: &Registry, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let viewer: Viewer = resolve_request_viewer(registry, request)?;

    info!(role = %viewer.role(), name = %viewer.name(), "Viewer selected");

    Ok(LoginResponse {
        role: viewer.role().as_str().to_string(),
        id: viewer.id().map(str::to_string),
        name: viewer.name().to_string(),
        title: viewer.title().to_string(),
    })
}

/// Returns the timetable as seen by a viewer.
///
/// Administrators and students see the full timetable; faculty see only
/// their own classes. The viewer is resolved against the entities the
/// timetable was generated from.
///
/// # Errors
///
/// Returns an error if:
/// - No timetable exists yet
/// - The viewer cannot be resolved
pub fn timetable_for_viewer(
    current: Option<&CurrentTimetable>,
    request: &LoginRequest,
) -> Result<TimetableResponse, ApiError> {
    let current: &CurrentTimetable = current.ok_or(ApiError::NotGenerated)?;
    let viewer: Viewer = resolve_request_viewer(&current.source, request)?;

    let visible: Schedule = viewer.visible_schedule(&current.schedule);
    Ok(timetable_to_response(&visible, Some(viewer.title())))
}

/// Describes the weekly template.
#[must_use]
pub fn get_template() -> TemplateResponse {
    TemplateResponse {
        weekdays: weekdays().iter().map(ToString::to_string).collect(),
        slots: weekly_template()
            .iter()
            .map(|slot| TemplateSlotInfo {
                key: slot.key.to_string(),
                label: slot.label.to_string(),
                start: format_time_of_day(slot.start),
                end: format_time_of_day(slot.end),
                kind: slot.kind.as_str().to_string(),
            })
            .collect(),
    }
}

/// Converts a schedule into its API representation.
#[must_use]
pub fn timetable_to_response(schedule: &Schedule, title: Option<&str>) -> TimetableResponse {
    TimetableResponse {
        title: title.map(str::to_string),
        assigned_count: schedule.assigned_count(),
        free_count: schedule.free_count(),
        days: schedule
            .days
            .iter()
            .map(|day| DayInfo {
                weekday: day.weekday.to_string(),
                slots: day.slots.iter().map(slot_info).collect(),
            })
            .collect(),
    }
}

fn slot_info(scheduled: &ScheduledSlot) -> SlotInfo {
    let mut info: SlotInfo = SlotInfo {
        key: scheduled.slot.key.to_string(),
        label: scheduled.slot.label.to_string(),
        start: format_time_of_day(scheduled.slot.start),
        end: format_time_of_day(scheduled.slot.end),
        kind: scheduled.cell.kind().as_str().to_string(),
        subject_id: None,
        subject: None,
        faculty_id: None,
        faculty: None,
        room: None,
    };
    if let Cell::Assigned(assignment) = &scheduled.cell {
        info.subject_id = Some(assignment.subject_id.value().to_string());
        info.subject = Some(assignment.subject_name.clone());
        info.faculty_id = Some(assignment.faculty_id.value().to_string());
        info.faculty.clone_from(&assignment.faculty_name);
        info.room.clone_from(&assignment.room_name);
    }
    info
}

fn subject_info(registry: &Registry, subject: &Subject) -> SubjectInfo {
    SubjectInfo {
        id: subject.id.value().to_string(),
        name: subject.name.clone(),
        faculty_id: subject.faculty_id.value().to_string(),
        faculty_name: registry
            .faculty(&subject.faculty_id)
            .map(|faculty| faculty.name.clone()),
    }
}

fn resolve_request_viewer(registry: &Registry, request: &LoginRequest) -> Result<Viewer, ApiError> {
    let role: Role = Role::from_str(&request.role)?;
    let viewer: Viewer = resolve_viewer(registry, role, request.id.as_deref())?;
    Ok(viewer)
}

fn unexpected_entity(expected: &str) -> ApiError {
    ApiError::Internal {
        message: format!("Registry command did not create a {expected}"),
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Generation, viewing, and template handler tests.

use timetable::Registry;
use timetable_domain::FacultyId;

use crate::{
    ApiError, CurrentTimetable, GenerateTimetableRequest, GeneratedTimetable, SlotInfo,
    TemplateResponse, TimetableResponse, generate_timetable, get_template, get_timetable,
    timetable_for_viewer, view_timetable,
};

use super::helpers::{create_test_registry, faculty, login_request, room, subject};

fn generate_from_registry(registry: &Registry) -> CurrentTimetable {
    generate_timetable(registry, None).unwrap().timetable
}

fn single_faculty_request() -> GenerateTimetableRequest {
    GenerateTimetableRequest {
        faculties: vec![faculty("fac_x", "Xia")],
        rooms: vec![room("room_x", "Lab")],
        subjects: vec![subject("sub_x", "Biology", "fac_x")],
    }
}

fn class_slots(response: &TimetableResponse) -> Vec<&SlotInfo> {
    response
        .days
        .iter()
        .flat_map(|day| day.slots.iter())
        .filter(|slot| slot.kind == "class" || slot.kind == "free")
        .collect()
}

// ============================================================================
// Generation
// ============================================================================

#[test]
fn test_generate_from_registry() {
    let registry: Registry = create_test_registry();
    let generated: GeneratedTimetable = generate_timetable(&registry, None).unwrap();

    assert_eq!(generated.response.title.as_deref(), Some("Master Timetable"));
    assert_eq!(generated.response.days.len(), 6);
    assert_eq!(generated.response.assigned_count, 42);
    assert_eq!(generated.response.free_count, 0);
    assert_eq!(generated.timetable.schedule.assigned_count(), 42);
    assert_eq!(generated.timetable.source, registry);
}

#[test]
fn test_generate_requires_ready_registry() {
    let registry: Registry = Registry::from_parts(
        vec![faculty("fac_a", "Ada")],
        Vec::new(),
        vec![subject("sub_math", "Math", "fac_a")],
    )
    .unwrap();

    let result: Result<GeneratedTimetable, ApiError> = generate_timetable(&registry, None);
    assert!(matches!(result, Err(ApiError::PreconditionFailed { .. })));
}

#[test]
fn test_generate_with_explicit_empty_lists_yields_all_free() {
    let request: GenerateTimetableRequest = GenerateTimetableRequest::default();
    let generated: GeneratedTimetable =
        generate_timetable(&Registry::new(), Some(&request)).unwrap();

    assert_eq!(generated.response.assigned_count, 0);
    assert_eq!(generated.response.free_count, 42);
    assert_eq!(generated.timetable.source, Registry::new());
}

#[test]
fn test_generate_from_explicit_lists_ignores_registry() {
    let generated: GeneratedTimetable =
        generate_timetable(&create_test_registry(), Some(&single_faculty_request())).unwrap();

    for slot in class_slots(&generated.response) {
        assert_eq!(slot.subject.as_deref(), Some("Biology"));
        assert_eq!(slot.faculty.as_deref(), Some("Xia"));
        assert_eq!(slot.room.as_deref(), Some("Lab"));
    }
}

#[test]
fn test_generate_with_explicit_lists_allows_missing_rooms() {
    let request: GenerateTimetableRequest = GenerateTimetableRequest {
        faculties: vec![faculty("fac_x", "Xia")],
        rooms: Vec::new(),
        subjects: vec![subject("sub_x", "Biology", "fac_x")],
    };
    let generated: GeneratedTimetable =
        generate_timetable(&Registry::new(), Some(&request)).unwrap();

    assert_eq!(generated.response.assigned_count, 42);
    assert!(
        class_slots(&generated.response)
            .iter()
            .all(|slot| slot.room.is_none())
    );
}

#[test]
fn test_generate_rejects_dangling_subject_reference() {
    let request: GenerateTimetableRequest = GenerateTimetableRequest {
        faculties: vec![faculty("fac_x", "Xia")],
        rooms: vec![room("room_x", "Lab")],
        subjects: vec![subject("sub_x", "Biology", "fac_missing")],
    };
    let result: Result<GeneratedTimetable, ApiError> =
        generate_timetable(&create_test_registry(), Some(&request));

    assert!(matches!(
        result.unwrap_err(),
        ApiError::DomainRuleViolation { rule, .. } if rule == "subject_faculty_reference"
    ));
}

#[test]
fn test_generate_rejects_duplicate_ids() {
    let request: GenerateTimetableRequest = GenerateTimetableRequest {
        faculties: vec![faculty("fac_x", "Xia")],
        rooms: vec![room("room_x", "Lab"), room("room_x", "Annex")],
        subjects: vec![subject("sub_x", "Biology", "fac_x")],
    };
    let result: Result<GeneratedTimetable, ApiError> =
        generate_timetable(&Registry::new(), Some(&request));

    assert!(matches!(
        result.unwrap_err(),
        ApiError::DomainRuleViolation { rule, .. } if rule == "unique_room_id"
    ));
}

// ============================================================================
// Reading
// ============================================================================

#[test]
fn test_get_timetable_before_generation() {
    assert_eq!(get_timetable(None).unwrap_err(), ApiError::NotGenerated);
}

#[test]
fn test_get_timetable_renders_template_times() {
    let current: CurrentTimetable = generate_from_registry(&create_test_registry());
    let response: TimetableResponse = get_timetable(Some(&current)).unwrap();

    assert_eq!(response.title, None);
    let monday = &response.days[0];
    assert_eq!(monday.weekday, "Monday");
    assert_eq!(monday.slots.len(), 10);
    assert_eq!(monday.slots[0].key, "P1");
    assert_eq!(monday.slots[0].start, "09:15");
    assert_eq!(monday.slots[2].kind, "break");
    assert_eq!(monday.slots[5].kind, "lunch");
    assert_eq!(monday.slots[9].end, "15:50");
    assert!(monday.slots[2].subject.is_none());
}

#[test]
fn test_view_timetable_without_faculty_returns_full() {
    let current: CurrentTimetable = generate_from_registry(&create_test_registry());
    let response: TimetableResponse = view_timetable(Some(&current), None).unwrap();
    assert_eq!(response.assigned_count, 42);
}

#[test]
fn test_view_timetable_projects_onto_faculty() {
    let current: CurrentTimetable = generate_from_registry(&create_test_registry());
    let ada_classes: usize = current
        .schedule
        .cells_for_faculty(&FacultyId::new("fac_a"))
        .len();

    let response: TimetableResponse = view_timetable(Some(&current), Some("fac_a")).unwrap();

    assert_eq!(response.assigned_count, ada_classes);
    assert_eq!(response.free_count, 42 - ada_classes);
    for slot in class_slots(&response) {
        if slot.kind == "class" {
            assert_eq!(slot.faculty_id.as_deref(), Some("fac_a"));
        } else {
            assert!(slot.faculty_id.is_none());
        }
    }
}

#[test]
fn test_view_timetable_unknown_faculty() {
    let current: CurrentTimetable = generate_from_registry(&create_test_registry());
    let result: Result<TimetableResponse, ApiError> =
        view_timetable(Some(&current), Some("fac_missing"));
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_view_timetable_resolves_faculty_from_request_lists() {
    let registry: Registry = create_test_registry();
    let generated: GeneratedTimetable =
        generate_timetable(&registry, Some(&single_faculty_request())).unwrap();

    let response: TimetableResponse =
        view_timetable(Some(&generated.timetable), Some("fac_x")).unwrap();
    assert_eq!(response.assigned_count, 42);
    assert_eq!(response.free_count, 0);

    let result: Result<TimetableResponse, ApiError> =
        view_timetable(Some(&generated.timetable), Some("fac_a"));
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_view_timetable_before_generation() {
    let result: Result<TimetableResponse, ApiError> = view_timetable(None, Some("fac_a"));
    assert_eq!(result.unwrap_err(), ApiError::NotGenerated);
}

// ============================================================================
// Viewer timetables
// ============================================================================

#[test]
fn test_timetable_for_student_is_full() {
    let current: CurrentTimetable = generate_from_registry(&create_test_registry());
    let response: TimetableResponse =
        timetable_for_viewer(Some(&current), &login_request("student", Some("stu_sub_phys")))
            .unwrap();

    assert_eq!(response.title.as_deref(), Some("Class Timetable"));
    assert_eq!(response.assigned_count, 42);
}

#[test]
fn test_timetable_for_faculty_is_projected() {
    let current: CurrentTimetable = generate_from_registry(&create_test_registry());
    let response: TimetableResponse =
        timetable_for_viewer(Some(&current), &login_request("faculty", Some("fac_b"))).unwrap();

    assert_eq!(response.title.as_deref(), Some("My Teaching Timetable"));
    assert!(
        class_slots(&response)
            .iter()
            .filter(|slot| slot.kind == "class")
            .all(|slot| slot.faculty.as_deref() == Some("Ben"))
    );
}

#[test]
fn test_timetable_for_viewer_before_generation() {
    let result: Result<TimetableResponse, ApiError> =
        timetable_for_viewer(None, &login_request("admin", None));
    assert_eq!(result.unwrap_err(), ApiError::NotGenerated);
}

#[test]
fn test_timetable_for_faculty_from_request_lists() {
    let generated: GeneratedTimetable =
        generate_timetable(&Registry::new(), Some(&single_faculty_request())).unwrap();

    let response: TimetableResponse = timetable_for_viewer(
        Some(&generated.timetable),
        &login_request("faculty", Some("fac_x")),
    )
    .unwrap();
    assert_eq!(response.title.as_deref(), Some("My Teaching Timetable"));
    assert_eq!(response.assigned_count, 42);
}

// ============================================================================
// Template
// ============================================================================

#[test]
fn test_get_template() {
    let response: TemplateResponse = get_template();
    assert_eq!(
        response.weekdays,
        vec![
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday"
        ]
    );
    let keys: Vec<&str> = response.slots.iter().map(|slot| slot.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["P1", "P2", "B1", "P3", "P4", "L", "P5", "B2", "P6", "P7"]
    );
    assert_eq!(response.slots[5].kind, "lunch");
    assert_eq!(response.slots[5].label, "Lunch");
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use timetable_domain::{DaySchedule, FacultyId, Schedule, ScheduledSlot};

/// Produces the schedule as seen by a single faculty member.
///
/// Assignments taught by anyone else are replaced with free cells; breaks,
/// lunch, free cells, and the faculty member's own classes are copied
/// unchanged. A schedule that has not been generated yet (`None`) is
/// returned as `None`.
///
/// The input is never modified. Projecting an already projected schedule
/// for the same faculty member yields the same schedule.
#[must_use]
pub fn project_for_faculty(
    schedule: Option<&Schedule>,
    faculty_id: &FacultyId,
) -> Option<Schedule> {
    schedule.map(|schedule| project_schedule(schedule, faculty_id))
}

/// Produces the view of a generated schedule for a single faculty member.
///
/// The non-optional form of [`project_for_faculty`].
#[must_use]
pub fn project_schedule(schedule: &Schedule, faculty_id: &FacultyId) -> Schedule {
    let days: Vec<DaySchedule> = schedule
        .days
        .iter()
        .map(|day| DaySchedule {
            weekday: day.weekday,
            slots: day
                .slots
                .iter()
                .map(|scheduled| ScheduledSlot {
                    slot: scheduled.slot,
                    cell: scheduled.cell.redacted_for(faculty_id),
                })
                .collect(),
        })
        .collect();
    Schedule::new(days)
}

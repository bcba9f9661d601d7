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
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod schedule;
mod template;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use schedule::{Assignment, Cell, CellKind, DaySchedule, Schedule, ScheduledSlot};
pub use template::{DaySlot, SlotKind, WEEKDAYS, format_time_of_day, weekdays, weekly_template};
pub use types::{Faculty, FacultyId, Room, RoomId, Subject, SubjectId};
pub use validation::{validate_entity_name, validate_subject_faculty};

/// Re-exported so callers name weekdays through this crate.
pub use time::Weekday;

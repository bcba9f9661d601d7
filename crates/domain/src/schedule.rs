// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::template::{DaySlot, SlotKind};
use crate::types::{FacultyId, SubjectId};
use serde::{Deserialize, Serialize};
use time::Weekday;

/// A subject placed into a class slot.
///
/// The faculty reference is copied from the subject at assignment time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The assigned subject.
    pub subject_id: SubjectId,
    /// The subject's display name.
    pub subject_name: String,
    /// The faculty member teaching the subject.
    pub faculty_id: FacultyId,
    /// The faculty member's display name, if the faculty was supplied.
    pub faculty_name: Option<String>,
    /// The room name, or `None` when no rooms were available.
    pub room_name: Option<String>,
}

/// The resolved outcome for one `(weekday, slot)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Cell {
    /// A class slot with a subject, faculty, and room.
    #[serde(rename = "class")]
    Assigned(Assignment),
    /// A class slot with nothing scheduled.
    Free,
    /// A short break, echoed from the template.
    Break,
    /// Lunch, echoed from the template.
    Lunch,
}

/// The kind of a resolved cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// An assigned class.
    Class,
    /// A free class slot.
    Free,
    /// A short break.
    Break,
    /// Lunch.
    Lunch,
}

impl CellKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Free => "free",
            Self::Break => "break",
            Self::Lunch => "lunch",
        }
    }
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Cell {
    /// Returns the template echo for a non-class slot kind.
    ///
    /// Returns `None` for class slots, which must be resolved by generation.
    #[must_use]
    pub const fn for_pause(kind: SlotKind) -> Option<Self> {
        match kind {
            SlotKind::Class => None,
            SlotKind::Break => Some(Self::Break),
            SlotKind::Lunch => Some(Self::Lunch),
        }
    }

    /// Returns the kind of this cell.
    #[must_use]
    pub const fn kind(&self) -> CellKind {
        match self {
            Self::Assigned(_) => CellKind::Class,
            Self::Free => CellKind::Free,
            Self::Break => CellKind::Break,
            Self::Lunch => CellKind::Lunch,
        }
    }

    /// Returns the assignment if this cell holds one.
    #[must_use]
    pub const fn assignment(&self) -> Option<&Assignment> {
        match self {
            Self::Assigned(assignment) => Some(assignment),
            _ => None,
        }
    }

    /// Returns whether this is a free class slot.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }

    /// Returns the cell as seen by a single faculty member.
    ///
    /// Assignments belonging to other faculty become `Free`; everything else
    /// is copied unchanged.
    #[must_use]
    pub fn redacted_for(&self, faculty_id: &FacultyId) -> Self {
        match self {
            Self::Assigned(assignment) if &assignment.faculty_id != faculty_id => Self::Free,
            other => other.clone(),
        }
    }
}

/// A template slot paired with its resolved cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledSlot {
    /// The template slot metadata.
    pub slot: DaySlot,
    /// The resolved cell.
    pub cell: Cell,
}

/// All resolved slots for one weekday, in template order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    /// The weekday.
    pub weekday: Weekday,
    /// The slots in template order.
    pub slots: Vec<ScheduledSlot>,
}

impl DaySchedule {
    /// Returns the cell for a slot key.
    #[must_use]
    pub fn cell(&self, key: &str) -> Option<&Cell> {
        self.slots
            .iter()
            .find(|scheduled| scheduled.slot.key == key)
            .map(|scheduled| &scheduled.cell)
    }
}

/// The complete weekly grid of cells.
///
/// A schedule is a snapshot: regenerating produces a new value rather than
/// mutating an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// The days in schedule order.
    pub days: Vec<DaySchedule>,
}

impl Schedule {
    /// Creates a schedule from its days.
    #[must_use]
    pub const fn new(days: Vec<DaySchedule>) -> Self {
        Self { days }
    }

    /// Returns the resolved slots for a weekday.
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.days.iter().find(|day| day.weekday == weekday)
    }

    /// Returns the cell at `(weekday, key)`.
    #[must_use]
    pub fn cell(&self, weekday: Weekday, key: &str) -> Option<&Cell> {
        self.day(weekday).and_then(|day| day.cell(key))
    }

    /// Iterates every `(weekday, slot)` pair in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &ScheduledSlot)> {
        self.days
            .iter()
            .flat_map(|day| day.slots.iter().map(move |slot| (day.weekday, slot)))
    }

    /// Returns the number of assigned class cells.
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.iter()
            .filter(|(_, scheduled)| scheduled.cell.assignment().is_some())
            .count()
    }

    /// Returns the number of free class cells.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.iter()
            .filter(|(_, scheduled)| scheduled.cell.is_free())
            .count()
    }

    /// Returns every assignment taught by a faculty member, with its position.
    #[must_use]
    pub fn cells_for_faculty(
        &self,
        faculty_id: &FacultyId,
    ) -> Vec<(Weekday, &'static str, &Assignment)> {
        self.iter()
            .filter_map(|(weekday, scheduled)| {
                scheduled
                    .cell
                    .assignment()
                    .filter(|assignment| &assignment.faculty_id == faculty_id)
                    .map(|assignment| (weekday, scheduled.slot.key, assignment))
            })
            .collect()
    }
}

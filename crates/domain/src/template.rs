// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed weekly slot template.
//!
//! Every teaching day shares the same ten slots: seven class periods, two
//! short breaks, and a lunch, running from 09:15 to 15:50.

use serde::{Deserialize, Serialize};
use time::macros::time;
use time::{Time, Weekday};

/// The kind of a slot in the day template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// A teaching period.
    Class,
    /// A short break between periods.
    Break,
    /// The lunch break.
    Lunch,
}

impl SlotKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Break => "break",
            Self::Lunch => "lunch",
        }
    }
}

impl std::fmt::Display for SlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One fixed time interval in the daily template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySlot {
    /// The slot key, unique within a day (e.g. "P1", "B1", "L").
    pub key: &'static str,
    /// The human-readable label.
    pub label: &'static str,
    /// Start of the interval.
    pub start: Time,
    /// End of the interval.
    pub end: Time,
    /// Whether this is a class period, a break, or lunch.
    pub kind: SlotKind,
}

impl DaySlot {
    const fn new(
        key: &'static str,
        label: &'static str,
        start: Time,
        end: Time,
        kind: SlotKind,
    ) -> Self {
        Self {
            key,
            label,
            start,
            end,
            kind,
        }
    }

    /// Returns whether subjects can be assigned to this slot.
    #[must_use]
    pub const fn is_class(&self) -> bool {
        matches!(self.kind, SlotKind::Class)
    }
}

static WEEKLY_TEMPLATE: [DaySlot; 10] = [
    DaySlot::new("P1", "Period 1", time!(9:15), time!(10:00), SlotKind::Class),
    DaySlot::new("P2", "Period 2", time!(10:00), time!(10:45), SlotKind::Class),
    DaySlot::new("B1", "Short Break", time!(10:45), time!(10:55), SlotKind::Break),
    DaySlot::new("P3", "Period 3", time!(10:55), time!(11:40), SlotKind::Class),
    DaySlot::new("P4", "Period 4", time!(11:40), time!(12:25), SlotKind::Class),
    DaySlot::new("L", "Lunch", time!(12:25), time!(13:05), SlotKind::Lunch),
    DaySlot::new("P5", "Period 5", time!(13:05), time!(13:50), SlotKind::Class),
    DaySlot::new("B2", "Short Break", time!(13:50), time!(14:00), SlotKind::Break),
    DaySlot::new("P6", "Period 6", time!(14:00), time!(14:45), SlotKind::Class),
    DaySlot::new("P7", "Period 7", time!(14:45), time!(15:50), SlotKind::Class),
];

/// The teaching days, Monday through Saturday, in schedule order.
pub const WEEKDAYS: [Weekday; 6] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

/// Returns the day template shared by every weekday.
///
/// The same ordered slice is returned on every call.
#[must_use]
pub fn weekly_template() -> &'static [DaySlot] {
    &WEEKLY_TEMPLATE
}

/// Returns the teaching days in schedule order.
#[must_use]
pub fn weekdays() -> &'static [Weekday] {
    &WEEKDAYS
}

/// Formats a time of day as `HH:MM`.
#[must_use]
pub fn format_time_of_day(value: Time) -> String {
    format!("{:02}:{:02}", value.hour(), value.minute())
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The assignment engine.
//!
//! Generation is a single greedy pass over the week. Subjects and rooms are
//! shuffled once, then handed out round-robin; a class slot skips ahead past
//! subjects whose faculty member is already teaching at that `(day, slot)`.
//! The only guarantee is that no faculty member is booked twice in the same
//! slot of the same day. Room reuse, subject balance, and faculty load are
//! not considered.

use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::{HashMap, HashSet};
use timetable_domain::{
    Assignment, Cell, DaySchedule, Faculty, FacultyId, Room, Schedule, ScheduledSlot, Subject,
    WEEKDAYS, Weekday, weekly_template,
};

/// Generates a weekly schedule using the thread-local random generator.
///
/// See [`generate_with_rng`] for the algorithm.
#[must_use]
pub fn generate(faculties: &[Faculty], rooms: &[Room], subjects: &[Subject]) -> Schedule {
    generate_with_rng(&mut rand::rng(), faculties, rooms, subjects)
}

/// Generates a weekly schedule from the given entities.
///
/// Every `(weekday, slot)` pair of the template is resolved. Break and lunch
/// slots are echoed; class slots receive either an assignment or `Free`.
///
/// Generation never fails. With no subjects every class slot is free; with
/// no rooms assignments carry no room name. The inputs are not modified and
/// all bookkeeping is local to the call.
///
/// # Arguments
///
/// * `rng` - Source of randomness for the subject and room orderings
/// * `faculties` - Registered faculty, used to resolve display names
/// * `rooms` - Rooms to hand out round-robin
/// * `subjects` - Subjects to place; each carries its faculty reference
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    faculties: &[Faculty],
    rooms: &[Room],
    subjects: &[Subject],
) -> Schedule {
    let mut subject_order: Vec<&Subject> = subjects.iter().collect();
    subject_order.shuffle(rng);
    let mut room_order: Vec<&Room> = rooms.iter().collect();
    room_order.shuffle(rng);

    let mut engine: Engine<'_> = Engine {
        subjects: subject_order,
        rooms: room_order,
        faculty_names: faculties
            .iter()
            .map(|faculty| (&faculty.id, faculty.name.as_str()))
            .collect(),
        occupied: HashSet::new(),
        subject_cursor: 0,
        room_cursor: 0,
    };

    let mut days: Vec<DaySchedule> = Vec::with_capacity(WEEKDAYS.len());
    for weekday in WEEKDAYS {
        let mut slots: Vec<ScheduledSlot> = Vec::with_capacity(weekly_template().len());
        for slot in weekly_template() {
            let cell: Cell = match Cell::for_pause(slot.kind) {
                Some(pause) => pause,
                None => engine.resolve_class_slot(weekday, slot.key),
            };
            slots.push(ScheduledSlot { slot: *slot, cell });
        }
        days.push(DaySchedule { weekday, slots });
    }

    Schedule::new(days)
}

/// Per-run generation state.
struct Engine<'a> {
    subjects: Vec<&'a Subject>,
    rooms: Vec<&'a Room>,
    faculty_names: HashMap<&'a FacultyId, &'a str>,
    /// Committed `(day, slot key, faculty)` triples.
    occupied: HashSet<(Weekday, &'static str, &'a FacultyId)>,
    subject_cursor: usize,
    room_cursor: usize,
}

impl<'a> Engine<'a> {
    fn resolve_class_slot(&mut self, weekday: Weekday, key: &'static str) -> Cell {
        let count: usize = self.subjects.len();
        let candidate: Option<(usize, &'a Subject)> = (0..count)
            .map(|offset| (offset, self.subjects[(self.subject_cursor + offset) % count]))
            .find(|(_, subject)| {
                !self
                    .occupied
                    .contains(&(weekday, key, &subject.faculty_id))
            });

        // The room cursor moves for every class slot, assigned or not.
        let room: Option<&'a Room> = self.next_room();

        let Some((offset, subject)) = candidate else {
            return Cell::Free;
        };

        self.occupied.insert((weekday, key, &subject.faculty_id));
        self.subject_cursor = (self.subject_cursor + offset + 1) % count;

        Cell::Assigned(Assignment {
            subject_id: subject.id.clone(),
            subject_name: subject.name.clone(),
            faculty_id: subject.faculty_id.clone(),
            faculty_name: self
                .faculty_names
                .get(&subject.faculty_id)
                .map(|name| (*name).to_string()),
            room_name: room.map(|room| room.name.clone()),
        })
    }

    fn next_room(&mut self) -> Option<&'a Room> {
        let room: Option<&'a Room> = self
            .room_cursor
            .checked_rem(self.rooms.len())
            .and_then(|index| self.rooms.get(index).copied());
        self.room_cursor += 1;
        room
    }
}

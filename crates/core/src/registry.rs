// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashSet;
use timetable_domain::{
    DomainError, Faculty, FacultyId, Room, RoomId, Subject, SubjectId, validate_subject_faculty,
};

/// The faculty, rooms, and subjects known to the administrator.
///
/// The registry is owned by the caller and handed to the assignment engine
/// by reference; generation never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registry {
    /// Registered faculty, in creation order.
    pub faculties: Vec<Faculty>,
    /// Registered rooms, in creation order.
    pub rooms: Vec<Room>,
    /// Registered subjects, in creation order.
    pub subjects: Vec<Subject>,
}

impl Registry {
    /// Creates a new empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            faculties: Vec::new(),
            rooms: Vec::new(),
            subjects: Vec::new(),
        }
    }

    /// Builds a registry from caller-supplied entity lists.
    ///
    /// # Arguments
    ///
    /// * `faculties` - The faculty list
    /// * `rooms` - The room list
    /// * `subjects` - The subject list
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two entities of the same kind share an identifier
    /// - A subject references a faculty member not in `faculties`
    pub fn from_parts(
        faculties: Vec<Faculty>,
        rooms: Vec<Room>,
        subjects: Vec<Subject>,
    ) -> Result<Self, DomainError> {
        ensure_unique("faculty", faculties.iter().map(|f| f.id.value()))?;
        ensure_unique("room", rooms.iter().map(|r| r.id.value()))?;
        ensure_unique("subject", subjects.iter().map(|s| s.id.value()))?;

        for subject in &subjects {
            validate_subject_faculty(subject, &faculties)?;
        }

        Ok(Self {
            faculties,
            rooms,
            subjects,
        })
    }

    /// Looks up a faculty member by identifier.
    #[must_use]
    pub fn faculty(&self, id: &FacultyId) -> Option<&Faculty> {
        self.faculties.iter().find(|faculty| &faculty.id == id)
    }

    /// Looks up a room by identifier.
    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| &room.id == id)
    }

    /// Looks up a subject by identifier.
    #[must_use]
    pub fn subject(&self, id: &SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|subject| &subject.id == id)
    }

    /// Returns whether at least one faculty member, room, and subject exist.
    ///
    /// Generation on a registry that is not ready still succeeds, but every
    /// class slot comes out free or roomless.
    #[must_use]
    pub fn is_ready_for_generation(&self) -> bool {
        !self.faculties.is_empty() && !self.rooms.is_empty() && !self.subjects.is_empty()
    }

    /// Returns whether any entity of any kind already uses `id`.
    pub(crate) fn id_in_use(&self, id: &str) -> bool {
        self.faculties.iter().any(|f| f.id.value() == id)
            || self.rooms.iter().any(|r| r.id.value() == id)
            || self.subjects.iter().any(|s| s.id.value() == id)
    }

    /// Adds a faculty member.
    pub(crate) fn add_faculty(&mut self, faculty: Faculty) {
        self.faculties.push(faculty);
    }

    /// Adds a room.
    pub(crate) fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Adds a subject.
    pub(crate) fn add_subject(&mut self, subject: Subject) {
        self.subjects.push(subject);
    }
}

fn ensure_unique<'a>(
    entity: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DomainError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DomainError::DuplicateId {
                entity,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// The entity created by a registry command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisteredEntity {
    /// A newly registered faculty member.
    Faculty(Faculty),
    /// A newly registered room.
    Room(Room),
    /// A newly registered subject.
    Subject(Subject),
}

/// The result of a successful registry change.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new registry after the transition.
    pub new_registry: Registry,
    /// The entity that was created.
    pub created: RegisteredEntity,
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::registry::{RegisteredEntity, Registry, TransitionResult};
use timetable_domain::{
    DomainError, Faculty, FacultyId, Room, RoomId, Subject, SubjectId, validate_entity_name,
};

/// Applies a command to the registry, producing a new registry.
///
/// This function is pure apart from identifier generation: the input
/// registry is never modified.
///
/// # Arguments
///
/// * `registry` - The current registry (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new registry and the created entity
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The entity name is blank
/// - A subject references a faculty member that is not registered
pub fn apply(registry: &Registry, command: Command) -> Result<TransitionResult, CoreError> {
    let mut new_registry: Registry = registry.clone();

    let created: RegisteredEntity = match command {
        Command::AddFaculty { name } => {
            let name: String = validate_entity_name("Faculty", &name)?;
            let id: FacultyId = FacultyId::new(fresh_id("fac", registry));
            let faculty: Faculty = Faculty::new(id, name);
            new_registry.add_faculty(faculty.clone());
            RegisteredEntity::Faculty(faculty)
        }
        Command::AddRoom { name } => {
            let name: String = validate_entity_name("Room", &name)?;
            let id: RoomId = RoomId::new(fresh_id("room", registry));
            let room: Room = Room::new(id, name);
            new_registry.add_room(room.clone());
            RegisteredEntity::Room(room)
        }
        Command::AddSubject { name, faculty_id } => {
            let name: String = validate_entity_name("Subject", &name)?;

            // Rule: the subject's faculty must already be registered
            if registry.faculty(&faculty_id).is_none() {
                return Err(CoreError::DomainViolation(DomainError::InvalidReference {
                    subject: name,
                    faculty_id,
                }));
            }

            let id: SubjectId = SubjectId::new(fresh_id("sub", registry));
            let subject: Subject = Subject::new(id, name, faculty_id);
            new_registry.add_subject(subject.clone());
            RegisteredEntity::Subject(subject)
        }
    };

    Ok(TransitionResult {
        new_registry,
        created,
    })
}

/// Generates an identifier of the form `<prefix>_<7 hex digits>` that is
/// not yet used in the registry.
fn fresh_id(prefix: &str, registry: &Registry) -> String {
    loop {
        let candidate: String = format!("{prefix}_{:07x}", rand::random::<u32>() >> 4);
        if !registry.id_in_use(&candidate) {
            return candidate;
        }
    }
}

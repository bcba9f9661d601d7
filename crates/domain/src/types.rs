// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Declares an opaque string identifier newtype.
macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an identifier value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier value.
            #[must_use]
            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_id!(
    /// Identifies a faculty member.
    FacultyId
);
opaque_id!(
    /// Identifies a room.
    RoomId
);
opaque_id!(
    /// Identifies a subject.
    SubjectId
);

/// A faculty member who can teach subjects.
///
/// Faculty are created by the administrator and are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    /// The faculty identifier.
    pub id: FacultyId,
    /// The display name.
    pub name: String,
}

impl Faculty {
    /// Creates a new `Faculty`.
    ///
    /// # Arguments
    ///
    /// * `id` - The faculty identifier
    /// * `name` - The display name
    #[must_use]
    pub fn new(id: FacultyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A room where classes are held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// The room identifier.
    pub id: RoomId,
    /// The display name (e.g. "Room 101").
    pub name: String,
}

impl Room {
    /// Creates a new `Room`.
    #[must_use]
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A subject taught by exactly one faculty member.
///
/// The faculty reference is fixed for the lifetime of the subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// The subject identifier.
    pub id: SubjectId,
    /// The display name.
    pub name: String,
    /// The faculty member teaching this subject.
    pub faculty_id: FacultyId,
}

impl Subject {
    /// Creates a new `Subject`.
    ///
    /// # Arguments
    ///
    /// * `id` - The subject identifier
    /// * `name` - The display name
    /// * `faculty_id` - The faculty member teaching this subject
    #[must_use]
    pub fn new(id: SubjectId, name: impl Into<String>, faculty_id: FacultyId) -> Self {
        Self {
            id,
            name: name.into(),
            faculty_id,
        }
    }
}

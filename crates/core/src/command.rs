// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use timetable_domain::FacultyId;

/// A command represents administrator intent as data only.
///
/// Commands are the only way to request registry changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new faculty member.
    AddFaculty {
        /// The display name.
        name: String,
    },
    /// Register a new room.
    AddRoom {
        /// The display name.
        name: String,
    },
    /// Register a new subject taught by an existing faculty member.
    AddSubject {
        /// The display name.
        name: String,
        /// The faculty member teaching the subject.
        faculty_id: FacultyId,
    },
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Viewer selection.
//!
//! A viewer is who is looking at the timetable: the administrator, a faculty
//! member, or a student cohort. Selecting a viewer checks that the chosen
//! faculty member or cohort exists; no credentials are involved.

use std::str::FromStr;
use thiserror::Error;
use timetable::{Cohort, Registry, cohorts_for_subjects, project_schedule};
use timetable_domain::{Faculty, FacultyId, Schedule};

/// Viewer roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The administrator: manages entities and generates timetables.
    Admin,
    /// A faculty member: sees only their own classes.
    Faculty,
    /// A student cohort: sees the full timetable.
    Student,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Faculty => "faculty",
            Self::Student => "student",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "faculty" => Ok(Self::Faculty),
            "student" => Ok(Self::Student),
            _ => Err(ViewerError::InvalidRole(s.to_string())),
        }
    }
}

/// Viewer selection errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewerError {
    /// The role string is not recognized.
    #[error("Invalid role '{0}'. Must be 'admin', 'faculty', or 'student'")]
    InvalidRole(String),

    /// A faculty or student viewer was selected without an identifier.
    #[error("A {0} viewer requires an id")]
    MissingId(Role),

    /// No faculty accounts exist yet.
    #[error("Admin must add at least one faculty account first")]
    NoFaculty,

    /// No student cohorts exist yet.
    #[error("Admin must add at least one subject first")]
    NoStudents,

    /// The faculty identifier does not resolve.
    #[error("Faculty '{0}' does not exist")]
    UnknownFaculty(String),

    /// The cohort identifier does not resolve.
    #[error("Student '{0}' does not exist")]
    UnknownStudent(String),
}

/// A resolved viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    /// The administrator.
    Admin,
    /// A faculty member.
    Faculty(Faculty),
    /// A student cohort.
    Student(Cohort),
}

impl Viewer {
    /// Returns the viewer's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Admin => Role::Admin,
            Self::Faculty(_) => Role::Faculty,
            Self::Student(_) => Role::Student,
        }
    }

    /// Returns the viewer's identifier, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Admin => None,
            Self::Faculty(faculty) => Some(faculty.id.value()),
            Self::Student(cohort) => Some(&cohort.id),
        }
    }

    /// Returns the viewer's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Admin => "Administrator",
            Self::Faculty(faculty) => &faculty.name,
            Self::Student(cohort) => &cohort.name,
        }
    }

    /// Returns the heading shown above this viewer's timetable.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Admin => "Master Timetable",
            Self::Faculty(_) => "My Teaching Timetable",
            Self::Student(_) => "Class Timetable",
        }
    }

    /// Returns the schedule this viewer is allowed to see.
    ///
    /// Faculty see the projection onto their own classes; everyone else sees
    /// the full schedule.
    #[must_use]
    pub fn visible_schedule(&self, schedule: &Schedule) -> Schedule {
        match self {
            Self::Faculty(faculty) => project_schedule(schedule, &faculty.id),
            Self::Admin | Self::Student(_) => schedule.clone(),
        }
    }
}

/// Resolves a viewer from a role and an optional identifier.
///
/// # Arguments
///
/// * `registry` - The current registry
/// * `role` - The selected role
/// * `id` - The faculty or cohort identifier (ignored for admin)
///
/// # Errors
///
/// Returns an error if:
/// - A faculty or student viewer is selected with no faculty or subjects registered
/// - The identifier is missing
/// - The identifier does not resolve
pub fn resolve_viewer(
    registry: &Registry,
    role: Role,
    id: Option<&str>,
) -> Result<Viewer, ViewerError> {
    match role {
        Role::Admin => Ok(Viewer::Admin),
        Role::Faculty => {
            if registry.faculties.is_empty() {
                return Err(ViewerError::NoFaculty);
            }
            let id: &str = id.ok_or(ViewerError::MissingId(Role::Faculty))?;
            registry
                .faculty(&FacultyId::new(id))
                .cloned()
                .map(Viewer::Faculty)
                .ok_or_else(|| ViewerError::UnknownFaculty(id.to_string()))
        }
        Role::Student => {
            let cohorts: Vec<Cohort> = cohorts_for_subjects(&registry.subjects);
            if cohorts.is_empty() {
                return Err(ViewerError::NoStudents);
            }
            let id: &str = id.ok_or(ViewerError::MissingId(Role::Student))?;
            cohorts
                .into_iter()
                .find(|cohort| cohort.id == id)
                .map(Viewer::Student)
                .ok_or_else(|| ViewerError::UnknownStudent(id.to_string()))
        }
    }
}

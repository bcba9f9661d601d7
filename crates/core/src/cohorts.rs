// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student cohorts derived from subjects.
//!
//! Each subject implies one cohort of students attending it. Cohorts are a
//! viewer convenience only and play no part in generation.

use timetable_domain::{Subject, SubjectId};

/// A group of students attending one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cohort {
    /// The cohort identifier, `stu_<subject id>`.
    pub id: String,
    /// The display name, `<subject name> Cohort`.
    pub name: String,
    /// The subject this cohort attends.
    pub subject_id: SubjectId,
}

/// Derives one cohort per subject, in subject order.
#[must_use]
pub fn cohorts_for_subjects(subjects: &[Subject]) -> Vec<Cohort> {
    subjects
        .iter()
        .map(|subject| Cohort {
            id: format!("stu_{}", subject.id.value()),
            name: format!("{} Cohort", subject.name),
            subject_id: subject.id.clone(),
        })
        .collect()
}

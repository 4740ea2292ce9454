#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{cmp::Ordering, fmt::Display};

use serde::{Deserialize, Serialize};

use super::{Graded, Mentor};
use crate::{
    constants::{LECTURE_AVERAGE_LABEL, NAME_LABEL, SURNAME_LABEL},
    grade::average_grade,
    types::Grades,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// A mentor who gives lectures and is graded for them by students.
///
/// Lecturers compare by their average lecture grade alone, so two different
/// lecturers with the same average are equal.
pub struct Lecturer {
    /// Identity and attached courses.
    #[serde(flatten)]
    mentor: Mentor,
    /// Lecture grades received from students, per course.
    #[serde(default)]
    grades: Grades,
}

impl Lecturer {
    /// Creates a lecturer with no courses and no grades.
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self::from(Mentor::new(name, surname))
    }

    /// Shared mentor data.
    pub fn mentor(&self) -> &Mentor {
        &self.mentor
    }

    /// First name.
    pub fn name(&self) -> &str {
        self.mentor.name()
    }

    /// Surname.
    pub fn surname(&self) -> &str {
        self.mentor.surname()
    }

    /// Courses this lecturer teaches.
    pub fn courses_attached(&self) -> &[String] {
        self.mentor.courses_attached()
    }

    /// Attaches the lecturer to another course.
    pub fn attach_course(&mut self, course: impl Into<String>) {
        self.mentor.attach_course(course);
    }

    /// Lecture grades received so far.
    pub fn grades(&self) -> &Grades {
        &self.grades
    }

    /// Mutable access for ratings given by students.
    pub(crate) fn grades_mut(&mut self) -> &mut Grades {
        &mut self.grades
    }

    /// Average lecture grade across all courses.
    pub fn avg_lectures(&self) -> f64 {
        average_grade(&self.grades, None)
    }

    /// Average lecture grade for one course.
    pub fn avg_lectures_for(&self, course: &str) -> f64 {
        average_grade(&self.grades, Some(course))
    }
}

impl From<Mentor> for Lecturer {
    fn from(mentor: Mentor) -> Self {
        Self {
            mentor,
            grades: Grades::new(),
        }
    }
}

impl Graded for Lecturer {
    fn grades(&self) -> &Grades {
        &self.grades
    }

    fn full_name(&self) -> String {
        format!("{} {}", self.name(), self.surname())
    }
}

impl Display for Lecturer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{NAME_LABEL}: {}\n{SURNAME_LABEL}: {}\n{LECTURE_AVERAGE_LABEL}: {:.1}",
            self.name(),
            self.surname(),
            self.avg_lectures()
        )
    }
}

impl PartialEq for Lecturer {
    fn eq(&self, other: &Self) -> bool {
        self.avg_lectures() == other.avg_lectures()
    }
}

impl PartialOrd for Lecturer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.avg_lectures().partial_cmp(&other.avg_lectures())
    }
}

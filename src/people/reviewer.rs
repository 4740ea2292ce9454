#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{Mentor, RatingError, Student, check_eligibility, record};
use crate::constants::{NAME_LABEL, SURNAME_LABEL};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// A mentor who grades student homework. Keeps no grades of its own.
pub struct Reviewer {
    /// Identity and attached courses.
    #[serde(flatten)]
    mentor: Mentor,
}

impl Reviewer {
    /// Creates a reviewer with no courses.
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

    /// Courses this reviewer checks homework for.
    pub fn courses_attached(&self) -> &[String] {
        self.mentor.courses_attached()
    }

    /// Attaches the reviewer to another course.
    pub fn attach_course(&mut self, course: impl Into<String>) {
        self.mentor.attach_course(course);
    }

    /// Grades `student`'s homework for `course`.
    ///
    /// The grade is appended to the student's grades only when this reviewer
    /// is attached to `course`, the student has it in progress, and `grade`
    /// is between 1 and 10. Otherwise nothing changes and
    /// [`RatingError::IneligibleRating`] is returned.
    pub fn rate_hw(
        &self,
        student: &mut Student,
        course: &str,
        grade: i32,
    ) -> Result<(), RatingError> {
        check_eligibility(self.courses_attached(), student.courses_in_progress(), course, grade)?;
        record(student.grades_mut(), course, grade);
        tracing::debug!(
            "{} {} graded homework of {} {} on `{course}`: {grade}",
            self.name(),
            self.surname(),
            student.name(),
            student.surname()
        );

        Ok(())
    }
}

impl From<Mentor> for Reviewer {
    fn from(mentor: Mentor) -> Self {
        Self { mentor }
    }
}

impl Display for Reviewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{NAME_LABEL}: {}\n{SURNAME_LABEL}: {}", self.name(), self.surname())
    }
}

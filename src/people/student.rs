#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{cmp::Ordering, fmt::Display};

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{Graded, Lecturer, RatingError, check_eligibility, record};
use crate::{
    constants::{
        FINISHED_LABEL, HOMEWORK_AVERAGE_LABEL, IN_PROGRESS_LABEL, NAME_LABEL, SURNAME_LABEL,
    },
    grade::{average_grade, normalize_course_list},
    types::Grades,
};

#[derive(Debug, Clone, Default, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
/// A student taking courses and collecting homework grades from reviewers.
///
/// Students compare by their average homework grade alone.
pub struct Student {
    /// First name.
    name:                String,
    /// Surname.
    surname:             String,
    /// Free-form gender text.
    gender:              String,
    /// Courses already completed, in the order they were added.
    #[builder(default)]
    #[serde(default)]
    finished_courses:    Vec<String>,
    /// Courses currently being taken, in the order they were added.
    #[builder(default)]
    #[serde(default)]
    courses_in_progress: Vec<String>,
    /// Homework grades received from reviewers, per course.
    #[builder(default)]
    #[serde(default)]
    grades:              Grades,
}

impl Student {
    /// Creates a student with no courses and no grades.
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name:                name.into(),
            surname:             surname.into(),
            gender:              gender.into(),
            finished_courses:    Vec::new(),
            courses_in_progress: Vec::new(),
            grades:              Grades::new(),
        }
    }

    /// First name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Surname.
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Gender, as given at construction.
    pub fn gender(&self) -> &str {
        &self.gender
    }

    /// Completed courses.
    pub fn finished_courses(&self) -> &[String] {
        &self.finished_courses
    }

    /// Courses in progress.
    pub fn courses_in_progress(&self) -> &[String] {
        &self.courses_in_progress
    }

    /// Homework grades received so far.
    pub fn grades(&self) -> &Grades {
        &self.grades
    }

    /// Mutable access for ratings given by reviewers.
    pub(crate) fn grades_mut(&mut self) -> &mut Grades {
        &mut self.grades
    }

    /// Starts a course. Already recorded grades are kept.
    pub fn enroll(&mut self, course: impl Into<String>) {
        self.courses_in_progress.push(course.into());
    }

    /// Records a completed course.
    ///
    /// The course is not taken off the in-progress list; no removal
    /// operation exists.
    pub fn finish_course(&mut self, course: impl Into<String>) {
        self.finished_courses.push(course.into());
    }

    /// Rates `lecturer`'s lecture on `course`.
    ///
    /// The grade is appended to the lecturer's grades only when this student
    /// has `course` in progress, the lecturer is attached to it, and `grade`
    /// is between 1 and 10. Otherwise nothing changes and
    /// [`RatingError::IneligibleRating`] is returned.
    pub fn rate_lecture(
        &self,
        lecturer: &mut Lecturer,
        course: &str,
        grade: i32,
    ) -> Result<(), RatingError> {
        check_eligibility(&self.courses_in_progress, lecturer.courses_attached(), course, grade)?;
        record(lecturer.grades_mut(), course, grade);
        tracing::debug!(
            "{} {} rated lecture of {} {} on `{course}`: {grade}",
            self.name,
            self.surname,
            lecturer.name(),
            lecturer.surname()
        );

        Ok(())
    }

    /// Average homework grade across all courses.
    pub fn avg_hw(&self) -> f64 {
        average_grade(&self.grades, None)
    }

    /// Average homework grade for one course.
    pub fn avg_hw_for(&self, course: &str) -> f64 {
        average_grade(&self.grades, Some(course))
    }
}

impl Graded for Student {
    fn grades(&self) -> &Grades {
        &self.grades
    }

    fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{NAME_LABEL}: {}", self.name)?;
        writeln!(f, "{SURNAME_LABEL}: {}", self.surname)?;
        writeln!(f, "{HOMEWORK_AVERAGE_LABEL}: {:.1}", self.avg_hw())?;
        writeln!(f, "{IN_PROGRESS_LABEL}: {}", normalize_course_list(&self.courses_in_progress))?;
        write!(f, "{FINISHED_LABEL}: {}", normalize_course_list(&self.finished_courses))
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.avg_hw() == other.avg_hw()
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.avg_hw().partial_cmp(&other.avg_hw())
    }
}

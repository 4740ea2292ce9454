#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The rating failure type.
pub mod error;
/// Lecturers, who are rated by students.
pub mod lecturer;
/// Shared identity and course attachment of lecturers and reviewers.
pub mod mentor;
/// Reviewers, who rate student homework.
pub mod reviewer;
/// Students, who rate lectures and receive homework grades.
pub mod student;

pub use error::RatingError;
pub use lecturer::Lecturer;
pub use mentor::Mentor;
pub use reviewer::Reviewer;
pub use student::Student;

use crate::{constants::GRADE_RANGE, grade::average_grade, types::Grades};

/// Anything that accumulates grades per course.
pub trait Graded {
    /// The grades received so far, per course.
    fn grades(&self) -> &Grades;

    /// `name surname`, used when listing entities.
    fn full_name(&self) -> String;

    /// Average over every course.
    fn average(&self) -> f64 {
        average_grade(self.grades(), None)
    }

    /// Average for a single course, `0.0` if nothing was recorded for it.
    fn average_for(&self, course: &str) -> f64 {
        average_grade(self.grades(), Some(course))
    }
}

/// Checks that `course` appears on both sides of a rating and that `grade`
/// is within [`GRADE_RANGE`].
///
/// * `rater_courses` - courses the rating party may rate for
/// * `target_courses` - courses the rated party may be rated for
fn check_eligibility(
    rater_courses: &[String],
    target_courses: &[String],
    course: &str,
    grade: i32,
) -> Result<(), RatingError> {
    if !lists_course(rater_courses, course) {
        tracing::debug!("Rating rejected: rater is not on course `{course}`");
        return Err(RatingError::IneligibleRating);
    }
    if !lists_course(target_courses, course) {
        tracing::debug!("Rating rejected: target is not on course `{course}`");
        return Err(RatingError::IneligibleRating);
    }
    if !GRADE_RANGE.contains(&grade) {
        tracing::debug!(
            "Rating rejected: grade {grade} is outside {}..={}",
            GRADE_RANGE.start(),
            GRADE_RANGE.end()
        );
        return Err(RatingError::IneligibleRating);
    }

    Ok(())
}

/// Whether `course` is one of `courses`. Names must match exactly.
fn lists_course(courses: &[String], course: &str) -> bool {
    courses.iter().any(|c| c == course)
}

/// Appends `grade` under `course`, creating the course entry if needed.
fn record(grades: &mut Grades, course: &str, grade: i32) {
    grades.entry(course.to_owned()).or_default().push(grade);
}

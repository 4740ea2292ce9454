//! # coursework
//!
//! Record keeping for students, lecturers and reviewers who grade each other
//! on courses.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Environment-driven settings
pub mod config;
/// A module defining the constant values used throughout
pub mod constants;
/// Averaging and course list formatting
pub mod grade;
/// Students, lecturers and reviewers
pub mod people;
/// Course-wide statistics and rankings
pub mod ranking;
/// Loading rosters and replaying ratings
pub mod roster;
/// Shared type aliases
pub mod types;

pub use grade::{average_grade, normalize_course_list};
pub use people::{Graded, Lecturer, Mentor, RatingError, Reviewer, Student};
pub use types::Grades;

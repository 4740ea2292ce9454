#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{cmp::Ordering, fmt::Display};

use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::{
    grade::mean,
    people::{Graded, Lecturer, Student},
};

/// Average homework grade of all `students` on `course`.
///
/// Every individual grade counts once, so a student with more graded
/// assignments weighs more. Returns `0.0` if nobody has a grade there.
pub fn average_hw_for_course(students: &[Student], course: &str) -> f64 {
    course_average(students, course)
}

/// Average lecture grade of all `lecturers` on `course`.
pub fn average_lectures_for_course(lecturers: &[Lecturer], course: &str) -> f64 {
    course_average(lecturers, course)
}

/// Pools every entity's grades for `course` and averages them.
fn course_average<T: Graded>(entries: &[T], course: &str) -> f64 {
    mean(
        entries
            .iter()
            .filter_map(|e| e.grades().get(course))
            .flatten(),
    )
}

/// A struct wrapping an average so it renders with one decimal in tables.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Average(pub f64);

impl Display for Average {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[derive(Tabled, Clone, Debug, PartialEq, Serialize)]
/// One row of a ranking table.
pub struct RankedEntry {
    #[tabled(rename = "#")]
    /// 1-based position in the ranking.
    pub position: usize,
    #[tabled(rename = "Name")]
    /// `name surname` of the ranked entity.
    pub name:     String,
    #[tabled(rename = "Average")]
    /// The average the ranking is based on.
    pub average:  Average,
}

/// Ranks students by average homework grade, best first.
pub fn rank_students(students: &[Student]) -> Vec<RankedEntry> {
    rank(students)
}

/// Ranks lecturers by average lecture grade, best first.
pub fn rank_lecturers(lecturers: &[Lecturer]) -> Vec<RankedEntry> {
    rank(lecturers)
}

/// Sorts by average, descending. Equal averages keep their input order.
fn rank<T: Graded>(entries: &[T]) -> Vec<RankedEntry> {
    let mut scored: Vec<(String, f64)> = entries
        .iter()
        .map(|e| (e.full_name(), e.average()))
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (name, average))| RankedEntry {
            position: i + 1,
            name,
            average: Average(average),
        })
        .collect()
}

/// Renders ranking rows as a table.
pub fn render_ranking(rows: &[RankedEntry]) -> String {
    Table::new(rows).with(Style::modern()).to_string()
}

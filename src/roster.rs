#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    people::{Lecturer, RatingError, Reviewer, Student},
    ranking::{
        average_hw_for_course, average_lectures_for_course, rank_lecturers, rank_students,
        render_ranking,
    },
};

/// An enum to represent possible errors when reading or replaying a roster.
#[derive(Error, Debug)]
pub enum RosterError {
    /// The roster file could not be read.
    #[error("Could not read roster `{}`: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path:   PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The roster file is not valid roster JSON.
    #[error("Could not parse roster `{}`: {source}", .path.display())]
    Parse {
        /// Path that was being parsed.
        path:   PathBuf,
        /// Underlying JSON failure.
        source: serde_json::Error,
    },
    /// A rating refers to a person the roster does not list.
    #[error("Rating #{rating} refers to {role} #{index}, but only {available} are listed")]
    UnknownIndex {
        /// Position of the offending rating in the `ratings` list.
        rating:    usize,
        /// Which list the index was looked up in.
        role:      &'static str,
        /// The index that was out of bounds.
        index:     usize,
        /// Length of that list.
        available: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Who rates whom.
pub enum RatingKind {
    /// A student rates a lecturer's lecture.
    Lecture,
    /// A reviewer grades a student's homework.
    Homework,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A rating to replay against the roster.
pub struct RatingEvent {
    /// Direction of the rating.
    pub kind:   RatingKind,
    /// Index of the rating party: a student for lectures, a reviewer for
    /// homework.
    pub from:   usize,
    /// Index of the rated party: a lecturer for lectures, a student for
    /// homework.
    pub to:     usize,
    /// Course the rating is for.
    pub course: String,
    /// The grade given.
    pub grade:  i32,
}

/// Outcome of [`Roster::apply`].
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// Ratings that were recorded.
    pub accepted: usize,
    /// Ratings refused by the eligibility checks.
    pub rejected: usize,
    /// Ratings that named someone not in the roster.
    pub errors:   Vec<RosterError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// Everyone taking part, plus the ratings they exchange.
pub struct Roster {
    /// Students, addressed by position.
    #[serde(default)]
    pub students:  Vec<Student>,
    /// Lecturers, addressed by position.
    #[serde(default)]
    pub lecturers: Vec<Lecturer>,
    /// Reviewers, addressed by position.
    #[serde(default)]
    pub reviewers: Vec<Reviewer>,
    /// Ratings, replayed in order by [`Roster::apply`].
    #[serde(default)]
    pub ratings:   Vec<RatingEvent>,
}

impl Roster {
    /// Reads a roster from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&text).map_err(|source| RosterError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses a roster from a JSON string.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Replays every pending rating in order, then clears the list.
    ///
    /// Neither an ineligible rating nor a dangling index stops the replay;
    /// both are tallied in the returned report. Applied ratings are consumed,
    /// so a second call, or a reload of the serialized roster, records
    /// nothing twice.
    pub fn apply(&mut self) -> ApplyReport {
        let mut report = ApplyReport::default();
        let ratings = std::mem::take(&mut self.ratings);

        for (i, event) in ratings.iter().enumerate() {
            match replay(&mut self.students, &mut self.lecturers, &self.reviewers, i, event) {
                Ok(Ok(())) => report.accepted += 1,
                Ok(Err(e)) => {
                    tracing::warn!(
                        "Rating #{i} ({:?} {} -> {} on `{}`, grade {}) rejected: {e}",
                        event.kind,
                        event.from,
                        event.to,
                        event.course,
                        event.grade
                    );
                    report.rejected += 1;
                }
                Err(e) => {
                    tracing::warn!("{e}");
                    report.errors.push(e);
                }
            }
        }

        tracing::info!(
            "Replayed {} ratings: {} accepted, {} rejected, {} invalid",
            ratings.len(),
            report.accepted,
            report.rejected,
            report.errors.len()
        );
        report
    }

    /// Everyone, one block per person separated by blank lines: reviewers,
    /// then lecturers, then students. When there are at least two lecturers
    /// or two students, the first two are compared at the end.
    pub fn render_show(&self) -> String {
        let blocks: Vec<String> = self
            .reviewers
            .iter()
            .map(ToString::to_string)
            .chain(self.lecturers.iter().map(ToString::to_string))
            .chain(self.students.iter().map(ToString::to_string))
            .collect();

        let mut comparisons = Vec::new();
        if let [first, second, ..] = self.lecturers.as_slice() {
            comparisons.push(format!("lecturer_1 > lecturer_2: {}", first > second));
            comparisons.push(format!("lecturer_1 == lecturer_2: {}", first == second));
        }
        if let [first, second, ..] = self.students.as_slice() {
            comparisons.push(format!("student_1 > student_2: {}", first > second));
            comparisons.push(format!("student_1 == student_2: {}", first == second));
        }

        let mut out = blocks.join("\n\n");
        if !comparisons.is_empty() {
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str(&comparisons.join("\n"));
        }
        out
    }

    /// Ranking tables for students and for lecturers, best first.
    pub fn render_rankings(&self) -> (String, String) {
        (
            render_ranking(&rank_students(&self.students)),
            render_ranking(&rank_lecturers(&self.lecturers)),
        )
    }

    /// Course-wide homework and lecture averages for `course`.
    pub fn render_course(&self, course: &str) -> String {
        format!(
            "Homework average for {course}: {:.1}\nLecture average for {course}: {:.1}",
            average_hw_for_course(&self.students, course),
            average_lectures_for_course(&self.lecturers, course)
        )
    }
}

/// Applies a single rating event.
///
/// The outer `Result` fails when an index is out of bounds, the inner one
/// when the rating itself is refused.
fn replay(
    students: &mut [Student],
    lecturers: &mut [Lecturer],
    reviewers: &[Reviewer],
    rating: usize,
    event: &RatingEvent,
) -> Result<Result<(), RatingError>, RosterError> {
    let unknown = |role: &'static str, index: usize, available: usize| RosterError::UnknownIndex {
        rating,
        role,
        index,
        available,
    };

    match event.kind {
        RatingKind::Lecture => {
            let available = lecturers.len();
            let lecturer = lecturers
                .get_mut(event.to)
                .ok_or_else(|| unknown("lecturer", event.to, available))?;
            let student = students
                .get(event.from)
                .ok_or_else(|| unknown("student", event.from, students.len()))?;
            Ok(student.rate_lecture(lecturer, &event.course, event.grade))
        }
        RatingKind::Homework => {
            let reviewer = reviewers
                .get(event.from)
                .ok_or_else(|| unknown("reviewer", event.from, reviewers.len()))?;
            let available = students.len();
            let student = students
                .get_mut(event.to)
                .ok_or_else(|| unknown("student", event.to, available))?;
            Ok(reviewer.rate_hw(student, &event.course, event.grade))
        }
    }
}

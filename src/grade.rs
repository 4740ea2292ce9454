#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use itertools::Itertools;

use crate::{constants::COURSE_SEPARATOR, types::Grades};

/// Returns the average grade from a `{course: [grades]}` mapping.
///
/// * `grades` - the mapping to average over
/// * `course` - if given, only that course's grades are averaged; a course
///   with no entry counts as having no grades
///
/// Returns `0.0` when there is nothing to average.
pub fn average_grade(grades: &Grades, course: Option<&str>) -> f64 {
    match course {
        Some(course) => mean(grades.get(course).into_iter().flatten()),
        None => mean(grades.values().flatten()),
    }
}

/// Arithmetic mean of a sequence of grades, `0.0` for an empty sequence.
pub(crate) fn mean<'a>(values: impl IntoIterator<Item = &'a i32>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0_i64, 0_usize), |(sum, count), &g| (sum + i64::from(g), count + 1));

    if count == 0 {
        return 0.0;
    }

    sum as f64 / count as f64
}

/// Joins course names into a single display string, trimming stray
/// whitespace around each name.
pub fn normalize_course_list<I, S>(courses: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    courses
        .into_iter()
        .map(|c| c.as_ref().trim().to_owned())
        .join(COURSE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_nothing_is_zero() {
        assert_eq!(mean(&Vec::<i32>::new()), 0.0);
    }

    #[test]
    fn mean_does_not_overflow_i32() {
        let values = [i32::MAX, i32::MAX];
        assert_eq!(mean(&values), i32::MAX as f64);
    }
}

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::ops::RangeInclusive;

/// Grades accepted by the rating operations, inclusive on both ends.
pub const GRADE_RANGE: RangeInclusive<i32> = 1..=10;

/// Separator placed between course names when a course list is displayed.
pub const COURSE_SEPARATOR: &str = ", ";

/// Label for a person's first name.
pub const NAME_LABEL: &str = "Имя";

/// Label for a person's surname.
pub const SURNAME_LABEL: &str = "Фамилия";

/// Label for a student's average homework grade.
pub const HOMEWORK_AVERAGE_LABEL: &str = "Средняя оценка за домашние задания";

/// Label for a lecturer's average lecture grade.
pub const LECTURE_AVERAGE_LABEL: &str = "Средняя оценка за лекции";

/// Label for the courses a student is currently taking.
pub const IN_PROGRESS_LABEL: &str = "Курсы в процессе изучения";

/// Label for the courses a student has completed.
pub const FINISHED_LABEL: &str = "Завершенные курсы";

/// Roster file used when neither the CLI nor the environment names one.
pub const DEFAULT_ROSTER_PATH: &str = "roster.json";

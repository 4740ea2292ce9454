use thiserror::Error;

/// A rating that was refused because one of its preconditions did not hold.
///
/// The failing precondition is not carried; it is only emitted as a `debug`
/// tracing event where the rating is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingError {
    /// The course is not shared by both parties, or the grade is out of range.
    #[error("Ошибка")]
    IneligibleRating,
}

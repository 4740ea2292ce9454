#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use bon::Builder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
/// Identity and course attachment shared by lecturers and reviewers.
pub struct Mentor {
    /// First name.
    name:             String,
    /// Surname.
    surname:          String,
    /// Courses this mentor teaches or reviews, in attachment order.
    #[builder(default)]
    #[serde(default)]
    courses_attached: Vec<String>,
}

impl Mentor {
    /// Creates a mentor who is not yet attached to any course.
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name:             name.into(),
            surname:          surname.into(),
            courses_attached: Vec::new(),
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

    /// Courses this mentor is attached to.
    pub fn courses_attached(&self) -> &[String] {
        &self.courses_attached
    }

    /// Attaches the mentor to another course.
    pub fn attach_course(&mut self, course: impl Into<String>) {
        self.courses_attached.push(course.into());
    }

    /// Whether the mentor is attached to `course`.
    pub fn is_attached_to(&self, course: &str) -> bool {
        super::lists_course(&self.courses_attached, course)
    }
}

use std::collections::BTreeMap;

/// Grades received per course, keyed by course name.
///
/// Ordered so that serialized output and flattened iteration are stable.
pub type Grades = BTreeMap<String, Vec<i32>>;

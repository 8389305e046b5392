//! Sort policies for list pages.
//!
//! A sort key comes straight from the `?sort=` query parameter. Recognized keys
//! reorder a copy of the records with a stable sort under [`locale_cmp`];
//! anything else keeps the source order.

use crate::collate::locale_cmp;
use crate::model::{FacultyMember, Section};

/// Ordering applied to a course's sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionSort {
    /// Source order (sections are stored in meeting-time order).
    #[default]
    Time,
    /// Ascending by professor name.
    Professor,
    /// Ascending by room.
    Room,
}

impl SectionSort {
    /// Parse a `?sort=` value. Missing or unrecognized keys fall back to [`SectionSort::Time`].
    #[must_use]
    pub fn from_query(key: Option<&str>) -> Self {
        match key {
            Some("professor") => Self::Professor,
            Some("room") => Self::Room,
            _ => Self::Time,
        }
    }

    /// Canonical key name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Professor => "professor",
            Self::Room => "room",
        }
    }
}

/// Ordering applied to the faculty directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacultySort {
    /// Ascending by name.
    #[default]
    Name,
    /// Source order.
    Source,
}

impl FacultySort {
    /// Parse a `?sort=` value.
    ///
    /// A missing key sorts by name; an unrecognized key keeps source order.
    #[must_use]
    pub fn from_query(key: Option<&str>) -> Self {
        match key {
            None | Some("name") => Self::Name,
            Some(_) => Self::Source,
        }
    }

    /// Canonical key name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Source => "default",
        }
    }
}

/// Return the sections reordered by `key`. The input is left untouched.
#[must_use]
pub fn sort_sections(sections: &[Section], key: SectionSort) -> Vec<Section> {
    match key {
        SectionSort::Time => sections.to_vec(),
        SectionSort::Professor => sorted_by(sections, |s| s.professor.as_str()),
        SectionSort::Room => sorted_by(sections, |s| s.room.as_str()),
    }
}

/// Return the faculty reordered by `key`. The input is left untouched.
#[must_use]
pub fn sort_faculty(faculty: &[FacultyMember], key: FacultySort) -> Vec<FacultyMember> {
    match key {
        FacultySort::Name => sorted_by(faculty, |m| m.name.as_str()),
        FacultySort::Source => faculty.to_vec(),
    }
}

/// Stable sort of a copy by a string field.
fn sorted_by<T: Clone>(records: &[T], field: impl Fn(&T) -> &str) -> Vec<T> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| locale_cmp(field(a), field(b)));
    sorted
}

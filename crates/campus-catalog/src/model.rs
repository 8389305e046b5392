//! Catalog records.

use serde::{Deserialize, Serialize};

/// A scheduled offering of a course.
///
/// Sections have no identity of their own; they only exist inside the
/// [`Course::sections`] list of their parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Meeting time as displayed (e.g., "9:00 AM").
    pub time: String,
    /// Room as displayed (e.g., "STC 392").
    pub room: String,
    /// Teaching professor's display name.
    pub professor: String,
}

impl Section {
    /// Create a section.
    #[must_use]
    pub fn new(
        time: impl Into<String>,
        room: impl Into<String>,
        professor: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            room: room.into(),
            professor: professor.into(),
        }
    }
}

/// A course in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// URL slug (e.g., "intro-to-programming").
    pub slug: String,
    /// Course code (e.g., "CS121"). Also accepted as a lookup key.
    pub code: String,
    /// Course title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Credit hours.
    pub credits: u8,
    /// Sections in source order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Course {
    /// Whether `key` addresses this course, by slug or by code.
    #[must_use]
    pub fn matches_key(&self, key: &str) -> bool {
        self.slug == key || self.code == key
    }
}

/// A member of the faculty directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyMember {
    /// URL slug (e.g., "brother-jack").
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Academic title (e.g., "Professor").
    pub title: String,
    /// Department name.
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> Course {
        Course {
            slug: "intro-to-programming".to_owned(),
            code: "CS121".to_owned(),
            title: "Introduction to Programming".to_owned(),
            description: String::new(),
            credits: 3,
            sections: vec![],
        }
    }

    #[test]
    fn test_course_matches_slug_and_code() {
        let course = course();

        assert!(course.matches_key("intro-to-programming"));
        assert!(course.matches_key("CS121"));
    }

    #[test]
    fn test_course_key_match_is_exact() {
        let course = course();

        assert!(!course.matches_key("cs121"));
        assert!(!course.matches_key("CS12"));
        assert!(!course.matches_key(""));
    }

    #[test]
    fn test_faculty_member_omits_missing_contact_fields() {
        let member = FacultyMember {
            slug: "brother-jack".to_owned(),
            name: "Brother Jack".to_owned(),
            title: "Professor".to_owned(),
            department: "Computer Science".to_owned(),
            office: None,
            email: Some("jack@example.edu".to_owned()),
            phone: None,
        };

        let toml = toml::to_string(&member).unwrap();

        assert!(toml.contains("email"));
        assert!(!toml.contains("office"));
        assert!(!toml.contains("phone"));
    }
}

//! In-memory catalog.
//!
//! Provides [`MemoryCatalog`], an immutable store built once at startup from the
//! built-in seed data or from a TOML data file.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{Catalog, CatalogError, CatalogErrorKind, RecordKind};
use crate::model::{Course, FacultyMember};
use crate::seed;

const BACKEND: &str = "Memory";

/// Data file layout.
///
/// ```toml
/// [[courses]]
/// slug = "intro-to-programming"
/// code = "CS121"
/// title = "Introduction to Programming"
/// description = "..."
/// credits = 3
///
/// [[courses.sections]]
/// time = "9:00 AM"
/// room = "STC 392"
/// professor = "Brother Jack"
///
/// [[faculty]]
/// slug = "brother-jack"
/// name = "Brother Jack"
/// title = "Professor"
/// department = "Computer Science"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogFile {
    courses: Vec<Course>,
    faculty: Vec<FacultyMember>,
}

/// Immutable in-memory catalog.
///
/// Records keep the order they were added in. Slugs are unique per kind and
/// course codes are unique among courses; constructors reject data that breaks
/// either rule.
///
/// # Example
///
/// ```ignore
/// use campus_catalog::{Catalog, MemoryCatalog};
///
/// let catalog = MemoryCatalog::load(Path::new("catalog.toml"))?;
/// let course = catalog.course("CS121")?;
/// ```
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    courses: Vec<Course>,
    faculty: Vec<FacultyMember>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the built-in course and faculty listings.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            courses: seed::courses(),
            faculty: seed::faculty(),
        }
    }

    /// Build a catalog from records, validating key uniqueness.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogErrorKind::DuplicateKey`] error naming the first
    /// repeated slug or course code.
    pub fn from_records(
        courses: Vec<Course>,
        faculty: Vec<FacultyMember>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self { courses, faculty };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid catalog or has duplicate keys.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content).map_err(|e| {
            CatalogError::new(CatalogErrorKind::Parse)
                .with_backend(BACKEND)
                .with_source(e)
        })?;
        Self::from_records(file.courses, file.faculty)
    }

    /// Load a catalog from a TOML data file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid catalog, or
    /// has duplicate keys.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::new(CatalogErrorKind::Io)
                .with_backend(BACKEND)
                .with_path(path)
                .with_source(e)
        })?;
        let catalog = Self::from_toml_str(&content).map_err(|e| e.with_path(path))?;

        tracing::debug!(
            path = %path.display(),
            courses = catalog.courses.len(),
            faculty = catalog.faculty.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Add a course.
    ///
    /// Builder used for tests and fixtures; uniqueness is not checked.
    #[must_use]
    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Add a faculty member.
    ///
    /// Builder used for tests and fixtures; uniqueness is not checked.
    #[must_use]
    pub fn with_faculty_member(mut self, member: FacultyMember) -> Self {
        self.faculty.push(member);
        self
    }

    /// Check per-kind key uniqueness.
    ///
    /// Course slugs and codes share one key space, since a course is looked up
    /// by either.
    fn validate(&self) -> Result<(), CatalogError> {
        let course_keys = self.courses.iter().flat_map(|c| {
            std::iter::once(c.slug.as_str()).chain((c.code != c.slug).then_some(c.code.as_str()))
        });
        first_duplicate(course_keys).map_or(Ok(()), |key| {
            Err(CatalogError::duplicate(RecordKind::Course, key).with_backend(BACKEND))
        })?;

        first_duplicate(self.faculty.iter().map(|m| m.slug.as_str())).map_or(Ok(()), |key| {
            Err(CatalogError::duplicate(RecordKind::Faculty, key).with_backend(BACKEND))
        })
    }
}

fn first_duplicate<'a>(mut keys: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    keys.find(|key| !seen.insert(*key))
}

impl Catalog for MemoryCatalog {
    fn courses(&self) -> Result<Vec<Course>, CatalogError> {
        Ok(self.courses.clone())
    }

    fn course(&self, key: &str) -> Result<Option<Course>, CatalogError> {
        Ok(self.courses.iter().find(|c| c.matches_key(key)).cloned())
    }

    fn faculty(&self) -> Result<Vec<FacultyMember>, CatalogError> {
        Ok(self.faculty.clone())
    }

    fn faculty_member(&self, slug: &str) -> Result<Option<FacultyMember>, CatalogError> {
        Ok(self.faculty.iter().find(|m| m.slug == slug).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Section;

    fn assert_send_sync<T: Send + Sync>() {}

    fn course(slug: &str, code: &str) -> Course {
        Course {
            slug: slug.to_owned(),
            code: code.to_owned(),
            title: format!("{code} title"),
            description: String::new(),
            credits: 3,
            sections: vec![Section::new("9:00 AM", "STC 392", "Brother Jack")],
        }
    }

    fn member(slug: &str) -> FacultyMember {
        FacultyMember {
            slug: slug.to_owned(),
            name: slug.to_owned(),
            title: "Professor".to_owned(),
            department: "Mathematics".to_owned(),
            office: None,
            email: None,
            phone: None,
        }
    }

    const SAMPLE: &str = r#"
[[courses]]
slug = "intro-to-programming"
code = "CS121"
title = "Introduction to Programming"
description = "Learn programming fundamentals."
credits = 3

[[courses.sections]]
time = "9:00 AM"
room = "STC 392"
professor = "Brother Jack"

[[courses.sections]]
time = "2:00 PM"
room = "STC 394"
professor = "Sister Enkey"

[[faculty]]
slug = "brother-jack"
name = "Brother Jack"
title = "Professor"
department = "Computer Science"
office = "STC 301"
"#;

    #[test]
    fn test_memory_catalog_is_send_sync() {
        assert_send_sync::<MemoryCatalog>();
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = MemoryCatalog::new();

        assert!(catalog.courses().unwrap().is_empty());
        assert!(catalog.faculty().unwrap().is_empty());
        assert_eq!(catalog.course("CS121").unwrap(), None);
    }

    #[test]
    fn test_course_lookup_by_slug_and_code() {
        let catalog = MemoryCatalog::new().with_course(course("intro-to-programming", "CS121"));

        let by_slug = catalog.course("intro-to-programming").unwrap().unwrap();
        let by_code = catalog.course("CS121").unwrap().unwrap();

        assert_eq!(by_slug, by_code);
    }

    #[test]
    fn test_unknown_key_is_absent() {
        let catalog = MemoryCatalog::seeded();

        assert_eq!(catalog.course("UNKNOWN").unwrap(), None);
        assert_eq!(catalog.faculty_member("UNKNOWN").unwrap(), None);
    }

    #[test]
    fn test_lookup_does_not_mutate_store() {
        let catalog = MemoryCatalog::seeded();
        let before = catalog.courses().unwrap();

        let mut fetched = catalog.course("CS121").unwrap().unwrap();
        fetched.sections.clear();
        let _ = catalog.course("UNKNOWN").unwrap();

        assert_eq!(catalog.courses().unwrap(), before);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let catalog = MemoryCatalog::new()
            .with_faculty_member(member("sister-enkey"))
            .with_faculty_member(member("brother-jack"));

        let slugs: Vec<String> = catalog
            .faculty()
            .unwrap()
            .into_iter()
            .map(|m| m.slug)
            .collect();
        assert_eq!(slugs, vec!["sister-enkey", "brother-jack"]);
    }

    #[test]
    fn test_from_records_rejects_duplicate_course_slug() {
        let err = MemoryCatalog::from_records(
            vec![course("algebra", "MATH110"), course("algebra", "MATH111")],
            vec![],
        )
        .unwrap_err();

        assert_eq!(err.kind, CatalogErrorKind::DuplicateKey);
        assert_eq!(err.record, Some((RecordKind::Course, "algebra".to_owned())));
    }

    #[test]
    fn test_from_records_rejects_duplicate_course_code() {
        let err = MemoryCatalog::from_records(
            vec![course("algebra", "MATH110"), course("algebra-2", "MATH110")],
            vec![],
        )
        .unwrap_err();

        assert_eq!(err.record, Some((RecordKind::Course, "MATH110".to_owned())));
    }

    #[test]
    fn test_from_records_rejects_slug_matching_other_code() {
        let err = MemoryCatalog::from_records(
            vec![course("CS121", "ABC1"), course("intro", "CS121")],
            vec![],
        )
        .unwrap_err();

        assert_eq!(err.kind, CatalogErrorKind::DuplicateKey);
        assert_eq!(err.record, Some((RecordKind::Course, "CS121".to_owned())));
    }

    #[test]
    fn test_from_records_allows_slug_equal_to_own_code() {
        let catalog = MemoryCatalog::from_records(vec![course("CS121", "CS121")], vec![]).unwrap();

        assert_eq!(catalog.course("CS121").unwrap().unwrap().code, "CS121");
    }

    #[test]
    fn test_from_records_rejects_duplicate_faculty_slug() {
        let err = MemoryCatalog::from_records(vec![], vec![member("jack"), member("jack")])
            .unwrap_err();

        assert_eq!(err.record, Some((RecordKind::Faculty, "jack".to_owned())));
    }

    #[test]
    fn test_slugs_are_unique_per_kind_only() {
        let catalog =
            MemoryCatalog::from_records(vec![course("enkey", "CS200")], vec![member("enkey")])
                .unwrap();

        assert_eq!(catalog.course("enkey").unwrap().unwrap().code, "CS200");
        assert_eq!(catalog.faculty_member("enkey").unwrap().unwrap().slug, "enkey");
    }

    #[test]
    fn test_from_toml_str() {
        let catalog = MemoryCatalog::from_toml_str(SAMPLE).unwrap();

        let course = catalog.course("CS121").unwrap().unwrap();
        assert_eq!(course.slug, "intro-to-programming");
        assert_eq!(course.sections.len(), 2);
        assert_eq!(course.sections[1].professor, "Sister Enkey");

        let member = catalog.faculty_member("brother-jack").unwrap().unwrap();
        assert_eq!(member.office.as_deref(), Some("STC 301"));
        assert_eq!(member.email, None);
    }

    #[test]
    fn test_from_toml_str_allows_empty_document() {
        let catalog = MemoryCatalog::from_toml_str("").unwrap();

        assert!(catalog.courses().unwrap().is_empty());
    }

    #[test]
    fn test_from_toml_str_rejects_missing_fields() {
        let err = MemoryCatalog::from_toml_str("[[courses]]\nslug = \"x\"\n").unwrap_err();

        assert_eq!(err.kind, CatalogErrorKind::Parse);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = MemoryCatalog::load(file.path()).unwrap();

        assert_eq!(catalog.courses().unwrap().len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = MemoryCatalog::load(&path).unwrap_err();

        assert_eq!(err.kind, CatalogErrorKind::Io);
        assert_eq!(err.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"courses = 3").unwrap();

        let err = MemoryCatalog::load(file.path()).unwrap_err();

        assert_eq!(err.kind, CatalogErrorKind::Parse);
        assert_eq!(err.path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_seeded_catalog_is_valid() {
        let seeded = MemoryCatalog::seeded();

        let rebuilt =
            MemoryCatalog::from_records(seeded.courses().unwrap(), seeded.faculty().unwrap());

        assert!(rebuilt.is_ok());
    }
}

//! Catalog trait and error types.
//!
//! Provides the core [`Catalog`] trait for looking up courses and faculty,
//! along with [`CatalogError`] for unified error handling across stores.
//!
//! # Absence
//!
//! A lookup that finds nothing is not an error: `get by key` methods return
//! `Ok(None)`. [`CatalogError`] is reserved for a store that cannot answer at all
//! (unreadable data file, invalid records, unavailable backend).

use std::fmt;
use std::path::PathBuf;

use crate::model::{Course, FacultyMember};

/// Kind of record held by a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A [`Course`].
    Course,
    /// A [`FacultyMember`].
    Faculty,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Course => f.write_str("course"),
            Self::Faculty => f.write_str("faculty member"),
        }
    }
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    /// Data file could not be read.
    Io,
    /// Data file is not valid TOML or does not match the record schema.
    Parse,
    /// Two records of the same kind share a slug (or two courses share a code).
    DuplicateKey,
    /// Backend is temporarily unavailable.
    Unavailable,
}

/// Catalog error with semantic kind and store-specific source.
#[derive(Debug)]
pub struct CatalogError {
    /// Semantic error category.
    pub kind: CatalogErrorKind,
    /// Record kind and key involved (if applicable).
    pub record: Option<(RecordKind, String)>,
    /// Data file involved (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Memory").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CatalogError {
    /// Create a new catalog error.
    #[must_use]
    pub fn new(kind: CatalogErrorKind) -> Self {
        Self {
            kind,
            record: None,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach record context.
    #[must_use]
    pub fn with_record(mut self, kind: RecordKind, key: impl Into<String>) -> Self {
        self.record = Some((kind, key.into()));
        self
    }

    /// Attach data file context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a duplicate key error.
    #[must_use]
    pub fn duplicate(kind: RecordKind, key: impl Into<String>) -> Self {
        Self::new(CatalogErrorKind::DuplicateKey).with_record(kind, key)
    }

    /// Create an unavailable-backend error.
    #[must_use]
    pub fn unavailable(backend: &'static str) -> Self {
        Self::new(CatalogErrorKind::Unavailable).with_backend(backend)
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "[Backend] Kind: source (course: cs121) (path: /foo/catalog.toml)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            CatalogErrorKind::Io => "I/O error",
            CatalogErrorKind::Parse => "Invalid catalog data",
            CatalogErrorKind::DuplicateKey => "Duplicate key",
            CatalogErrorKind::Unavailable => "Unavailable",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some((kind, key)) = &self.record {
            write!(f, " ({kind}: {key})")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Read-only lookup of catalog records.
///
/// Every method returns owned records: a fetched record is scoped to the
/// request that asked for it and is never shared or cached across requests.
pub trait Catalog: Send + Sync {
    /// List all courses in source order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the store cannot be read.
    fn courses(&self) -> Result<Vec<Course>, CatalogError>;

    /// Get a course by slug or course code.
    ///
    /// Returns `Ok(None)` when no course matches.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the store cannot be read.
    fn course(&self, key: &str) -> Result<Option<Course>, CatalogError>;

    /// List all faculty members in source order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the store cannot be read.
    fn faculty(&self) -> Result<Vec<FacultyMember>, CatalogError>;

    /// Get a faculty member by slug.
    ///
    /// Returns `Ok(None)` when no member matches.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the store cannot be read.
    fn faculty_member(&self, slug: &str) -> Result<Option<FacultyMember>, CatalogError>;
}

//! Course and faculty catalog for the campus site.
//!
//! This crate provides a [`Catalog`] trait for abstracting record lookup from the
//! underlying store. The server only ever asks two questions of a store:
//!
//! - **List all** records of a kind ([`Catalog::courses`], [`Catalog::faculty`])
//! - **Get by key** ([`Catalog::course`], [`Catalog::faculty_member`]), where absence
//!   is `Ok(None)` and never an empty record
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Course`], [`Section`] and [`FacultyMember`] records
//! - [`Catalog`] trait with [`CatalogError`] for store failures
//! - [`MemoryCatalog`], an immutable in-memory store built from seed data or a
//!   TOML data file
//! - [`sort_sections`] / [`sort_faculty`] sort policies over [`locale_cmp`]
//!
//! # Example
//!
//! ```ignore
//! use campus_catalog::{Catalog, MemoryCatalog, SectionSort, sort_sections};
//!
//! let catalog = MemoryCatalog::seeded();
//! if let Some(course) = catalog.course("CS121")? {
//!     let sections = sort_sections(&course.sections, SectionSort::Professor);
//!     println!("{} has {} sections", course.code, sections.len());
//! }
//! ```

mod catalog;
mod collate;
mod memory;
mod model;
mod seed;
mod sort;

pub use catalog::{Catalog, CatalogError, CatalogErrorKind, RecordKind};
pub use collate::locale_cmp;
pub use memory::MemoryCatalog;
pub use model::{Course, FacultyMember, Section};
pub use sort::{FacultySort, SectionSort, sort_faculty, sort_sections};

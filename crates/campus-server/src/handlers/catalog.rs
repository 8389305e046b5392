//! Course catalog pages.

use std::sync::Arc;

use axum::Extension;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::Html;
use campus_catalog::{Course, Section, SectionSort, sort_sections};
use serde::{Deserialize, Serialize};

use crate::context::RequestContext;
use crate::error::PageError;
use crate::handlers::render;
use crate::state::AppState;

/// `?sort=` query parameter.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SortQuery {
    pub(crate) sort: Option<String>,
}

impl SortQuery {
    /// Sort key from a possibly malformed query string.
    pub(crate) fn key(query: Result<Query<Self>, QueryRejection>) -> Option<String> {
        query.ok().and_then(|Query(query)| query.sort)
    }
}

#[derive(Serialize)]
struct CourseList {
    title: &'static str,
    courses: Vec<Course>,
}

#[derive(Serialize)]
struct CourseDetail {
    title: String,
    course: Course,
    sections: Vec<Section>,
    current_sort: &'static str,
}

/// Handle GET /catalog.
pub(crate) async fn list(
    State(state): State<Arc<AppState>>,
    Extension(locals): Extension<RequestContext>,
) -> Result<Html<String>, PageError> {
    let courses = state.catalog.courses()?;

    render(
        &state,
        "catalog/list.html",
        &locals,
        CourseList {
            title: "Course Catalog",
            courses,
        },
    )
}

/// Handle GET /catalog/{slug}.
///
/// The slug may also be a course code. Sections are sorted by `?sort=`,
/// falling back to source order for a missing or unknown key.
pub(crate) async fn detail(
    State(state): State<Arc<AppState>>,
    Extension(locals): Extension<RequestContext>,
    Path(slug): Path<String>,
    query: Result<Query<SortQuery>, QueryRejection>,
) -> Result<Html<String>, PageError> {
    let Some(course) = state.catalog.course(&slug)? else {
        return Err(PageError::NotFound(format!("Course {slug} not found")));
    };

    let sort = SectionSort::from_query(SortQuery::key(query).as_deref());
    let sections = sort_sections(&course.sections, sort);
    tracing::debug!(course = %course.code, sort = sort.as_str(), "Rendering course");

    render(
        &state,
        "catalog/detail.html",
        &locals,
        CourseDetail {
            title: format!("{} - {}", course.code, course.title),
            course,
            sections,
            current_sort: sort.as_str(),
        },
    )
}

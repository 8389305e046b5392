//! Faculty directory pages.

use std::sync::Arc;

use axum::Extension;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::Html;
use campus_catalog::{FacultyMember, FacultySort, sort_faculty};
use serde::Serialize;

use crate::context::RequestContext;
use crate::error::PageError;
use crate::handlers::catalog::SortQuery;
use crate::handlers::render;
use crate::state::AppState;

#[derive(Serialize)]
struct FacultyList {
    title: &'static str,
    faculty: Vec<FacultyMember>,
    current_sort: &'static str,
}

#[derive(Serialize)]
struct FacultyDetail {
    title: String,
    faculty: FacultyMember,
}

/// Handle GET /faculty.
pub(crate) async fn list(
    State(state): State<Arc<AppState>>,
    Extension(locals): Extension<RequestContext>,
    query: Result<Query<SortQuery>, QueryRejection>,
) -> Result<Html<String>, PageError> {
    let sort = FacultySort::from_query(SortQuery::key(query).as_deref());
    let faculty = sort_faculty(&state.catalog.faculty()?, sort);

    render(
        &state,
        "faculty/list.html",
        &locals,
        FacultyList {
            title: "Faculty Directory",
            faculty,
            current_sort: sort.as_str(),
        },
    )
}

/// Handle GET /faculty/{slug}.
pub(crate) async fn detail(
    State(state): State<Arc<AppState>>,
    Extension(locals): Extension<RequestContext>,
    Path(slug): Path<String>,
) -> Result<Html<String>, PageError> {
    let Some(member) = state.catalog.faculty_member(&slug)? else {
        return Err(PageError::NotFound(format!(
            "Faculty member {slug} not found"
        )));
    };

    render(
        &state,
        "faculty/detail.html",
        &locals,
        FacultyDetail {
            title: member.name.clone(),
            faculty: member,
        },
    )
}

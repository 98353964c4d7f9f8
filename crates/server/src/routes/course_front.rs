use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

use common::types::R;
use service::course_front_service::{self, CourseFrontQuery};
use service::pagination::Pagination;

use crate::errors::{ok, ApiResult, AppError};
use crate::startup::AppState;

/// Page of the public catalogue. `limit` is capped by `pagination.max_page_size`;
/// a zero `limit` fails as an arithmetic error.
#[utoipa::path(
    post, path = "/eduservice/coursefront/getFrontCourseList/{page}/{limit}", tag = "course_front",
    params(
        ("page" = u32, Path, description = "1-based page"),
        ("limit" = u32, Path, description = "Page size")
    ),
    request_body = crate::openapi::CourseFrontQueryDoc,
    responses((status = 200, description = "Envelope with page fields", body = crate::openapi::EnvelopeDoc))
)]
pub async fn get_front_course_list(
    State(state): State<AppState>,
    paging: Result<Path<(u32, u32)>, PathRejection>,
    query: Result<Json<CourseFrontQuery>, JsonRejection>,
) -> ApiResult {
    let Path((page, limit)) = paging?;
    let Json(query) = query?;
    let per_page = limit.min(state.pagination.max_page_size);

    let page = course_front_service::list_front_courses(&state.db, Pagination { page, per_page }, &query).await?;
    ok(R::ok().data_map(page_data(&page)?))
}

/// Page fields become the top-level envelope data.
fn page_data<T: Serialize>(page: &T) -> Result<Map<String, Value>, AppError> {
    match serde_json::to_value(page)? {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::Encode("page did not encode as an object".into())),
    }
}

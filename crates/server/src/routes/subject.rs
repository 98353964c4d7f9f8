use axum::extract::State;

use common::types::R;
use service::subject_service;

use crate::errors::{ok, ApiResult};
use crate::startup::AppState;

#[utoipa::path(
    get, path = "/eduservice/subject/getAllSubject", tag = "subject",
    responses((status = 200, description = "Envelope with `list`", body = crate::openapi::EnvelopeDoc))
)]
pub async fn get_all_subject(State(state): State<AppState>) -> ApiResult {
    let list = subject_service::list_subject_tree(&state.db).await?;
    ok(R::ok().data("list", list))
}

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;
use uuid::Uuid;

use common::types::R;
use models::teacher;
use service::teacher_service::{self, TeacherInput};

use crate::errors::{ok, ApiResult};
use crate::startup::AppState;

/// Raw list, not wrapped in the envelope.
#[utoipa::path(get, path = "/eduservice/teacher/findAll", tag = "teacher", responses((status = 200, description = "All teachers")))]
pub async fn find_all(State(state): State<AppState>) -> ApiResult<Json<Vec<teacher::Model>>> {
    let list = teacher_service::list_teachers(&state.db).await?;
    info!(count = list.len(), "teachers_listed");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/eduservice/teacher/getTeacher/{id}", tag = "teacher",
    params(("id" = Uuid, Path, description = "Teacher id")),
    responses((status = 200, description = "Envelope with `teacher`", body = crate::openapi::EnvelopeDoc))
)]
pub async fn get_teacher(State(state): State<AppState>, id: Result<Path<Uuid>, PathRejection>) -> ApiResult {
    let Path(id) = id?;
    let t = teacher_service::get_teacher(&state.db, id).await?;
    ok(R::ok().data("teacher", t))
}

#[utoipa::path(
    post, path = "/eduservice/teacher/addTeacher", tag = "teacher",
    request_body = crate::openapi::TeacherInputDoc,
    responses((status = 200, description = "Envelope with `id`", body = crate::openapi::EnvelopeDoc))
)]
pub async fn add_teacher(State(state): State<AppState>, input: Result<Json<TeacherInput>, JsonRejection>) -> ApiResult {
    let Json(input) = input?;
    let id = teacher_service::add_teacher(&state.db, input).await?;
    ok(R::ok().data("id", id))
}

#[utoipa::path(
    post, path = "/eduservice/teacher/updateTeacher", tag = "teacher",
    request_body = crate::openapi::TeacherInputDoc,
    responses((status = 200, description = "Envelope", body = crate::openapi::EnvelopeDoc))
)]
pub async fn update_teacher(State(state): State<AppState>, input: Result<Json<TeacherInput>, JsonRejection>) -> ApiResult {
    let Json(input) = input?;
    teacher_service::update_teacher(&state.db, input).await?;
    ok(R::ok())
}

#[utoipa::path(
    delete, path = "/eduservice/teacher/{id}", tag = "teacher",
    params(("id" = Uuid, Path, description = "Teacher id")),
    responses((status = 200, description = "Envelope", body = crate::openapi::EnvelopeDoc))
)]
pub async fn remove_teacher(State(state): State<AppState>, id: Result<Path<Uuid>, PathRejection>) -> ApiResult {
    let Path(id) = id?;
    teacher_service::remove_teacher(&state.db, id).await?;
    ok(R::ok())
}

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use common::types::R;
use service::course_service::{self, CourseInfo};

use crate::errors::{ok, ApiResult};
use crate::startup::AppState;

#[utoipa::path(
    post, path = "/eduservice/course/addCourseInfo", tag = "course",
    request_body = crate::openapi::CourseInfoDoc,
    responses((status = 200, description = "Envelope with `course_id`", body = crate::openapi::EnvelopeDoc))
)]
pub async fn add_course_info(State(state): State<AppState>, input: Result<Json<CourseInfo>, JsonRejection>) -> ApiResult {
    let Json(info) = input?;
    let id = course_service::save_course_info(&state.db, info).await?;
    ok(R::ok().data("course_id", id))
}

#[utoipa::path(
    get, path = "/eduservice/course/getCourseInfo/{course_id}", tag = "course",
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses((status = 200, description = "Envelope with `course_info`", body = crate::openapi::EnvelopeDoc))
)]
pub async fn get_course_info(State(state): State<AppState>, id: Result<Path<Uuid>, PathRejection>) -> ApiResult {
    let Path(id) = id?;
    let info = course_service::get_course_info(&state.db, id).await?;
    ok(R::ok().data("course_info", info))
}

#[utoipa::path(
    post, path = "/eduservice/course/updateCourseInfo", tag = "course",
    request_body = crate::openapi::CourseInfoDoc,
    responses((status = 200, description = "Envelope", body = crate::openapi::EnvelopeDoc))
)]
pub async fn update_course_info(State(state): State<AppState>, input: Result<Json<CourseInfo>, JsonRejection>) -> ApiResult {
    let Json(info) = input?;
    course_service::update_course_info(&state.db, info).await?;
    ok(R::ok())
}

#[utoipa::path(
    get, path = "/eduservice/course/getPublishCourseInfo/{id}", tag = "course",
    params(("id" = Uuid, Path, description = "Course id")),
    responses((status = 200, description = "Envelope with `publish_course`", body = crate::openapi::EnvelopeDoc))
)]
pub async fn get_publish_course_info(State(state): State<AppState>, id: Result<Path<Uuid>, PathRejection>) -> ApiResult {
    let Path(id) = id?;
    let publish = course_service::get_publish_course_info(&state.db, id).await?;
    ok(R::ok().data("publish_course", publish))
}

#[utoipa::path(
    post, path = "/eduservice/course/publishCourse/{id}", tag = "course",
    params(("id" = Uuid, Path, description = "Course id")),
    responses((status = 200, description = "Envelope", body = crate::openapi::EnvelopeDoc))
)]
pub async fn publish_course(State(state): State<AppState>, id: Result<Path<Uuid>, PathRejection>) -> ApiResult {
    let Path(id) = id?;
    course_service::publish_course(&state.db, id).await?;
    ok(R::ok())
}

/// Cascading delete; `removed` carries per-table row counts.
#[utoipa::path(
    delete, path = "/eduservice/course/{course_id}", tag = "course",
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses((status = 200, description = "Envelope with `removed`", body = crate::openapi::EnvelopeDoc))
)]
pub async fn remove_course(State(state): State<AppState>, id: Result<Path<Uuid>, PathRejection>) -> ApiResult {
    let Path(id) = id?;
    let removed = course_service::remove_course(&state.db, id).await?;
    ok(R::ok().data("removed", removed))
}

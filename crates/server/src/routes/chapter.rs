use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use common::types::R;
use service::chapter_service::{self, ChapterInput};

use crate::errors::{ok, ApiResult};
use crate::startup::AppState;

#[utoipa::path(
    get, path = "/eduservice/chapter/getChapterVideo/{course_id}", tag = "chapter",
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses((status = 200, description = "Envelope with `all_chapter_video`", body = crate::openapi::EnvelopeDoc))
)]
pub async fn get_chapter_video(State(state): State<AppState>, id: Result<Path<Uuid>, PathRejection>) -> ApiResult {
    let Path(course_id) = id?;
    let tree = chapter_service::list_chapter_videos(&state.db, course_id).await?;
    ok(R::ok().data("all_chapter_video", tree))
}

#[utoipa::path(
    post, path = "/eduservice/chapter/addChapter", tag = "chapter",
    request_body = crate::openapi::ChapterInputDoc,
    responses((status = 200, description = "Envelope with `id`", body = crate::openapi::EnvelopeDoc))
)]
pub async fn add_chapter(State(state): State<AppState>, input: Result<Json<ChapterInput>, JsonRejection>) -> ApiResult {
    let Json(input) = input?;
    let id = chapter_service::add_chapter(&state.db, input).await?;
    ok(R::ok().data("id", id))
}

#[utoipa::path(
    get, path = "/eduservice/chapter/getChapterInfo/{chapter_id}", tag = "chapter",
    params(("chapter_id" = Uuid, Path, description = "Chapter id")),
    responses((status = 200, description = "Envelope with `chapter`", body = crate::openapi::EnvelopeDoc))
)]
pub async fn get_chapter_info(State(state): State<AppState>, id: Result<Path<Uuid>, PathRejection>) -> ApiResult {
    let Path(id) = id?;
    let chapter = chapter_service::get_chapter(&state.db, id).await?;
    ok(R::ok().data("chapter", chapter))
}

#[utoipa::path(
    post, path = "/eduservice/chapter/updateChapter", tag = "chapter",
    request_body = crate::openapi::ChapterInputDoc,
    responses((status = 200, description = "Envelope", body = crate::openapi::EnvelopeDoc))
)]
pub async fn update_chapter(State(state): State<AppState>, input: Result<Json<ChapterInput>, JsonRejection>) -> ApiResult {
    let Json(input) = input?;
    chapter_service::update_chapter(&state.db, input).await?;
    ok(R::ok())
}

#[utoipa::path(
    delete, path = "/eduservice/chapter/{chapter_id}", tag = "chapter",
    params(("chapter_id" = Uuid, Path, description = "Chapter id")),
    responses((status = 200, description = "Envelope", body = crate::openapi::EnvelopeDoc))
)]
pub async fn remove_chapter(State(state): State<AppState>, id: Result<Path<Uuid>, PathRejection>) -> ApiResult {
    let Path(id) = id?;
    chapter_service::remove_chapter(&state.db, id).await?;
    ok(R::ok())
}

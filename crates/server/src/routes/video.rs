use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use common::types::R;
use service::video_service::{self, VideoInput};

use crate::errors::{ok, ApiResult};
use crate::startup::AppState;

#[utoipa::path(
    post, path = "/eduservice/video/addVideo", tag = "video",
    request_body = crate::openapi::VideoInputDoc,
    responses((status = 200, description = "Envelope with `id`", body = crate::openapi::EnvelopeDoc))
)]
pub async fn add_video(State(state): State<AppState>, input: Result<Json<VideoInput>, JsonRejection>) -> ApiResult {
    let Json(input) = input?;
    let id = video_service::add_video(&state.db, input).await?;
    ok(R::ok().data("id", id))
}

#[utoipa::path(
    get, path = "/eduservice/video/getVideo/{id}", tag = "video",
    params(("id" = Uuid, Path, description = "Video id")),
    responses((status = 200, description = "Envelope with `video`", body = crate::openapi::EnvelopeDoc))
)]
pub async fn get_video(State(state): State<AppState>, id: Result<Path<Uuid>, PathRejection>) -> ApiResult {
    let Path(id) = id?;
    let video = video_service::get_video(&state.db, id).await?;
    ok(R::ok().data("video", video))
}

#[utoipa::path(
    post, path = "/eduservice/video/updateVideo", tag = "video",
    request_body = crate::openapi::VideoInputDoc,
    responses((status = 200, description = "Envelope", body = crate::openapi::EnvelopeDoc))
)]
pub async fn update_video(State(state): State<AppState>, input: Result<Json<VideoInput>, JsonRejection>) -> ApiResult {
    let Json(input) = input?;
    video_service::update_video(&state.db, input).await?;
    ok(R::ok())
}

#[utoipa::path(
    delete, path = "/eduservice/video/{id}", tag = "video",
    params(("id" = Uuid, Path, description = "Video id")),
    responses((status = 200, description = "Envelope", body = crate::openapi::EnvelopeDoc))
)]
pub async fn remove_video(State(state): State<AppState>, id: Result<Path<Uuid>, PathRejection>) -> ApiResult {
    let Path(id) = id?;
    video_service::remove_video(&state.db, id).await?;
    ok(R::ok())
}

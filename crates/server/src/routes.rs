use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{metrics::encode_metrics, types::Health};

use crate::openapi::ApiDoc;
use crate::startup::AppState;

pub mod chapter;
pub mod course;
pub mod course_front;
pub mod subject;
pub mod teacher;
pub mod video;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn metrics() -> (axum::http::StatusCode, String) {
    encode_metrics()
}

fn edu_routes() -> Router<AppState> {
    Router::new()
        .route("/eduservice/teacher/findAll", get(teacher::find_all))
        .route("/eduservice/teacher/getTeacher/:id", get(teacher::get_teacher))
        .route("/eduservice/teacher/addTeacher", post(teacher::add_teacher))
        .route("/eduservice/teacher/updateTeacher", post(teacher::update_teacher))
        .route("/eduservice/teacher/:id", delete(teacher::remove_teacher))
        .route("/eduservice/course/addCourseInfo", post(course::add_course_info))
        .route("/eduservice/course/getCourseInfo/:course_id", get(course::get_course_info))
        .route("/eduservice/course/updateCourseInfo", post(course::update_course_info))
        .route("/eduservice/course/getPublishCourseInfo/:id", get(course::get_publish_course_info))
        .route("/eduservice/course/publishCourse/:id", post(course::publish_course))
        .route("/eduservice/course/:course_id", delete(course::remove_course))
        .route(
            "/eduservice/coursefront/getFrontCourseList/:page/:limit",
            post(course_front::get_front_course_list),
        )
        .route("/eduservice/chapter/getChapterVideo/:course_id", get(chapter::get_chapter_video))
        .route("/eduservice/chapter/addChapter", post(chapter::add_chapter))
        .route("/eduservice/chapter/getChapterInfo/:chapter_id", get(chapter::get_chapter_info))
        .route("/eduservice/chapter/updateChapter", post(chapter::update_chapter))
        .route("/eduservice/chapter/:chapter_id", delete(chapter::remove_chapter))
        .route("/eduservice/video/addVideo", post(video::add_video))
        .route("/eduservice/video/getVideo/:id", get(video::get_video))
        .route("/eduservice/video/updateVideo", post(video::update_video))
        .route("/eduservice/video/:id", delete(video::remove_video))
        .route("/eduservice/subject/getAllSubject", get(subject::get_all_subject))
}

/// Build the full application router: health, metrics, API docs and the edu service routes
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .merge(edu_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx only; envelope failures are logged by AppError
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

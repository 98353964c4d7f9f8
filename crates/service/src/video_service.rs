use chrono::Utc;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use models::video;
use crate::errors::ServiceError;

/// Status of a video whose upload has not been processed yet.
pub const STATUS_EMPTY: &str = "Empty";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VideoInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub course_id: Uuid,
    pub chapter_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub video_source_id: String,
    #[serde(default)]
    pub video_original_name: String,
    #[serde(default)]
    pub sort: i32,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub size: i64,
}

impl VideoInput {
    fn validate(&self) -> Result<(), ServiceError> {
        video::validate_title(&self.title)?;
        video::validate_duration(self.duration)?;
        if self.size < 0 {
            return Err(ServiceError::Validation("video size must be non-negative".into()));
        }
        Ok(())
    }
}

pub async fn add_video(db: &DatabaseConnection, input: VideoInput) -> Result<Uuid, ServiceError> {
    input.validate()?;
    let id = Uuid::new_v4();
    let now = Utc::now().into();
    let am = video::ActiveModel {
        id: Set(id),
        course_id: Set(input.course_id),
        chapter_id: Set(input.chapter_id),
        title: Set(input.title),
        video_source_id: Set(input.video_source_id),
        video_original_name: Set(input.video_original_name),
        sort: Set(input.sort),
        play_count: Set(0),
        is_free: Set(input.is_free),
        duration: Set(input.duration),
        status: Set(STATUS_EMPTY.to_string()),
        size: Set(input.size),
        version: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let inserted = video::Entity::insert(am).exec_without_returning(db).await?;
    ServiceError::ensure_affected(inserted, "add video failed")?;
    info!(video_id = %id, chapter_id = %input.chapter_id, "video_created");
    Ok(id)
}

pub async fn get_video(db: &DatabaseConnection, id: Uuid) -> Result<video::Model, ServiceError> {
    video::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("video"))
}

/// Overwrite editable fields. Counters, status and version are left alone.
pub async fn update_video(db: &DatabaseConnection, input: VideoInput) -> Result<(), ServiceError> {
    let id = input.id.ok_or_else(|| ServiceError::Validation("video id required".into()))?;
    input.validate()?;
    let am = video::ActiveModel {
        id: NotSet,
        course_id: Set(input.course_id),
        chapter_id: Set(input.chapter_id),
        title: Set(input.title),
        video_source_id: Set(input.video_source_id),
        video_original_name: Set(input.video_original_name),
        sort: Set(input.sort),
        is_free: Set(input.is_free),
        duration: Set(input.duration),
        size: Set(input.size),
        updated_at: Set(Utc::now().into()),
        ..Default::default()
    };
    let res = video::Entity::update_many()
        .set(am)
        .filter(video::Column::Id.eq(id))
        .exec(db)
        .await?;
    ServiceError::ensure_affected(res.rows_affected, "update video failed")?;
    Ok(())
}

pub async fn remove_video(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = video::Entity::delete_by_id(id).exec(db).await?;
    ServiceError::ensure_affected(res.rows_affected, "delete video failed")?;
    info!(video_id = %id, "video_removed");
    Ok(())
}

/// Delete every video of a course. Zero rows is fine: a course may have none.
pub async fn remove_videos_by_course<C>(conn: &C, course_id: Uuid) -> Result<u64, ServiceError>
where
    C: ConnectionTrait,
{
    let res = video::Entity::delete_many()
        .filter(video::Column::CourseId.eq(course_id))
        .exec(conn)
        .await?;
    debug!(course_id = %course_id, rows = res.rows_affected, "course_videos_removed");
    Ok(res.rows_affected)
}

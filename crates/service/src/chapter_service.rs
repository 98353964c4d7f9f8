use chrono::Utc;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use models::{chapter, video};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChapterInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub course_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub sort: i32,
}

/// Leaf of the course outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoNode {
    pub id: Uuid,
    pub title: String,
    pub is_free: bool,
    pub video_source_id: String,
}

/// A chapter with its videos, both ordered by `sort`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChapterNode {
    pub id: Uuid,
    pub title: String,
    pub children: Vec<VideoNode>,
}

pub async fn add_chapter(db: &DatabaseConnection, input: ChapterInput) -> Result<Uuid, ServiceError> {
    chapter::validate_title(&input.title)?;
    let id = Uuid::new_v4();
    let now = Utc::now().into();
    let am = chapter::ActiveModel {
        id: Set(id),
        course_id: Set(input.course_id),
        title: Set(input.title),
        sort: Set(input.sort),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let inserted = chapter::Entity::insert(am).exec_without_returning(db).await?;
    ServiceError::ensure_affected(inserted, "add chapter failed")?;
    info!(chapter_id = %id, course_id = %input.course_id, "chapter_created");
    Ok(id)
}

pub async fn get_chapter(db: &DatabaseConnection, id: Uuid) -> Result<chapter::Model, ServiceError> {
    chapter::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("chapter"))
}

pub async fn update_chapter(db: &DatabaseConnection, input: ChapterInput) -> Result<(), ServiceError> {
    let id = input.id.ok_or_else(|| ServiceError::Validation("chapter id required".into()))?;
    chapter::validate_title(&input.title)?;
    let am = chapter::ActiveModel {
        id: NotSet,
        course_id: Set(input.course_id),
        title: Set(input.title),
        sort: Set(input.sort),
        created_at: NotSet,
        updated_at: Set(Utc::now().into()),
    };
    let res = chapter::Entity::update_many()
        .set(am)
        .filter(chapter::Column::Id.eq(id))
        .exec(db)
        .await?;
    ServiceError::ensure_affected(res.rows_affected, "update chapter failed")?;
    Ok(())
}

/// Delete a chapter that no video references any more.
pub async fn remove_chapter(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let has_videos = video::Entity::find()
        .filter(video::Column::ChapterId.eq(id))
        .one(db)
        .await?
        .is_some();
    if has_videos {
        warn!(chapter_id = %id, "chapter_remove_refused");
        return Err(ServiceError::domain("chapter still has videos"));
    }
    let res = chapter::Entity::delete_by_id(id).exec(db).await?;
    ServiceError::ensure_affected(res.rows_affected, "delete chapter failed")?;
    info!(chapter_id = %id, "chapter_removed");
    Ok(())
}

/// Delete every chapter of a course. Run after its videos are gone.
pub async fn remove_chapters_by_course<C>(conn: &C, course_id: Uuid) -> Result<u64, ServiceError>
where
    C: ConnectionTrait,
{
    let res = chapter::Entity::delete_many()
        .filter(chapter::Column::CourseId.eq(course_id))
        .exec(conn)
        .await?;
    debug!(course_id = %course_id, rows = res.rows_affected, "course_chapters_removed");
    Ok(res.rows_affected)
}

/// Course outline: chapters with their videos.
pub async fn list_chapter_videos(db: &DatabaseConnection, course_id: Uuid) -> Result<Vec<ChapterNode>, ServiceError> {
    let chapters = chapter::Entity::find()
        .filter(chapter::Column::CourseId.eq(course_id))
        .order_by_asc(chapter::Column::Sort)
        .all(db)
        .await?;
    let videos = video::Entity::find()
        .filter(video::Column::CourseId.eq(course_id))
        .order_by_asc(video::Column::Sort)
        .all(db)
        .await?;
    Ok(build_chapter_tree(chapters, videos))
}

/// Attach videos to their chapters. Input order is kept; videos whose chapter
/// is not in `chapters` are dropped.
pub fn build_chapter_tree(chapters: Vec<chapter::Model>, videos: Vec<video::Model>) -> Vec<ChapterNode> {
    let mut nodes: Vec<ChapterNode> = chapters
        .into_iter()
        .map(|c| ChapterNode { id: c.id, title: c.title, children: Vec::new() })
        .collect();
    for v in videos {
        if let Some(node) = nodes.iter_mut().find(|n| n.id == v.chapter_id) {
            node.children.push(VideoNode {
                id: v.id,
                title: v.title,
                is_free: v.is_free,
                video_source_id: v.video_source_id,
            });
        }
    }
    nodes
}

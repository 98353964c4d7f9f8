//! Course lifecycle: the course row and its description are written together,
//! and deletion cascades video -> chapter -> description -> course.
//!
//! Every multi-statement operation runs in one transaction. Returning early
//! with an error drops the transaction, which rolls back all prior steps.

use chrono::Utc;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use models::{course, course_description, subject, teacher};
use crate::errors::ServiceError;
use crate::{chapter_service, video_service};

/// Course row fields merged with the description text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CourseInfo {
    /// Ignored on create; required on update.
    #[serde(default)]
    pub id: Option<Uuid>,
    pub teacher_id: Uuid,
    pub subject_id: Uuid,
    pub subject_parent_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub lesson_num: i32,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub description: String,
}

impl CourseInfo {
    fn validate(&self) -> Result<(), ServiceError> {
        course::validate_title(&self.title)?;
        course::validate_price(self.price)?;
        course::validate_lesson_num(self.lesson_num)?;
        Ok(())
    }

    fn merge(course: course::Model, description: Option<course_description::Model>) -> Self {
        Self {
            id: Some(course.id),
            teacher_id: course.teacher_id,
            subject_id: course.subject_id,
            subject_parent_id: course.subject_parent_id,
            title: course.title,
            price: course.price,
            lesson_num: course.lesson_num,
            cover: course.cover,
            description: description.map(|d| d.description).unwrap_or_default(),
        }
    }
}

/// Read model for the final confirmation page before publishing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoursePublishInfo {
    pub id: Uuid,
    pub title: String,
    pub cover: String,
    pub lesson_num: i32,
    pub price: i64,
    pub description: String,
    pub teacher_name: String,
    pub subject_level_one: String,
    pub subject_level_two: String,
}

/// Rows removed by each step of a course delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CourseRemoval {
    pub videos: u64,
    pub chapters: u64,
    pub descriptions: u64,
}

/// Insert course and description rows sharing one generated id.
#[instrument(skip(db, info), fields(title = %info.title))]
pub async fn save_course_info(db: &DatabaseConnection, info: CourseInfo) -> Result<Uuid, ServiceError> {
    info.validate()?;
    let id = Uuid::new_v4();
    let now = Utc::now().into();

    let txn = db.begin().await?;
    let course_row = course::ActiveModel {
        id: Set(id),
        teacher_id: Set(info.teacher_id),
        subject_id: Set(info.subject_id),
        subject_parent_id: Set(info.subject_parent_id),
        title: Set(info.title),
        price: Set(info.price),
        lesson_num: Set(info.lesson_num),
        cover: Set(info.cover),
        buy_count: Set(0),
        view_count: Set(0),
        version: Set(1),
        status: Set(course::CourseStatus::Draft),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let inserted = course::Entity::insert(course_row).exec_without_returning(&txn).await?;
    ServiceError::ensure_affected(inserted, "add course failed")?;

    let description_row = course_description::ActiveModel {
        id: Set(id),
        description: Set(info.description),
        created_at: Set(now),
        updated_at: Set(now),
    };
    course_description::Entity::insert(description_row).exec_without_returning(&txn).await?;
    txn.commit().await?;

    info!(course_id = %id, "course_created");
    Ok(id)
}

/// Course row and description merged into one record.
pub async fn get_course_info(db: &DatabaseConnection, course_id: Uuid) -> Result<CourseInfo, ServiceError> {
    let course = course::Entity::find_by_id(course_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("course"))?;
    let description = course_description::Entity::find_by_id(course_id).one(db).await?;
    if description.is_none() {
        warn!(course_id = %course_id, "course_description_missing");
    }
    Ok(CourseInfo::merge(course, description))
}

/// Overwrite both rows. Either write affecting zero rows fails the whole update.
#[instrument(skip(db, info), fields(course_id = ?info.id))]
pub async fn update_course_info(db: &DatabaseConnection, info: CourseInfo) -> Result<(), ServiceError> {
    let id = info.id.ok_or_else(|| ServiceError::Validation("course id required".into()))?;
    info.validate()?;
    let now = Utc::now();

    let txn = db.begin().await?;
    let course_row = course::ActiveModel {
        teacher_id: Set(info.teacher_id),
        subject_id: Set(info.subject_id),
        subject_parent_id: Set(info.subject_parent_id),
        title: Set(info.title),
        price: Set(info.price),
        lesson_num: Set(info.lesson_num),
        cover: Set(info.cover),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    let course_res = course::Entity::update_many()
        .set(course_row)
        .filter(course::Column::Id.eq(id))
        .exec(&txn)
        .await?;

    let description_row = course_description::ActiveModel {
        id: NotSet,
        description: Set(info.description),
        created_at: NotSet,
        updated_at: Set(now.into()),
    };
    let description_res = course_description::Entity::update_many()
        .set(description_row)
        .filter(course_description::Column::Id.eq(id))
        .exec(&txn)
        .await?;

    if course_res.rows_affected == 0 || description_res.rows_affected == 0 {
        return Err(ServiceError::domain("update course failed"));
    }
    txn.commit().await?;

    info!(course_id = %id, "course_updated");
    Ok(())
}

/// Delete a course and everything hanging off it, children first.
#[instrument(skip(db))]
pub async fn remove_course(db: &DatabaseConnection, course_id: Uuid) -> Result<CourseRemoval, ServiceError> {
    let txn = db.begin().await?;

    let videos = video_service::remove_videos_by_course(&txn, course_id).await?;
    let chapters = chapter_service::remove_chapters_by_course(&txn, course_id).await?;
    let descriptions = course_description::Entity::delete_by_id(course_id)
        .exec(&txn)
        .await?
        .rows_affected;
    let courses = course::Entity::delete_by_id(course_id).exec(&txn).await?.rows_affected;
    ServiceError::ensure_affected(courses, "delete course failed")?;
    txn.commit().await?;

    let removal = CourseRemoval { videos, chapters, descriptions };
    info!(
        course_id = %course_id,
        videos = removal.videos,
        chapters = removal.chapters,
        descriptions = removal.descriptions,
        "course_removed"
    );
    Ok(removal)
}

/// Mark a draft course as published.
pub async fn publish_course(db: &DatabaseConnection, course_id: Uuid) -> Result<(), ServiceError> {
    let res = course::Entity::update_many()
        .set(course::ActiveModel {
            status: Set(course::CourseStatus::Normal),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        })
        .filter(course::Column::Id.eq(course_id))
        .exec(db)
        .await?;
    ServiceError::ensure_affected(res.rows_affected, "publish course failed")?;
    info!(course_id = %course_id, "course_published");
    Ok(())
}

/// Course, description, teacher and both subject levels in one record.
/// Missing related rows show up as empty strings.
pub async fn get_publish_course_info(
    db: &DatabaseConnection,
    course_id: Uuid,
) -> Result<CoursePublishInfo, ServiceError> {
    let course = course::Entity::find_by_id(course_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("course"))?;
    let description = course_description::Entity::find_by_id(course_id).one(db).await?;
    let teacher = teacher::Entity::find_by_id(course.teacher_id).one(db).await?;
    let level_two = subject::Entity::find_by_id(course.subject_id).one(db).await?;
    let level_one = subject::Entity::find_by_id(course.subject_parent_id).one(db).await?;

    Ok(CoursePublishInfo {
        id: course.id,
        title: course.title,
        cover: course.cover,
        lesson_num: course.lesson_num,
        price: course.price,
        description: description.map(|d| d.description).unwrap_or_default(),
        teacher_name: teacher.map(|t| t.name).unwrap_or_default(),
        subject_level_one: level_one.map(|s| s.title).unwrap_or_default(),
        subject_level_two: level_two.map(|s| s.title).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        course_row, description_row, get_db, mock, rows, subject_row, teacher_row, transaction_endings,
    };

    fn info() -> CourseInfo {
        CourseInfo {
            id: None,
            teacher_id: Uuid::new_v4(),
            subject_id: Uuid::new_v4(),
            subject_parent_id: Uuid::new_v4(),
            title: "Rust in Practice".into(),
            price: 4900,
            lesson_num: 12,
            cover: String::new(),
            description: "<p>ownership and borrowing</p>".into(),
        }
    }

    #[tokio::test]
    async fn save_writes_course_then_description() -> Result<(), anyhow::Error> {
        let db = mock().append_exec_results([rows(1), rows(1)]).into_connection();
        let id = save_course_info(&db, info()).await?;
        assert!(!id.is_nil());
        assert_eq!(transaction_endings(db), ["COMMIT"]);
        Ok(())
    }

    #[tokio::test]
    async fn save_with_zero_course_rows_is_domain_error() {
        let db = mock().append_exec_results([rows(0)]).into_connection();
        let err = save_course_info(&db, info()).await.unwrap_err();
        match err {
            ServiceError::Domain { code, message } => {
                assert_eq!(code, 20001);
                assert_eq!(message, "add course failed");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transaction_endings(db), ["ROLLBACK"]);
    }

    #[tokio::test]
    async fn save_rejects_negative_price() {
        let db = mock().into_connection();
        let mut bad = info();
        bad.price = -1;
        assert!(matches!(save_course_info(&db, bad).await, Err(ServiceError::Model(_))));
    }

    #[tokio::test]
    async fn get_merges_course_and_description() -> Result<(), anyhow::Error> {
        let id = Uuid::new_v4();
        let course = course_row(id);
        let db = mock()
            .append_query_results([vec![course.clone()]])
            .append_query_results([vec![description_row(id, "all about lifetimes")]])
            .into_connection();

        let merged = get_course_info(&db, id).await?;
        assert_eq!(merged.id, Some(id));
        assert_eq!(merged.title, course.title);
        assert_eq!(merged.price, course.price);
        assert_eq!(merged.teacher_id, course.teacher_id);
        assert_eq!(merged.description, "all about lifetimes");
        Ok(())
    }

    #[tokio::test]
    async fn get_without_description_yields_empty_text() -> Result<(), anyhow::Error> {
        let id = Uuid::new_v4();
        let db = mock()
            .append_query_results([vec![course_row(id)]])
            .append_query_results([Vec::<course_description::Model>::new()])
            .into_connection();
        assert_eq!(get_course_info(&db, id).await?.description, "");
        Ok(())
    }

    #[tokio::test]
    async fn get_missing_course_is_domain_error() {
        let db = mock().append_query_results([Vec::<course::Model>::new()]).into_connection();
        let err = get_course_info(&db, Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.to_string(), "course not found");
    }

    #[tokio::test]
    async fn update_succeeds_when_both_rows_change() -> Result<(), anyhow::Error> {
        let db = mock().append_exec_results([rows(1), rows(1)]).into_connection();
        let mut input = info();
        input.id = Some(Uuid::new_v4());
        update_course_info(&db, input).await?;
        assert_eq!(transaction_endings(db), ["COMMIT"]);
        Ok(())
    }

    #[tokio::test]
    async fn update_fails_when_either_row_is_untouched() {
        for (course_rows, description_rows) in [(0, 1), (1, 0), (0, 0)] {
            let db = mock()
                .append_exec_results([rows(course_rows), rows(description_rows)])
                .into_connection();
            let mut input = info();
            input.id = Some(Uuid::new_v4());
            let err = update_course_info(&db, input).await.unwrap_err();
            assert!(
                matches!(&err, ServiceError::Domain { code: 20001, message } if message == "update course failed"),
                "course={course_rows} description={description_rows}: {err:?}"
            );
            assert_eq!(
                transaction_endings(db),
                ["ROLLBACK"],
                "course={course_rows} description={description_rows}"
            );
        }
    }

    #[tokio::test]
    async fn update_without_id_is_validation_error() {
        let db = mock().into_connection();
        assert!(matches!(update_course_info(&db, info()).await, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn remove_reports_each_cascade_step_in_order() -> Result<(), anyhow::Error> {
        // videos, chapters, description, course
        let db = mock()
            .append_exec_results([rows(5), rows(2), rows(1), rows(1)])
            .into_connection();
        let removal = remove_course(&db, Uuid::new_v4()).await?;
        assert_eq!(removal, CourseRemoval { videos: 5, chapters: 2, descriptions: 1 });
        assert_eq!(transaction_endings(db), ["COMMIT"]);
        Ok(())
    }

    #[tokio::test]
    async fn remove_fails_when_course_row_is_gone_even_if_children_were_deleted() {
        let db = mock()
            .append_exec_results([rows(3), rows(1), rows(1), rows(0)])
            .into_connection();
        let err = remove_course(&db, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(&err, ServiceError::Domain { code: 20001, message } if message == "delete course failed"));

        // all four deletes ran inside the transaction, which was rolled back
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let sql: Vec<&str> = log[0].statements().iter().map(|stmt| stmt.sql.as_str()).collect();
        assert_eq!(sql.first(), Some(&"BEGIN"));
        assert_eq!(sql.last(), Some(&"ROLLBACK"));
        assert_eq!(sql.iter().filter(|q| q.starts_with("DELETE")).count(), 4);
        assert!(!sql.contains(&"COMMIT"));
    }

    #[tokio::test]
    async fn publish_zero_rows_is_domain_error() {
        let db = mock().append_exec_results([rows(0)]).into_connection();
        let err = publish_course(&db, Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.to_string(), "publish course failed");
    }

    #[tokio::test]
    async fn publish_info_joins_related_rows() -> Result<(), anyhow::Error> {
        let id = Uuid::new_v4();
        let course = course_row(id);
        let db = mock()
            .append_query_results([vec![course.clone()]])
            .append_query_results([vec![description_row(id, "desc")]])
            .append_query_results([vec![teacher_row("Ada")]])
            .append_query_results([vec![subject_row("Backend", None, 0)]])
            .append_query_results([vec![subject_row("Programming", None, 0)]])
            .into_connection();

        let publish = get_publish_course_info(&db, id).await?;
        assert_eq!(publish.id, id);
        assert_eq!(publish.description, "desc");
        assert_eq!(publish.teacher_name, "Ada");
        assert_eq!(publish.subject_level_two, "Backend");
        assert_eq!(publish.subject_level_one, "Programming");
        Ok(())
    }

    #[tokio::test]
    async fn publish_info_tolerates_missing_relations() -> Result<(), anyhow::Error> {
        let id = Uuid::new_v4();
        let db = mock()
            .append_query_results([vec![course_row(id)]])
            .append_query_results([Vec::<course_description::Model>::new()])
            .append_query_results([Vec::<teacher::Model>::new()])
            .append_query_results([Vec::<subject::Model>::new()])
            .append_query_results([Vec::<subject::Model>::new()])
            .into_connection();

        let publish = get_publish_course_info(&db, id).await?;
        assert_eq!(publish.teacher_name, "");
        assert_eq!(publish.subject_level_one, "");
        Ok(())
    }

    #[tokio::test]
    async fn course_lifecycle_live() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };

        let created = info();
        let id = save_course_info(&db, created.clone()).await?;
        let read = get_course_info(&db, id).await?;
        assert_eq!(read.title, created.title);
        assert_eq!(read.description, created.description);

        let mut changed = read.clone();
        changed.title = "Rust in Depth".into();
        changed.description = "updated".into();
        update_course_info(&db, changed).await?;
        let read = get_course_info(&db, id).await?;
        assert_eq!(read.title, "Rust in Depth");
        assert_eq!(read.description, "updated");

        let removal = remove_course(&db, id).await?;
        assert_eq!(removal.descriptions, 1);
        assert!(get_course_info(&db, id).await.is_err());

        // second delete finds no course row; nothing else is touched
        assert!(matches!(remove_course(&db, id).await, Err(ServiceError::Domain { .. })));
        Ok(())
    }
}

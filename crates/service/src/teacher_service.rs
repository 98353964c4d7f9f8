use chrono::Utc;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use models::teacher;
use crate::errors::ServiceError;

/// Teacher fields accepted on add and update; `id` is required for update.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeacherInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub career: String,
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub sort: i32,
}

fn default_level() -> i32 { teacher::LEVEL_SENIOR }

impl TeacherInput {
    fn validate(&self) -> Result<(), ServiceError> {
        teacher::validate_name(&self.name)?;
        teacher::validate_level(self.level)?;
        Ok(())
    }
}

/// All teacher rows, unfiltered and unsorted. An empty table is an empty list.
pub async fn list_teachers(db: &DatabaseConnection) -> Result<Vec<teacher::Model>, ServiceError> {
    Ok(teacher::Entity::find().all(db).await?)
}

/// Get teacher by id.
pub async fn get_teacher(db: &DatabaseConnection, id: Uuid) -> Result<teacher::Model, ServiceError> {
    teacher::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("teacher"))
}

/// Create a teacher and return its generated id.
pub async fn add_teacher(db: &DatabaseConnection, input: TeacherInput) -> Result<Uuid, ServiceError> {
    input.validate()?;
    let id = Uuid::new_v4();
    let now = Utc::now().into();
    let am = teacher::ActiveModel {
        id: Set(id),
        name: Set(input.name),
        intro: Set(input.intro),
        career: Set(input.career),
        level: Set(input.level),
        avatar: Set(input.avatar),
        sort: Set(input.sort),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let inserted = teacher::Entity::insert(am).exec_without_returning(db).await?;
    ServiceError::ensure_affected(inserted, "add teacher failed")?;
    info!(teacher_id = %id, "teacher_created");
    Ok(id)
}

/// Overwrite a teacher row.
pub async fn update_teacher(db: &DatabaseConnection, input: TeacherInput) -> Result<(), ServiceError> {
    let id = input.id.ok_or_else(|| ServiceError::Validation("teacher id required".into()))?;
    input.validate()?;
    let am = teacher::ActiveModel {
        id: NotSet,
        name: Set(input.name),
        intro: Set(input.intro),
        career: Set(input.career),
        level: Set(input.level),
        avatar: Set(input.avatar),
        sort: Set(input.sort),
        created_at: NotSet,
        updated_at: Set(Utc::now().into()),
    };
    let res = teacher::Entity::update_many()
        .set(am)
        .filter(teacher::Column::Id.eq(id))
        .exec(db)
        .await?;
    ServiceError::ensure_affected(res.rows_affected, "update teacher failed")?;
    info!(teacher_id = %id, "teacher_updated");
    Ok(())
}

/// Hard delete teacher.
pub async fn remove_teacher(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = teacher::Entity::delete_by_id(id).exec(db).await?;
    ServiceError::ensure_affected(res.rows_affected, "delete teacher failed")?;
    info!(teacher_id = %id, "teacher_removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, mock, rows, teacher_row};

    fn input(name: &str) -> TeacherInput {
        TeacherInput {
            id: None,
            name: name.into(),
            intro: "systems".into(),
            career: "ten years".into(),
            level: teacher::LEVEL_CHIEF,
            avatar: String::new(),
            sort: 1,
        }
    }

    #[tokio::test]
    async fn list_returns_every_row() -> Result<(), anyhow::Error> {
        let db = mock()
            .append_query_results([vec![teacher_row("Ada"), teacher_row("Grace")]])
            .into_connection();
        let all = list_teachers(&db).await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].name, "Grace");
        Ok(())
    }

    #[tokio::test]
    async fn list_of_empty_table_is_empty() -> Result<(), anyhow::Error> {
        let db = mock().append_query_results([Vec::<teacher::Model>::new()]).into_connection();
        assert!(list_teachers(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn add_with_zero_rows_is_domain_error() {
        let db = mock().append_exec_results([rows(0)]).into_connection();
        let err = add_teacher(&db, input("Ada")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Domain { code: 20001, .. }));
    }

    #[tokio::test]
    async fn add_rejects_unknown_level_before_touching_db() {
        let db = mock().into_connection();
        let mut bad = input("Ada");
        bad.level = 9;
        let err = add_teacher(&db, bad).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
    }

    #[tokio::test]
    async fn update_requires_id_and_effect() {
        let db = mock().append_exec_results([rows(0)]).into_connection();
        let err = update_teacher(&db, input("Ada")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let mut with_id = input("Ada");
        with_id.id = Some(Uuid::new_v4());
        let err = update_teacher(&db, with_id).await.unwrap_err();
        assert_eq!(err.to_string(), "update teacher failed");
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let db = mock().append_query_results([Vec::<teacher::Model>::new()]).into_connection();
        let err = get_teacher(&db, Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.to_string(), "teacher not found");
    }

    #[tokio::test]
    async fn teacher_crud_live() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };

        let id = add_teacher(&db, input("Live Teacher")).await?;
        let found = get_teacher(&db, id).await?;
        assert_eq!(found.level, teacher::LEVEL_CHIEF);

        let mut changed = input("Renamed");
        changed.id = Some(id);
        update_teacher(&db, changed).await?;
        assert_eq!(get_teacher(&db, id).await?.name, "Renamed");

        remove_teacher(&db, id).await?;
        assert!(remove_teacher(&db, id).await.is_err());
        Ok(())
    }
}

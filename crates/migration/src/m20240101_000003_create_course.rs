//! Create `edu_course` table.
//!
//! Teacher and subject ids are plain references; the description, chapter and
//! video tables hang off this one with restricting foreign keys.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EduCourse::Table)
                    .if_not_exists()
                    .col(uuid(EduCourse::Id).primary_key())
                    .col(uuid(EduCourse::TeacherId).not_null())
                    .col(uuid(EduCourse::SubjectId).not_null())
                    .col(uuid(EduCourse::SubjectParentId).not_null())
                    .col(string_len(EduCourse::Title, 128).not_null())
                    .col(big_integer(EduCourse::Price).default(0))
                    .col(integer(EduCourse::LessonNum).default(0))
                    .col(string_len(EduCourse::Cover, 512).default(""))
                    .col(big_integer(EduCourse::BuyCount).default(0))
                    .col(big_integer(EduCourse::ViewCount).default(0))
                    .col(big_integer(EduCourse::Version).default(1))
                    .col(string_len(EduCourse::Status, 16).default("Draft"))
                    .col(timestamp_with_time_zone(EduCourse::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(EduCourse::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EduCourse::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EduCourse {
    Table,
    Id,
    TeacherId,
    SubjectId,
    SubjectParentId,
    Title,
    Price,
    LessonNum,
    Cover,
    BuyCount,
    ViewCount,
    Version,
    Status,
    CreatedAt,
    UpdatedAt,
}

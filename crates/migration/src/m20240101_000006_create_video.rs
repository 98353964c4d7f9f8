//! Create `edu_video` with FKs to both `edu_chapter` and `edu_course`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EduVideo::Table)
                    .if_not_exists()
                    .col(uuid(EduVideo::Id).primary_key())
                    .col(uuid(EduVideo::CourseId).not_null())
                    .col(uuid(EduVideo::ChapterId).not_null())
                    .col(string_len(EduVideo::Title, 128).not_null())
                    .col(string_len(EduVideo::VideoSourceId, 128).default(""))
                    .col(string_len(EduVideo::VideoOriginalName, 256).default(""))
                    .col(integer(EduVideo::Sort).default(0))
                    .col(big_integer(EduVideo::PlayCount).default(0))
                    .col(boolean(EduVideo::IsFree).default(false))
                    .col(double(EduVideo::Duration).default(0.0))
                    .col(string_len(EduVideo::Status, 16).default("Empty"))
                    .col(big_integer(EduVideo::Size).default(0))
                    .col(big_integer(EduVideo::Version).default(1))
                    .col(timestamp_with_time_zone(EduVideo::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(EduVideo::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_video_chapter")
                            .from(EduVideo::Table, EduVideo::ChapterId)
                            .to(EduChapter::Table, EduChapter::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_video_course")
                            .from(EduVideo::Table, EduVideo::CourseId)
                            .to(EduCourse::Table, EduCourse::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EduVideo::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EduVideo {
    Table,
    Id,
    CourseId,
    ChapterId,
    Title,
    VideoSourceId,
    VideoOriginalName,
    Sort,
    PlayCount,
    IsFree,
    Duration,
    Status,
    Size,
    Version,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EduChapter { Table, Id }

#[derive(DeriveIden)]
enum EduCourse { Table, Id }

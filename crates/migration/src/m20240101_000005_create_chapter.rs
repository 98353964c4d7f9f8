use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EduChapter::Table)
                    .if_not_exists()
                    .col(uuid(EduChapter::Id).primary_key())
                    .col(uuid(EduChapter::CourseId).not_null())
                    .col(string_len(EduChapter::Title, 128).not_null())
                    .col(integer(EduChapter::Sort).default(0))
                    .col(timestamp_with_time_zone(EduChapter::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(EduChapter::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chapter_course")
                            .from(EduChapter::Table, EduChapter::CourseId)
                            .to(EduCourse::Table, EduCourse::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EduChapter::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EduChapter { Table, Id, CourseId, Title, Sort, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum EduCourse { Table, Id }

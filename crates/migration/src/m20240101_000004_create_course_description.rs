//! Create `edu_course_description`, keyed by the owning course id.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EduCourseDescription::Table)
                    .if_not_exists()
                    .col(uuid(EduCourseDescription::Id).primary_key())
                    .col(text(EduCourseDescription::Description).default(""))
                    .col(timestamp_with_time_zone(EduCourseDescription::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(EduCourseDescription::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_description_course")
                            .from(EduCourseDescription::Table, EduCourseDescription::Id)
                            .to(EduCourse::Table, EduCourse::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EduCourseDescription::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EduCourseDescription { Table, Id, Description, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum EduCourse { Table, Id }

//! Create `edu_teacher` table.
//!
//! Standalone; courses refer to teachers by id without a foreign key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EduTeacher::Table)
                    .if_not_exists()
                    .col(uuid(EduTeacher::Id).primary_key())
                    .col(string_len(EduTeacher::Name, 64).not_null())
                    .col(string_len(EduTeacher::Intro, 512).default(""))
                    .col(string_len(EduTeacher::Career, 512).default(""))
                    .col(integer(EduTeacher::Level).default(1))
                    .col(string_len(EduTeacher::Avatar, 512).default(""))
                    .col(integer(EduTeacher::Sort).default(0))
                    .col(timestamp_with_time_zone(EduTeacher::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(EduTeacher::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EduTeacher::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EduTeacher { Table, Id, Name, Intro, Career, Level, Avatar, Sort, CreatedAt, UpdatedAt }

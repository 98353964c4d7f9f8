//! Create `edu_subject` table: two-level course categories.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EduSubject::Table)
                    .if_not_exists()
                    .col(uuid(EduSubject::Id).primary_key())
                    .col(string_len(EduSubject::Title, 128).not_null())
                    .col(uuid_null(EduSubject::ParentId))
                    .col(integer(EduSubject::Sort).default(0))
                    .col(timestamp_with_time_zone(EduSubject::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(EduSubject::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subject_parent")
                            .from(EduSubject::Table, EduSubject::ParentId)
                            .to(EduSubject::Table, EduSubject::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EduSubject::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EduSubject { Table, Id, Title, ParentId, Sort, CreatedAt, UpdatedAt }

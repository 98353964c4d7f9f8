use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Chapter: lookups and cascade deletes by course
        manager
            .create_index(
                Index::create()
                    .name("idx_chapter_course")
                    .table(EduChapter::Table)
                    .col(EduChapter::CourseId)
                    .to_owned(),
            )
            .await?;

        // Video: cascade deletes by course, tree building by chapter
        manager
            .create_index(
                Index::create()
                    .name("idx_video_course")
                    .table(EduVideo::Table)
                    .col(EduVideo::CourseId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_video_chapter")
                    .table(EduVideo::Table)
                    .col(EduVideo::ChapterId)
                    .to_owned(),
            )
            .await?;

        // Course: front listing filters
        manager
            .create_index(
                Index::create()
                    .name("idx_course_subject")
                    .table(EduCourse::Table)
                    .col(EduCourse::SubjectParentId)
                    .col(EduCourse::SubjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_course_subject").table(EduCourse::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_video_chapter").table(EduVideo::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_video_course").table(EduVideo::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_chapter_course").table(EduChapter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EduChapter { Table, CourseId }

#[derive(DeriveIden)]
enum EduVideo { Table, CourseId, ChapterId }

#[derive(DeriveIden)]
enum EduCourse { Table, SubjectParentId, SubjectId }

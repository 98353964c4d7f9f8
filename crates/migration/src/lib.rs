//! Migrator registering the edu_* tables parent-first, so that restricting
//! foreign keys always point at an existing table. Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_teacher;
mod m20240101_000002_create_subject;
mod m20240101_000003_create_course;
mod m20240101_000004_create_course_description;
mod m20240101_000005_create_chapter;
mod m20240101_000006_create_video;
mod m20240101_000007_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_teacher::Migration),
            Box::new(m20240101_000002_create_subject::Migration),
            Box::new(m20240101_000003_create_course::Migration),
            Box::new(m20240101_000004_create_course_description::Migration),
            Box::new(m20240101_000005_create_chapter::Migration),
            Box::new(m20240101_000006_create_video::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000007_add_indexes::Migration),
        ]
    }
}

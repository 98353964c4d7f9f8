#![cfg(test)]
use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use tokio::sync::OnceCell;
use uuid::Uuid;

use configs::DatabaseConfig;
use models::db::connect_with_config;
use models::{chapter, course, course_description, subject, teacher, video};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Live database for integration tests; `None` when skipped or unreachable.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return None;
    }
    let cfg = DatabaseConfig::from_env();
    let migrate_cfg = cfg.clone();
    let migrated = *MIGRATED
        .get_or_init(|| async move {
            match connect_with_config(&migrate_cfg).await {
                Ok(db) => migration::Migrator::up(&db, None).await.is_ok(),
                Err(_) => false,
            }
        })
        .await;
    if !migrated {
        return None;
    }
    connect_with_config(&cfg).await.ok()
}

pub fn mock() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

/// Last statement of each transaction the mock recorded: `COMMIT` or
/// `ROLLBACK` for explicit transactions.
pub fn transaction_endings(db: DatabaseConnection) -> Vec<String> {
    db.into_transaction_log()
        .iter()
        .filter_map(|t| t.statements().last().map(|stmt| stmt.sql.clone()))
        .collect()
}

pub fn rows(n: u64) -> MockExecResult {
    MockExecResult { last_insert_id: 0, rows_affected: n }
}

pub fn course_row(id: Uuid) -> course::Model {
    let now = Utc::now().into();
    course::Model {
        id,
        teacher_id: Uuid::new_v4(),
        subject_id: Uuid::new_v4(),
        subject_parent_id: Uuid::new_v4(),
        title: "Rust in Practice".into(),
        price: 4900,
        lesson_num: 12,
        cover: "https://cdn.example.com/rust.png".into(),
        buy_count: 10,
        view_count: 100,
        version: 1,
        status: course::CourseStatus::Draft,
        created_at: now,
        updated_at: now,
    }
}

pub fn description_row(id: Uuid, text: &str) -> course_description::Model {
    let now = Utc::now().into();
    course_description::Model { id, description: text.into(), created_at: now, updated_at: now }
}

pub fn teacher_row(name: &str) -> teacher::Model {
    let now = Utc::now().into();
    teacher::Model {
        id: Uuid::new_v4(),
        name: name.into(),
        intro: String::new(),
        career: String::new(),
        level: teacher::LEVEL_SENIOR,
        avatar: String::new(),
        sort: 0,
        created_at: now,
        updated_at: now,
    }
}

pub fn subject_row(title: &str, parent_id: Option<Uuid>, sort: i32) -> subject::Model {
    let now = Utc::now().into();
    subject::Model { id: Uuid::new_v4(), title: title.into(), parent_id, sort, created_at: now, updated_at: now }
}

pub fn chapter_row(course_id: Uuid, title: &str, sort: i32) -> chapter::Model {
    let now = Utc::now().into();
    chapter::Model { id: Uuid::new_v4(), course_id, title: title.into(), sort, created_at: now, updated_at: now }
}

pub fn video_row(course_id: Uuid, chapter_id: Uuid, title: &str, sort: i32) -> video::Model {
    let now = Utc::now().into();
    video::Model {
        id: Uuid::new_v4(),
        course_id,
        chapter_id,
        title: title.into(),
        video_source_id: String::new(),
        video_original_name: String::new(),
        sort,
        play_count: 0,
        is_free: false,
        duration: 0.0,
        status: "Empty".into(),
        size: 0,
        version: 1,
        created_at: now,
        updated_at: now,
    }
}

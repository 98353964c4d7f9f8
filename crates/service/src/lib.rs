//! Service layer for the course platform, on top of the `models` entities.
//! - Each operation takes a `DatabaseConnection` and returns `ServiceError`.
//! - Multi-table writes run in a single transaction.
//! - Zero-effect writes surface as `ServiceError::Domain` with code 20001.

pub mod errors;
pub mod pagination;
pub mod teacher_service;
pub mod course_service;
pub mod course_front_service;
pub mod chapter_service;
pub mod video_service;
pub mod subject_service;
#[cfg(test)]
pub mod test_support;

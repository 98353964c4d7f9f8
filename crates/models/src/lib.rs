//! SeaORM entities for the education platform schema.
//!
//! Ownership is by foreign-key id only: description, chapter and video rows
//! belong to a course, and videos additionally belong to a chapter.

pub mod errors;
pub mod db;
pub mod teacher;
pub mod subject;
pub mod course;
pub mod course_description;
pub mod chapter;
pub mod video;

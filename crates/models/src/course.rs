use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, Default)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CourseStatus {
    #[default]
    #[sea_orm(string_value = "Draft")]
    Draft,
    #[sea_orm(string_value = "Normal")]
    Normal,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "edu_course")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub subject_id: Uuid,
    pub subject_parent_id: Uuid,
    pub title: String,
    /// Minor currency units.
    pub price: i64,
    pub lesson_num: i32,
    pub cover: String,
    pub buy_count: i64,
    pub view_count: i64,
    pub version: i64,
    pub status: CourseStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::course_description::Entity")]
    Description,
    #[sea_orm(has_many = "super::chapter::Entity")]
    Chapters,
    #[sea_orm(has_many = "super::video::Entity")]
    Videos,
}

impl Related<super::course_description::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Description.def()
    }
}

impl Related<super::chapter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chapters.def()
    }
}

impl Related<super::video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Videos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.trim().is_empty() {
        return Err(ModelError::Validation("course title required".into()));
    }
    Ok(())
}

pub fn validate_price(price: i64) -> Result<(), ModelError> {
    if price < 0 {
        return Err(ModelError::Validation("price must be >= 0".into()));
    }
    Ok(())
}

pub fn validate_lesson_num(lesson_num: i32) -> Result<(), ModelError> {
    if lesson_num < 0 {
        return Err(ModelError::Validation("lesson_num must be >= 0".into()));
    }
    Ok(())
}

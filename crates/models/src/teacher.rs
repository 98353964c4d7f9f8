use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "edu_teacher")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub intro: String,
    pub career: String,
    /// 1 = senior lecturer, 2 = chief lecturer
    pub level: i32,
    pub avatar: String,
    pub sort: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const LEVEL_SENIOR: i32 = 1;
pub const LEVEL_CHIEF: i32 = 2;

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("teacher name required".into()));
    }
    if name.chars().count() > 64 {
        return Err(ModelError::Validation("teacher name too long (<=64)".into()));
    }
    Ok(())
}

pub fn validate_level(level: i32) -> Result<(), ModelError> {
    match level {
        LEVEL_SENIOR | LEVEL_CHIEF => Ok(()),
        other => Err(ModelError::Validation(format!("unknown teacher level {other}"))),
    }
}

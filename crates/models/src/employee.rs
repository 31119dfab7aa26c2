use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};
use crate::{project, project_employee};

pub const NAME_MAX_LEN: usize = 255;
pub const ROLE_MAX_LEN: usize = 255;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { ProjectEmployee }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ProjectEmployee => Entity::has_many(project_employee::Entity).into(),
        }
    }
}

impl Related<project_employee::Entity> for Entity {
    fn to() -> RelationDef { Relation::ProjectEmployee.def() }
}

impl Related<project::Entity> for Entity {
    fn to() -> RelationDef { project_employee::Relation::Project.def() }

    fn via() -> Option<RelationDef> {
        Some(project_employee::Relation::Employee.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    errors::check_len("name", name, NAME_MAX_LEN)
}

pub fn validate_role(role: &str) -> Result<(), ModelError> {
    errors::check_len("role", role, ROLE_MAX_LEN)
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, role: &str) -> Result<Model, ModelError> {
    errors::require("name", name)?;
    errors::require("role", role)?;
    validate_name(name)?;
    validate_role(role)?;
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        role: Set(role.to_string()),
    };
    Ok(am.insert(db).await?)
}

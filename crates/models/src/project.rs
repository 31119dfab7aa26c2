use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};
use crate::{employee, project_employee};

pub const NAME_MAX_LEN: usize = 255;
pub const DESCRIPTION_MAX_LEN: usize = 500;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
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

impl Related<employee::Entity> for Entity {
    fn to() -> RelationDef { project_employee::Relation::Employee.def() }

    fn via() -> Option<RelationDef> {
        Some(project_employee::Relation::Project.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    errors::check_len("name", name, NAME_MAX_LEN)
}

pub fn validate_description(description: &str) -> Result<(), ModelError> {
    errors::check_len("description", description, DESCRIPTION_MAX_LEN)
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    name: &str,
    description: Option<&str>,
) -> Result<Model, ModelError> {
    errors::require("name", name)?;
    validate_name(name)?;
    if let Some(d) = description {
        validate_description(d)?;
    }
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(description.map(str::to_string)),
    };
    Ok(am.insert(db).await?)
}

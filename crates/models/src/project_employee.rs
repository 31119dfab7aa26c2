//! Association rows linking projects and employees.
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{ForeignKeyAction, OnConflict};
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{employee, project};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub project_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Project, Employee }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Project => Entity::belongs_to(project::Entity)
                .from(Column::ProjectId)
                .to(project::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Employee => Entity::belongs_to(employee::Entity)
                .from(Column::EmployeeId)
                .to(employee::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<project::Entity> for Entity {
    fn to() -> RelationDef { Relation::Project.def() }
}

impl Related<employee::Entity> for Entity {
    fn to() -> RelationDef { Relation::Employee.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert the pair unless it already exists. Returns `true` when a new row was written.
pub async fn link<C: ConnectionTrait>(db: &C, project_id: i32, employee_id: i32) -> Result<bool, ModelError> {
    let am = ActiveModel {
        project_id: Set(project_id),
        employee_id: Set(employee_id),
    };
    let inserted = Entity::insert(am)
        .on_conflict(
            OnConflict::columns([Column::ProjectId, Column::EmployeeId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    Ok(inserted > 0)
}

pub async fn unlink_employee<C: ConnectionTrait>(db: &C, employee_id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_many()
        .filter(Column::EmployeeId.eq(employee_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

pub async fn unlink_project<C: ConnectionTrait>(db: &C, project_id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_many()
        .filter(Column::ProjectId.eq(project_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait};
use tracing::{info, instrument};

use models::{employee, project, project_employee};
use crate::domain::AssignInput;
use crate::errors::ServiceError;

/// Link an employee to a project.
///
/// Both ids are required (`0` counts as missing) and both rows must exist.
/// Assigning a pair that is already linked succeeds; the returned flag tells
/// whether a row was added.
#[instrument(skip(db))]
pub async fn assign_employee_to_project(db: &DatabaseConnection, input: AssignInput) -> Result<bool, ServiceError> {
    let given = |id: Option<i32>| id.filter(|id| *id != 0);
    let (Some(project_id), Some(employee_id)) = (given(input.project_id), given(input.employee_id)) else {
        return Err(ServiceError::Validation("Project ID and Employee ID are required".into()));
    };
    let txn = db.begin().await?;
    let project = project::Entity::find_by_id(project_id).one(&txn).await?;
    let employee = employee::Entity::find_by_id(employee_id).one(&txn).await?;
    if project.is_none() || employee.is_none() {
        return Err(ServiceError::NotFound("Project or Employee not found".into()));
    }
    let created = project_employee::link(&txn, project_id, employee_id).await?;
    txn.commit().await?;
    info!(project_id, employee_id, created, "assigned employee to project");
    Ok(created)
}

/// Every association row, ordered by project then employee.
pub async fn list_assignments(db: &DatabaseConnection) -> Result<Vec<project_employee::Model>, ServiceError> {
    let rows = project_employee::Entity::find()
        .order_by_asc(project_employee::Column::ProjectId)
        .order_by_asc(project_employee::Column::EmployeeId)
        .all(db)
        .await?;
    Ok(rows)
}

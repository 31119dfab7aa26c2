use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{info, instrument};

use models::{employee, project, project_employee};
use crate::domain::{non_empty, CreateEmployeeInput, EmployeeWithProjects, PatchEmployeeInput, UpdateEmployeeInput};
use crate::errors::ServiceError;

async fn find_employee<C: ConnectionTrait>(db: &C, id: i32) -> Result<employee::Model, ServiceError> {
    employee::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Employee"))
}

async fn save<C: ConnectionTrait>(
    db: &C,
    am: employee::ActiveModel,
    current: employee::Model,
) -> Result<employee::Model, ServiceError> {
    if !am.is_changed() {
        return Ok(current);
    }
    Ok(am.update(db).await?)
}

/// Create an employee. Both `name` and `role` must be present and non-empty.
#[instrument(skip(db, input))]
pub async fn create_employee(db: &DatabaseConnection, input: CreateEmployeeInput) -> Result<employee::Model, ServiceError> {
    let (Some(name), Some(role)) = (non_empty(&input.name), non_empty(&input.role)) else {
        return Err(ServiceError::Validation("Name and role are required".into()));
    };
    let txn = db.begin().await?;
    let created = employee::create(&txn, name, role).await?;
    txn.commit().await?;
    info!(employee_id = created.id, "created employee");
    Ok(created)
}

/// List every employee with the names of the projects it is assigned to.
pub async fn list_employees(db: &DatabaseConnection) -> Result<Vec<EmployeeWithProjects>, ServiceError> {
    let employees = employee::Entity::find()
        .order_by_asc(employee::Column::Id)
        .all(db)
        .await?;
    let projects = employees
        .load_many_to_many(project::Entity, project_employee::Entity, db)
        .await?;
    Ok(employees
        .into_iter()
        .zip(projects)
        .map(|(e, mut ps)| {
            ps.sort_by_key(|p| p.id);
            EmployeeWithProjects::new(e, ps)
        })
        .collect())
}

/// Full update: only non-empty values overwrite the stored ones.
#[instrument(skip(db, input), fields(employee_id = id))]
pub async fn update_employee(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateEmployeeInput,
) -> Result<employee::Model, ServiceError> {
    let txn = db.begin().await?;
    let current = find_employee(&txn, id).await?;
    let mut am: employee::ActiveModel = current.clone().into();
    if let Some(name) = non_empty(&input.name) {
        employee::validate_name(name)?;
        am.name = Set(name.to_string());
    }
    if let Some(role) = non_empty(&input.role) {
        employee::validate_role(role)?;
        am.role = Set(role.to_string());
    }
    let updated = save(&txn, am, current).await?;
    txn.commit().await?;
    info!("updated employee");
    Ok(updated)
}

/// Partial update: every key present in the body overwrites, even `""`.
#[instrument(skip(db, input), fields(employee_id = id))]
pub async fn patch_employee(
    db: &DatabaseConnection,
    id: i32,
    input: PatchEmployeeInput,
) -> Result<employee::Model, ServiceError> {
    let txn = db.begin().await?;
    let current = find_employee(&txn, id).await?;
    let mut am: employee::ActiveModel = current.clone().into();
    if let Some(name) = input.name {
        let name = name.ok_or_else(|| ServiceError::Validation("name cannot be null".into()))?;
        employee::validate_name(&name)?;
        am.name = Set(name);
    }
    if let Some(role) = input.role {
        let role = role.ok_or_else(|| ServiceError::Validation("role cannot be null".into()))?;
        employee::validate_role(&role)?;
        am.role = Set(role);
    }
    let updated = save(&txn, am, current).await?;
    txn.commit().await?;
    info!("patched employee");
    Ok(updated)
}

/// Delete an employee together with its project assignments.
#[instrument(skip(db), fields(employee_id = id))]
pub async fn delete_employee(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    find_employee(&txn, id).await?;
    let unlinked = project_employee::unlink_employee(&txn, id).await?;
    employee::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    info!(unlinked, "deleted employee");
    Ok(())
}

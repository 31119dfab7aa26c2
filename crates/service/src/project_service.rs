use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{info, instrument};

use models::{employee, project, project_employee};
use crate::domain::{non_empty, CreateProjectInput, PatchProjectInput, ProjectWithEmployees, UpdateProjectInput};
use crate::errors::ServiceError;

async fn find_project<C: ConnectionTrait>(db: &C, id: i32) -> Result<project::Model, ServiceError> {
    project::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Project"))
}

async fn save<C: ConnectionTrait>(
    db: &C,
    am: project::ActiveModel,
    current: project::Model,
) -> Result<project::Model, ServiceError> {
    if !am.is_changed() {
        return Ok(current);
    }
    Ok(am.update(db).await?)
}

/// Create a project. `name` is required, `description` is stored as given.
#[instrument(skip(db, input))]
pub async fn create_project(db: &DatabaseConnection, input: CreateProjectInput) -> Result<project::Model, ServiceError> {
    let Some(name) = non_empty(&input.name) else {
        return Err(ServiceError::Validation("Name is required".into()));
    };
    let txn = db.begin().await?;
    let created = project::create(&txn, name, input.description.as_deref()).await?;
    txn.commit().await?;
    info!(project_id = created.id, "created project");
    Ok(created)
}

/// List every project with the names of its assigned employees.
pub async fn list_projects(db: &DatabaseConnection) -> Result<Vec<ProjectWithEmployees>, ServiceError> {
    let projects = project::Entity::find()
        .order_by_asc(project::Column::Id)
        .all(db)
        .await?;
    let employees = projects
        .load_many_to_many(employee::Entity, project_employee::Entity, db)
        .await?;
    Ok(projects
        .into_iter()
        .zip(employees)
        .map(|(p, mut es)| {
            es.sort_by_key(|e| e.id);
            ProjectWithEmployees::new(p, es)
        })
        .collect())
}

/// Full update: only non-empty values overwrite the stored ones.
#[instrument(skip(db, input), fields(project_id = id))]
pub async fn update_project(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateProjectInput,
) -> Result<project::Model, ServiceError> {
    let txn = db.begin().await?;
    let current = find_project(&txn, id).await?;
    let mut am: project::ActiveModel = current.clone().into();
    if let Some(name) = non_empty(&input.name) {
        project::validate_name(name)?;
        am.name = Set(name.to_string());
    }
    if let Some(description) = non_empty(&input.description) {
        project::validate_description(description)?;
        am.description = Set(Some(description.to_string()));
    }
    let updated = save(&txn, am, current).await?;
    txn.commit().await?;
    info!("updated project");
    Ok(updated)
}

/// Partial update: every key present in the body overwrites.
/// A `null` description clears it; a `null` name is rejected.
#[instrument(skip(db, input), fields(project_id = id))]
pub async fn patch_project(
    db: &DatabaseConnection,
    id: i32,
    input: PatchProjectInput,
) -> Result<project::Model, ServiceError> {
    let txn = db.begin().await?;
    let current = find_project(&txn, id).await?;
    let mut am: project::ActiveModel = current.clone().into();
    if let Some(name) = input.name {
        let name = name.ok_or_else(|| ServiceError::Validation("name cannot be null".into()))?;
        project::validate_name(&name)?;
        am.name = Set(name);
    }
    if let Some(description) = input.description {
        if let Some(d) = &description {
            project::validate_description(d)?;
        }
        am.description = Set(description);
    }
    let updated = save(&txn, am, current).await?;
    txn.commit().await?;
    info!("patched project");
    Ok(updated)
}

/// Delete a project together with its employee assignments.
#[instrument(skip(db), fields(project_id = id))]
pub async fn delete_project(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    find_project(&txn, id).await?;
    let unlinked = project_employee::unlink_project(&txn, id).await?;
    project::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    info!(unlinked, "deleted project");
    Ok(())
}

use sea_orm::{ConnectionTrait, DbErr, Schema};
use tracing::info;

use crate::{employee, project, project_employee};

/// Create the directory tables if they do not exist yet.
///
/// Tables are derived from the entity definitions; the association table is
/// created last because it carries foreign keys to the other two.
pub async fn ensure_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let statements = [
        schema.create_table_from_entity(employee::Entity),
        schema.create_table_from_entity(project::Entity),
        schema.create_table_from_entity(project_employee::Entity),
    ];
    for mut stmt in statements {
        stmt.if_not_exists();
        db.execute(backend.build(&stmt)).await?;
    }
    info!(?backend, "schema ensured");
    Ok(())
}

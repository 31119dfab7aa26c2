#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Fresh in-memory store with the directory schema applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_in_memory().await?;
    models::schema::ensure_schema(&db).await?;
    Ok(db)
}

use crate::config::{connect_database, migrate_database, BootstrapSettings};

/// Connect and run all pending migrations without starting the server
pub async fn run_migrations(bootstrap: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Running database migrations...");

    let db = connect_database(bootstrap.database_url()).await?;
    migrate_database(&db).await?;

    tracing::info!("All migrations completed successfully");

    Ok(())
}

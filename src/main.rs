use std::sync::Arc;

use academy_backend::api::build_routes;
use academy_backend::cli::{migrate::run_migrations, token::issue_token, Cli, Commands};
use academy_backend::config::{connect_database, init_logging, migrate_database, AppConfig, SystemEnvironment};
use academy_backend::AppData;
use clap::Parser;
use poem::{listener::TcpListener, Server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::from_env_provider(&SystemEnvironment)?;
    init_logging(&config.logging)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Migrate => run_migrations(&config.bootstrap).await,
        Commands::Token {
            subject,
            name,
            campus,
            ttl_minutes,
        } => issue_token(Arc::new(config.secrets), &subject, name, campus, ttl_minutes),
    }
}

async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = connect_database(config.bootstrap.database_url()).await?;
    migrate_database(&db).await?;

    let address = config.bootstrap.server_address();
    let app_data = Arc::new(AppData::init(db, config)?);
    let app = build_routes(app_data);

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/swagger", address);

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}

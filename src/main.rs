use anyhow::Result;
use prenatal_fit::api::create_routes;
use prenatal_fit::config::{
    run_migrations, AppConfig, DatabaseConfig, DatabaseSeeder, GeminiConfig,
    RecommendationConfig,
};
use prenatal_fit::llm::GeminiClient;
use prenatal_fit::logging::init_tracing;
use prenatal_fit::repositories::Repositories;
use prenatal_fit::services::AppServices;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let app_config = AppConfig::from_env()?;
    init_tracing(&app_config.log_level);

    info!("Starting prenatal-fit ({})", app_config.environment);

    let database_config = DatabaseConfig::from_env()?;
    let gemini_config = GeminiConfig::from_env()?;
    let recommendation_config = RecommendationConfig::from_env()?;

    let pool = database_config.create_pool().await?;
    info!("Database connected");

    run_migrations(&pool).await?;
    info!("Database migrations completed");

    let repos = Repositories::postgres(pool);

    if app_config.seed_demo_data {
        DatabaseSeeder::new(repos.workouts.clone()).seed_all().await?;
    }

    let generator = GeminiClient::new(&gemini_config)?;
    info!(model = %generator.model(), "Gemini client ready");

    let services = AppServices::new(repos, Arc::new(generator), recommendation_config);
    let app = create_routes(services);

    let address = app_config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Server listening on http://{}", address);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}

// Environment-driven configuration

pub mod app;
pub mod database;
pub mod gemini;
pub mod recommendation;
pub mod seeding;

pub use app::AppConfig;
pub use database::{run_migrations, DatabaseConfig};
pub use gemini::GeminiConfig;
pub use recommendation::RecommendationConfig;
pub use seeding::DatabaseSeeder;

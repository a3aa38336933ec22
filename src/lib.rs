pub mod api;
pub mod config;
pub mod errors;
pub mod llm;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod services;

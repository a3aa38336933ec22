// API routes and handlers

pub mod check_in;
pub mod favorites;
pub mod health;
pub mod middleware;
pub mod profile;
pub mod routes;
pub mod workouts;

pub use routes::create_routes;

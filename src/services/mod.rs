// Business logic services

pub mod check_in_service;
pub mod fallback_ranking;
pub mod favorite_service;
pub mod profile_service;
pub mod recommendation_engine;
pub mod recommendation_parser;
pub mod recommendation_prompt;
pub mod workout_service;

pub use check_in_service::{CheckInOutcome, CheckInService};
pub use favorite_service::FavoriteService;
pub use profile_service::ProfileService;
pub use recommendation_engine::RecommendationEngine;
pub use workout_service::WorkoutService;

use std::sync::Arc;

use crate::config::RecommendationConfig;
use crate::llm::TextGenerator;
use crate::repositories::Repositories;

/// Every service the HTTP layer needs, wired to one set of repositories
#[derive(Clone)]
pub struct AppServices {
    pub check_in: CheckInService,
    pub favorites: FavoriteService,
    pub profiles: ProfileService,
    pub workouts: WorkoutService,
}

impl AppServices {
    pub fn new(
        repos: Repositories,
        generator: Arc<dyn TextGenerator>,
        config: RecommendationConfig,
    ) -> Self {
        let engine = RecommendationEngine::new(generator, config);

        Self {
            check_in: CheckInService::new(repos.workouts.clone(), repos.check_ins.clone(), engine),
            favorites: FavoriteService::new(repos.favorites.clone(), repos.workouts.clone()),
            profiles: ProfileService::new(repos.profiles.clone()),
            workouts: WorkoutService::new(repos.workouts),
        }
    }
}

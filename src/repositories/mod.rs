//! Data access for the four tables the service owns.
//!
//! Each table gets a trait plus a PostgreSQL implementation; services only
//! see the traits.

pub mod check_in;
pub mod favorite;
pub mod profile;
pub mod workout;

pub use check_in::{CheckInRepository, PgCheckInRepository};
pub use favorite::{FavoriteRepository, PgFavoriteRepository};
pub use profile::{PgProfileRepository, ProfileRepository};
pub use workout::{PgWorkoutRepository, WorkoutRepository};

#[cfg(test)]
pub use check_in::MockCheckInRepository;
#[cfg(test)]
pub use favorite::MockFavoriteRepository;
#[cfg(test)]
pub use profile::MockProfileRepository;
#[cfg(test)]
pub use workout::MockWorkoutRepository;

use sqlx::PgPool;
use std::sync::Arc;

/// The set of repositories the services are built from
#[derive(Clone)]
pub struct Repositories {
    pub workouts: Arc<dyn WorkoutRepository>,
    pub check_ins: Arc<dyn CheckInRepository>,
    pub favorites: Arc<dyn FavoriteRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            workouts: Arc::new(PgWorkoutRepository::new(pool.clone())),
            check_ins: Arc::new(PgCheckInRepository::new(pool.clone())),
            favorites: Arc::new(PgFavoriteRepository::new(pool.clone())),
            profiles: Arc::new(PgProfileRepository::new(pool)),
        }
    }
}

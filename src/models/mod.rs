// Data models and request validation

pub mod check_in;
pub mod favorite;
pub mod recommendation;
pub mod user_profile;
pub mod validation;
pub mod workout;

pub use check_in::*;
pub use favorite::*;
pub use recommendation::*;
pub use user_profile::*;
pub use validation::*;
pub use workout::*;

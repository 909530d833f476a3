pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{Outcome, RestaurantService, ReviewService};
pub use domain::model::{LocationFilter, NewRestaurant, NewReview, Restaurant, Review};
pub use domain::validate::{
    DefaultRestaurantValidator, DefaultReviewValidator, RestaurantValidator, ReviewValidator,
};
pub use storage::{HealthCheck, InMemoryStore, PgStore, RestaurantStore, ReviewStore};

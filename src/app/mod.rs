pub mod outcome;
pub mod restaurant_service;
pub mod review_service;

pub use outcome::Outcome;
pub use restaurant_service::RestaurantService;
pub use review_service::ReviewService;

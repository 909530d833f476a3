//! Domain model definitions for restaurants and their reviews.

pub mod filter;
pub mod restaurant;
pub mod review;

pub use filter::LocationFilter;
pub use restaurant::{NewRestaurant, Restaurant};
pub use review::{NewReview, Review};

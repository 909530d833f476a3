//! Field-level business rules applied to entities before they are persisted.
//!
//! Validators are pure: they never consult a store. Existence of the restaurant a
//! review points at is left to the review store's insert.

pub mod rules;

use crate::domain::model::{NewRestaurant, NewReview};

pub use rules::{DefaultRestaurantValidator, DefaultReviewValidator, MAX_RATING, MIN_RATING};

pub trait RestaurantValidator: Send + Sync {
    fn is_valid(&self, restaurant: &NewRestaurant) -> bool;
}

pub trait ReviewValidator: Send + Sync {
    fn is_valid(&self, review: &NewReview) -> bool;
}

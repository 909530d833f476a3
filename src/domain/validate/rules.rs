use crate::domain::model::{NewRestaurant, NewReview};
use crate::domain::validate::{RestaurantValidator, ReviewValidator};

pub const MIN_RATING: i32 = 0;
pub const MAX_RATING: i32 = 5;

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Requires a nonblank name, city and state.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRestaurantValidator;

impl RestaurantValidator for DefaultRestaurantValidator {
    fn is_valid(&self, restaurant: &NewRestaurant) -> bool {
        !is_blank(&restaurant.name) && !is_blank(&restaurant.city) && !is_blank(&restaurant.state)
    }
}

/// Requires a positive restaurant reference, a nonblank reviewer email and a
/// rating within `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultReviewValidator;

impl ReviewValidator for DefaultReviewValidator {
    fn is_valid(&self, review: &NewReview) -> bool {
        review.restaurant_id > 0
            && !is_blank(&review.reviewer_email)
            && (MIN_RATING..=MAX_RATING).contains(&review.rating)
    }
}

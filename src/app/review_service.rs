//! Decision logic for review requests.

use crate::app::Outcome;
use crate::domain::model::{NewReview, Review};
use crate::domain::validate::ReviewValidator;
use crate::storage::{RestaurantStore, ReviewStore};
use anyhow::Result;
use std::sync::Arc;

pub const INVALID_ID: &str = "id must be greater than 0";
pub const MISSING_REVIEWER: &str = "ReviewerEmail is required.";
pub const INVALID_REVIEW: &str =
    "Reviews require a valid restaurant, reviewer email, and a rating between 0 and 5.";
pub const MISSING_REVIEW_ID: &str = "ReviewId is required.";

pub struct ReviewService {
    validator: Arc<dyn ReviewValidator>,
    store: Arc<dyn ReviewStore>,
    restaurants: Arc<dyn RestaurantStore>,
}

impl ReviewService {
    /// `restaurants` is only consulted to confirm a new review's restaurant exists.
    pub fn new(
        validator: Arc<dyn ReviewValidator>,
        store: Arc<dyn ReviewStore>,
        restaurants: Arc<dyn RestaurantStore>,
    ) -> Self {
        Self {
            validator,
            store,
            restaurants,
        }
    }

    pub async fn get(&self, id: i64) -> Result<Outcome<Review>> {
        if id <= 0 {
            return Ok(Outcome::invalid(INVALID_ID));
        }
        Ok(match self.store.find_by_id(id).await? {
            Some(review) => Outcome::Success(review),
            None => Outcome::NotFound(None),
        })
    }

    pub async fn list_by_reviewer(&self, email: Option<&str>) -> Result<Outcome<Vec<Review>>> {
        let email = match email.map(str::trim).filter(|e| !e.is_empty()) {
            Some(e) => e,
            None => return Ok(Outcome::invalid(MISSING_REVIEWER)),
        };
        Ok(Outcome::Success(self.store.find_by_reviewer(email).await?))
    }

    /// Inserts a review whose rules pass and whose restaurant exists. The body
    /// reports whether the store assigned an id; a zero id means nothing was
    /// inserted, e.g. the restaurant was removed after the lookup.
    pub async fn create(&self, review: NewReview) -> Result<Outcome<bool>> {
        let review = review.normalized();
        if !self.validator.is_valid(&review) {
            return Ok(Outcome::invalid(INVALID_REVIEW));
        }
        if self.restaurants.find_by_id(review.restaurant_id).await?.is_none() {
            tracing::debug!(restaurant_id = review.restaurant_id, "review references unknown restaurant");
            return Ok(Outcome::invalid(INVALID_REVIEW));
        }
        let id = self.store.insert(&review).await?;
        if id == 0 {
            tracing::warn!(restaurant_id = review.restaurant_id, "review was not inserted");
        } else {
            tracing::info!(id, restaurant_id = review.restaurant_id, "review created");
        }
        Ok(Outcome::Created(id != 0))
    }

    /// Deleted only when exactly one row was removed.
    pub async fn delete(&self, id: i64) -> Result<Outcome<bool>> {
        if id <= 0 {
            return Ok(Outcome::invalid(MISSING_REVIEW_ID));
        }
        let rows_affected = self.store.delete_by_id(id).await?;
        if rows_affected != 1 {
            tracing::debug!(id, rows_affected, "review delete matched no single row");
            return Ok(Outcome::NotFound(Some(false)));
        }
        tracing::info!(id, "review deleted");
        Ok(Outcome::Success(true))
    }
}

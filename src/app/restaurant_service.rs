//! Decision logic for restaurant requests.

use crate::app::Outcome;
use crate::domain::model::{LocationFilter, NewRestaurant, Restaurant};
use crate::domain::validate::RestaurantValidator;
use crate::storage::RestaurantStore;
use anyhow::Result;
use std::sync::Arc;

pub const INVALID_ID: &str = "id must be greater than 0";
pub const INVALID_RESTAURANT: &str = "Restaurants require a nonblank name, city, and state.";

pub struct RestaurantService {
    validator: Arc<dyn RestaurantValidator>,
    store: Arc<dyn RestaurantStore>,
}

impl RestaurantService {
    pub fn new(validator: Arc<dyn RestaurantValidator>, store: Arc<dyn RestaurantStore>) -> Self {
        Self { validator, store }
    }

    /// Lists restaurants, optionally narrowed to a city and state.
    ///
    /// Supplying exactly one of `city`/`state` is rejected. An empty result is
    /// still a success.
    pub async fn list(&self, city: Option<&str>, state: Option<&str>) -> Result<Outcome<Vec<Restaurant>>> {
        let filter = match LocationFilter::resolve(city, state) {
            Ok(f) => f,
            Err(reason) => return Ok(Outcome::invalid(reason)),
        };
        let restaurants = self.store.find(filter.as_ref()).await?;
        tracing::debug!(count = restaurants.len(), filtered = filter.is_some(), "listed restaurants");
        Ok(Outcome::Success(restaurants))
    }

    pub async fn get(&self, id: i64) -> Result<Outcome<Restaurant>> {
        if id <= 0 {
            return Ok(Outcome::invalid(INVALID_ID));
        }
        Ok(match self.store.find_by_id(id).await? {
            Some(restaurant) => Outcome::Success(restaurant),
            None => Outcome::NotFound(None),
        })
    }

    /// Validates, rejects duplicates by exact (name, city, state), then inserts.
    /// Fields are trimmed first, matching how list filters are resolved.
    ///
    /// The duplicate check and the insert are separate store calls, so two
    /// concurrent identical creates can both succeed unless the store itself
    /// enforces uniqueness.
    pub async fn create(&self, restaurant: NewRestaurant) -> Result<Outcome<Restaurant>> {
        let restaurant = restaurant.normalized();
        if !self.validator.is_valid(&restaurant) {
            return Ok(Outcome::invalid(INVALID_RESTAURANT));
        }

        if let Some(existing) = self
            .store
            .find_by_key(&restaurant.name, &restaurant.city, &restaurant.state)
            .await?
        {
            tracing::info!(id = existing.id, name = %existing.name, "restaurant already exists");
            return Ok(Outcome::Conflict(existing));
        }

        let inserted = self.store.insert(&restaurant).await?;
        tracing::info!(id = inserted.id, name = %inserted.name, "restaurant created");
        Ok(Outcome::Created(inserted))
    }
}

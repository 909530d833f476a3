//! Store contracts consumed by the entity handlers, plus the shipped adapters.

pub mod memory;
pub mod postgres;

use crate::domain::model::{LocationFilter, NewRestaurant, NewReview, Restaurant, Review};
use anyhow::Result;
use async_trait::async_trait;

pub use memory::InMemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait RestaurantStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>>;

    /// All restaurants ordered by id, or only those in the given city and state.
    async fn find(&self, filter: Option<&LocationFilter>) -> Result<Vec<Restaurant>>;

    /// Exact-match lookup on the (name, city, state) key.
    async fn find_by_key(&self, name: &str, city: &str, state: &str) -> Result<Option<Restaurant>>;

    /// Persists the restaurant and returns it with its assigned id.
    async fn insert(&self, restaurant: &NewRestaurant) -> Result<Restaurant>;
}

#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Review>>;

    /// Reviews written by `email`, ordered by id.
    async fn find_by_reviewer(&self, email: &str) -> Result<Vec<Review>>;

    /// Returns the new review id, or 0 when nothing was inserted (e.g. the
    /// referenced restaurant does not exist).
    async fn insert(&self, review: &NewReview) -> Result<i64>;

    /// Returns the number of rows removed.
    async fn delete_by_id(&self, id: i64) -> Result<u64>;
}

#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> Result<()>;
}

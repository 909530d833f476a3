//! In-process store used for local runs and tests.

use crate::domain::model::{LocationFilter, NewRestaurant, NewReview, Restaurant, Review};
use crate::storage::{HealthCheck, RestaurantStore, ReviewStore};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    restaurants: BTreeMap<i64, Restaurant>,
    reviews: BTreeMap<i64, Review>,
    last_restaurant_id: i64,
    last_review_id: i64,
}

/// Both entity tables behind one lock. Ids are sequential from 1 and never reused.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RestaurantStore for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>> {
        Ok(self.tables.read().await.restaurants.get(&id).cloned())
    }

    async fn find(&self, filter: Option<&LocationFilter>) -> Result<Vec<Restaurant>> {
        let tables = self.tables.read().await;
        Ok(tables
            .restaurants
            .values()
            .filter(|r| match filter {
                Some(f) => r.city == f.city && r.state == f.state,
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn find_by_key(&self, name: &str, city: &str, state: &str) -> Result<Option<Restaurant>> {
        let tables = self.tables.read().await;
        Ok(tables
            .restaurants
            .values()
            .find(|r| r.matches_key(name, city, state))
            .cloned())
    }

    async fn insert(&self, restaurant: &NewRestaurant) -> Result<Restaurant> {
        let mut tables = self.tables.write().await;
        tables.last_restaurant_id += 1;
        let inserted = restaurant.clone().with_id(tables.last_restaurant_id);
        tables.restaurants.insert(inserted.id, inserted.clone());
        Ok(inserted)
    }
}

#[async_trait]
impl ReviewStore for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Review>> {
        Ok(self.tables.read().await.reviews.get(&id).cloned())
    }

    async fn find_by_reviewer(&self, email: &str) -> Result<Vec<Review>> {
        let tables = self.tables.read().await;
        Ok(tables
            .reviews
            .values()
            .filter(|r| r.reviewer_email == email)
            .cloned()
            .collect())
    }

    async fn insert(&self, review: &NewReview) -> Result<i64> {
        let mut tables = self.tables.write().await;
        if !tables.restaurants.contains_key(&review.restaurant_id) {
            return Ok(0);
        }
        tables.last_review_id += 1;
        let id = tables.last_review_id;
        tables.reviews.insert(
            id,
            Review {
                id,
                restaurant_id: review.restaurant_id,
                reviewer_email: review.reviewer_email.clone(),
                rating: review.rating,
                content: review.content.clone(),
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64> {
        let removed = self.tables.write().await.reviews.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}

#[async_trait]
impl HealthCheck for InMemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

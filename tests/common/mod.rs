#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use restaurant_reviews::{
    LocationFilter, NewRestaurant, NewReview, Restaurant, RestaurantStore, RestaurantValidator,
    Review, ReviewStore, ReviewValidator,
};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Validator with a fixed verdict.
pub struct FixedValidator(pub bool);

impl RestaurantValidator for FixedValidator {
    fn is_valid(&self, _restaurant: &NewRestaurant) -> bool {
        self.0
    }
}

impl ReviewValidator for FixedValidator {
    fn is_valid(&self, _review: &NewReview) -> bool {
        self.0
    }
}

/// Restaurant store seeded with fixed rows that counts every call.
#[derive(Default)]
pub struct RecordingRestaurantStore {
    pub rows: Vec<Restaurant>,
    pub calls: AtomicUsize,
    pub inserts: AtomicUsize,
    pub last_filter: Mutex<Option<Option<LocationFilter>>>,
}

impl RecordingRestaurantStore {
    pub fn with_rows(rows: Vec<Restaurant>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RestaurantStore for RecordingRestaurantStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.iter().find(|r| r.id == id).cloned())
    }

    async fn find(&self, filter: Option<&LocationFilter>) -> Result<Vec<Restaurant>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_filter.lock().unwrap() = Some(filter.cloned());
        Ok(self.rows.clone())
    }

    async fn find_by_key(&self, name: &str, city: &str, state: &str) -> Result<Option<Restaurant>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .rows
            .iter()
            .find(|r| r.matches_key(name, city, state))
            .cloned())
    }

    async fn insert(&self, restaurant: &NewRestaurant) -> Result<Restaurant> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inserts.fetch_add(1, Ordering::SeqCst);
        Ok(restaurant.clone().with_id(1000))
    }
}

/// Review store returning scripted insert ids and delete counts.
pub struct ScriptedReviewStore {
    pub insert_id: i64,
    pub rows_affected: u64,
    pub rows: Vec<Review>,
    pub calls: AtomicUsize,
}

impl ScriptedReviewStore {
    pub fn new(insert_id: i64, rows_affected: u64) -> Self {
        Self {
            insert_id,
            rows_affected,
            rows: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReviewStore for ScriptedReviewStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Review>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_reviewer(&self, email: &str) -> Result<Vec<Review>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .rows
            .iter()
            .filter(|r| r.reviewer_email == email)
            .cloned()
            .collect())
    }

    async fn insert(&self, _review: &NewReview) -> Result<i64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.insert_id)
    }

    async fn delete_by_id(&self, _id: i64) -> Result<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows_affected)
    }
}

/// Store whose every call fails, standing in for a lost database connection.
pub struct FailingStore;

#[async_trait]
impl RestaurantStore for FailingStore {
    async fn find_by_id(&self, _id: i64) -> Result<Option<Restaurant>> {
        anyhow::bail!("connection refused")
    }

    async fn find(&self, _filter: Option<&LocationFilter>) -> Result<Vec<Restaurant>> {
        anyhow::bail!("connection refused")
    }

    async fn find_by_key(&self, _name: &str, _city: &str, _state: &str) -> Result<Option<Restaurant>> {
        anyhow::bail!("connection refused")
    }

    async fn insert(&self, _restaurant: &NewRestaurant) -> Result<Restaurant> {
        anyhow::bail!("connection refused")
    }
}

pub fn mcdonalds() -> NewRestaurant {
    NewRestaurant::new("McDonalds", "Pittsburgh", "PA")
}

pub fn wendys() -> NewRestaurant {
    NewRestaurant::new("Wendys", "Cleveland", "OH")
}

pub fn review_for(restaurant_id: i64, rating: i32) -> NewReview {
    NewReview {
        restaurant_id,
        reviewer_email: "critic@example.com".to_string(),
        rating,
        content: Some("Fries were hot.".to_string()),
    }
}

/// Serves the router on an ephemeral port and returns its base URL.
pub async fn spawn_app(state: restaurant_reviews::transport::http::AppState) -> String {
    let router = restaurant_reviews::transport::http::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn in_memory_state() -> restaurant_reviews::transport::http::AppState {
    restaurant_reviews::transport::http::AppState::with_store(Arc::new(
        restaurant_reviews::InMemoryStore::new(),
    ))
}

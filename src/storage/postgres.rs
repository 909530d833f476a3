//! PostgreSQL-backed store.

use crate::domain::model::{LocationFilter, NewRestaurant, NewReview, Restaurant, Review};
use crate::storage::{HealthCheck, RestaurantStore, ReviewStore};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

/// Serves both entity tables from a single connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connects and makes sure the schema exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("failed to connect to DATABASE_URL")?;
        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `restaurants` and `reviews` tables if absent.
    ///
    /// There is intentionally no unique index on (name, city, state); duplicate
    /// detection happens in the restaurant handler.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS restaurants (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                city TEXT NOT NULL,
                state TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS reviews (
                id BIGSERIAL PRIMARY KEY,
                restaurant_id BIGINT NOT NULL REFERENCES restaurants (id) ON DELETE CASCADE,
                reviewer_email TEXT NOT NULL,
                rating INTEGER NOT NULL,
                content TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS reviews_reviewer_email_idx ON reviews (reviewer_email)")
            .execute(&self.pool)
            .await?;

        tracing::debug!("schema ensured");
        Ok(())
    }
}

fn restaurant_from_row(row: &PgRow) -> Result<Restaurant> {
    Ok(Restaurant {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
    })
}

fn review_from_row(row: &PgRow) -> Result<Review> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(Review {
        id: row.try_get("id")?,
        restaurant_id: row.try_get("restaurant_id")?,
        reviewer_email: row.try_get("reviewer_email")?,
        rating: row.try_get("rating")?,
        content: row.try_get("content")?,
        created_at,
    })
}

const REVIEW_COLUMNS: &str = "id, restaurant_id, reviewer_email, rating, content, created_at";

#[async_trait]
impl RestaurantStore for PgStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>> {
        let row = sqlx::query("SELECT id, name, city, state FROM restaurants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("restaurant lookup by id failed")?;
        row.as_ref().map(restaurant_from_row).transpose()
    }

    async fn find(&self, filter: Option<&LocationFilter>) -> Result<Vec<Restaurant>> {
        let rows = match filter {
            Some(f) => {
                sqlx::query(
                    "SELECT id, name, city, state FROM restaurants
                     WHERE city = $1 AND state = $2 ORDER BY id",
                )
                .bind(&f.city)
                .bind(&f.state)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query("SELECT id, name, city, state FROM restaurants ORDER BY id")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .context("restaurant listing failed")?;
        rows.iter().map(restaurant_from_row).collect()
    }

    async fn find_by_key(&self, name: &str, city: &str, state: &str) -> Result<Option<Restaurant>> {
        let row = sqlx::query(
            "SELECT id, name, city, state FROM restaurants
             WHERE name = $1 AND city = $2 AND state = $3 ORDER BY id LIMIT 1",
        )
        .bind(name)
        .bind(city)
        .bind(state)
        .fetch_optional(&self.pool)
        .await
        .context("restaurant lookup by key failed")?;
        row.as_ref().map(restaurant_from_row).transpose()
    }

    async fn insert(&self, restaurant: &NewRestaurant) -> Result<Restaurant> {
        let row = sqlx::query(
            "INSERT INTO restaurants (name, city, state) VALUES ($1, $2, $3)
             RETURNING id, name, city, state",
        )
        .bind(&restaurant.name)
        .bind(&restaurant.city)
        .bind(&restaurant.state)
        .fetch_one(&self.pool)
        .await
        .context("restaurant insert failed")?;
        restaurant_from_row(&row)
    }
}

#[async_trait]
impl ReviewStore for PgStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Review>> {
        let sql = format!("SELECT {} FROM reviews WHERE id = $1", REVIEW_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("review lookup by id failed")?;
        row.as_ref().map(review_from_row).transpose()
    }

    async fn find_by_reviewer(&self, email: &str) -> Result<Vec<Review>> {
        let sql = format!(
            "SELECT {} FROM reviews WHERE reviewer_email = $1 ORDER BY id",
            REVIEW_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(email)
            .fetch_all(&self.pool)
            .await
            .context("review listing failed")?;
        rows.iter().map(review_from_row).collect()
    }

    async fn insert(&self, review: &NewReview) -> Result<i64> {
        // Inserts nothing when the restaurant is missing, which surfaces as id 0.
        let row = sqlx::query(
            "INSERT INTO reviews (restaurant_id, reviewer_email, rating, content)
             SELECT $1, $2, $3, $4
             WHERE EXISTS (SELECT 1 FROM restaurants WHERE id = $1)
             RETURNING id",
        )
        .bind(review.restaurant_id)
        .bind(&review.reviewer_email)
        .bind(review.rating)
        .bind(&review.content)
        .fetch_optional(&self.pool)
        .await
        .context("review insert failed")?;
        match row {
            Some(row) => Ok(row.try_get("id")?),
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("review delete failed")?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl HealthCheck for PgStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

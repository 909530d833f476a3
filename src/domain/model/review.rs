use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted review of a restaurant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub restaurant_id: i64,
    pub reviewer_email: String,
    /// Inclusive 0..=5.
    pub rating: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

/// A review submitted by a client, pending validation and insertion.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    #[serde(default)]
    pub restaurant_id: i64,
    #[serde(default)]
    pub reviewer_email: String,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub content: Option<String>,
}

impl NewReview {
    /// Trims the reviewer email so it matches the trimmed `reviewerEmail` query.
    pub fn normalized(mut self) -> Self {
        self.reviewer_email = self.reviewer_email.trim().to_string();
        self
    }
}

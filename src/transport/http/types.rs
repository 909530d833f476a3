use crate::app::{Outcome, RestaurantService, ReviewService};
use crate::domain::validate::{DefaultRestaurantValidator, DefaultReviewValidator};
use crate::storage::{HealthCheck, RestaurantStore, ReviewStore};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub restaurants: Arc<RestaurantService>,
    pub reviews: Arc<ReviewService>,
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    /// Wires both handlers to one store with the default validators.
    pub fn with_store<S>(store: Arc<S>) -> Self
    where
        S: RestaurantStore + ReviewStore + HealthCheck + 'static,
    {
        let restaurant_store: Arc<dyn RestaurantStore> = store.clone();
        let review_store: Arc<dyn ReviewStore> = store.clone();
        Self {
            restaurants: Arc::new(RestaurantService::new(
                Arc::new(DefaultRestaurantValidator),
                restaurant_store.clone(),
            )),
            reviews: Arc::new(ReviewService::new(
                Arc::new(DefaultReviewValidator),
                review_store,
                restaurant_store,
            )),
            health: store,
        }
    }
}

/// Envelope for error responses and the health probe. Entity payloads are
/// returned bare.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct ListRestaurantsQuery {
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerQuery {
    pub reviewer_email: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReviewQuery {
    /// Missing is treated as 0, which the handler rejects.
    #[serde(default)]
    pub review_id: i64,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::error(message))).into_response()
}

pub fn json_422(err: JsonRejection, expected: &str) -> Response {
    error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        format!("Invalid JSON body: {} (expected: {})", err, expected),
    )
}

/// Store failures are logged and reported as 500 without further interpretation.
pub fn internal_error(err: anyhow::Error) -> Response {
    tracing::error!(error = %format!("{:#}", err), "store operation failed");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        match self {
            Outcome::Success(body) => (StatusCode::OK, Json(body)).into_response(),
            Outcome::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
            Outcome::NotFound(Some(body)) => (StatusCode::NOT_FOUND, Json(body)).into_response(),
            Outcome::NotFound(None) => StatusCode::NOT_FOUND.into_response(),
            Outcome::Conflict(body) => (StatusCode::CONFLICT, Json(body)).into_response(),
            Outcome::InvalidArgument(reason) => error_response(StatusCode::BAD_REQUEST, reason),
        }
    }
}

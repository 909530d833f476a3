use crate::domain::model::{NewRestaurant, NewReview, Restaurant, Review};
use crate::transport::http::handlers::{health, restaurants, reviews};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        restaurants::list_restaurants_handler,
        restaurants::get_restaurant_handler,
        restaurants::create_restaurant_handler,
        reviews::get_review_handler,
        reviews::list_reviews_handler,
        reviews::create_review_handler,
        reviews::delete_review_handler
    ),
    components(schemas(ApiResponse, Restaurant, NewRestaurant, Review, NewReview))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/restaurants",
            get(restaurants::list_restaurants_handler).post(restaurants::create_restaurant_handler),
        )
        .route("/restaurants/:id", get(restaurants::get_restaurant_handler))
        .route(
            "/reviews",
            get(reviews::list_reviews_handler)
                .post(reviews::create_review_handler)
                .delete(reviews::delete_review_handler),
        )
        .route("/reviews/:id", get(reviews::get_review_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

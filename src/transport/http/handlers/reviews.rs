use crate::domain::model::{NewReview, Review};
use crate::transport::http::handlers::common::{path_id, query, respond};
use crate::transport::http::types::{json_422, ApiResponse, AppState, DeleteReviewQuery, ReviewerQuery};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;

#[utoipa::path(
    get,
    path = "/reviews/{id}",
    params(
        ("id" = i64, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "The review", body = Review),
        (status = 400, description = "id is not positive", body = ApiResponse),
        (status = 404, description = "No review with this id")
    )
)]
pub async fn get_review_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let id = match path_id(id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    respond(state.reviews.get(id).await)
}

#[utoipa::path(
    get,
    path = "/reviews",
    params(
        ("reviewerEmail" = String, Query, description = "Email of the reviewer")
    ),
    responses(
        (status = 200, description = "Reviews by this reviewer, possibly empty", body = [Review]),
        (status = 400, description = "reviewerEmail missing or blank", body = ApiResponse)
    )
)]
pub async fn list_reviews_handler(
    State(state): State<AppState>,
    params: Result<Query<ReviewerQuery>, QueryRejection>,
) -> Response {
    let params = match query(params) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    respond(
        state
            .reviews
            .list_by_reviewer(params.reviewer_email.as_deref())
            .await,
    )
}

#[utoipa::path(
    post,
    path = "/reviews",
    request_body = NewReview,
    responses(
        (status = 201, description = "Insert attempted; body is true when a review was stored", body = bool),
        (status = 400, description = "Invalid restaurant, reviewer email or rating", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn create_review_handler(
    State(state): State<AppState>,
    request: Result<Json<NewReview>, JsonRejection>,
) -> Response {
    let Json(review) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(
                e,
                r#"{"restaurantId": 1, "reviewerEmail": "...", "rating": 0-5, "content": "..."}"#,
            )
        }
    };
    respond(state.reviews.create(review).await)
}

#[utoipa::path(
    delete,
    path = "/reviews",
    params(
        ("reviewId" = i64, Query, description = "Id of the review to delete")
    ),
    responses(
        (status = 200, description = "Review deleted", body = bool),
        (status = 400, description = "reviewId missing or not positive", body = ApiResponse),
        (status = 404, description = "No single review matched; body is false", body = bool)
    )
)]
pub async fn delete_review_handler(
    State(state): State<AppState>,
    params: Result<Query<DeleteReviewQuery>, QueryRejection>,
) -> Response {
    let params = match query(params) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    respond(state.reviews.delete(params.review_id).await)
}

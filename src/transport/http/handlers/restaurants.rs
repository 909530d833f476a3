use crate::app::Outcome;
use crate::domain::model::{NewRestaurant, Restaurant};
use crate::transport::http::handlers::common::{path_id, query, respond};
use crate::transport::http::types::{internal_error, json_422, ApiResponse, AppState, ListRestaurantsQuery};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

#[utoipa::path(
    get,
    path = "/restaurants",
    params(
        ("city" = Option<String>, Query, description = "City to filter by; requires state"),
        ("state" = Option<String>, Query, description = "State code to filter by; requires city")
    ),
    responses(
        (status = 200, description = "Restaurants, possibly empty", body = [Restaurant]),
        (status = 400, description = "Only one of city/state supplied", body = ApiResponse)
    )
)]
pub async fn list_restaurants_handler(
    State(state): State<AppState>,
    params: Result<Query<ListRestaurantsQuery>, QueryRejection>,
) -> Response {
    let params = match query(params) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    respond(
        state
            .restaurants
            .list(params.city.as_deref(), params.state.as_deref())
            .await,
    )
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(
        ("id" = i64, Path, description = "Restaurant id")
    ),
    responses(
        (status = 200, description = "The restaurant", body = Restaurant),
        (status = 400, description = "id is not positive", body = ApiResponse),
        (status = 404, description = "No restaurant with this id")
    )
)]
pub async fn get_restaurant_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let id = match path_id(id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    respond(state.restaurants.get(id).await)
}

#[utoipa::path(
    post,
    path = "/restaurants",
    request_body = NewRestaurant,
    responses(
        (status = 201, description = "Restaurant created", body = Restaurant),
        (status = 400, description = "Blank name, city or state", body = ApiResponse),
        (status = 409, description = "Restaurant already exists; body is the existing one", body = Restaurant),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn create_restaurant_handler(
    State(state): State<AppState>,
    request: Result<Json<NewRestaurant>, JsonRejection>,
) -> Response {
    let Json(restaurant) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, r#"{"name": "...", "city": "...", "state": "..."}"#),
    };

    match state.restaurants.create(restaurant).await {
        Ok(Outcome::Created(created)) => {
            let location = format!("/restaurants/{}", created.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(created),
            )
                .into_response()
        }
        Ok(other) => other.into_response(),
        Err(e) => internal_error(e),
    }
}

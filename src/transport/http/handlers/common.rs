use crate::app::Outcome;
use crate::transport::http::types::{error_response, internal_error};
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unwraps an extracted `{id}` path segment, answering 400 for non-numeric ids.
pub fn path_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, Response> {
    id.map(|Path(id)| id).map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Invalid id: {}", e.body_text()))
    })
}

pub fn query<T>(q: Result<Query<T>, QueryRejection>) -> Result<T, Response> {
    q.map(|Query(v)| v).map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid query string: {}", e.body_text()),
        )
    })
}

/// Maps a handler result to a response; store errors become 500.
pub fn respond<T: Serialize>(result: anyhow::Result<Outcome<T>>) -> Response {
    match result {
        Ok(outcome) => outcome.into_response(),
        Err(e) => internal_error(e),
    }
}

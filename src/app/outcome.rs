//! Result of an entity handler operation.
//!
//! Each variant corresponds to exactly one HTTP status (see
//! `transport::http::types`). Store failures are not outcomes; they travel as
//! `anyhow::Error` instead.

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// 200.
    Success(T),
    /// 201.
    Created(T),
    /// 404, optionally carrying a body.
    NotFound(Option<T>),
    /// 409, carrying the entity that already exists.
    Conflict(T),
    /// 400 with a human-readable reason.
    InvalidArgument(String),
}

impl<T> Outcome<T> {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Outcome::InvalidArgument(reason.into())
    }

    /// The payload for variants that carry one.
    pub fn body(&self) -> Option<&T> {
        match self {
            Outcome::Success(t) | Outcome::Created(t) | Outcome::Conflict(t) => Some(t),
            Outcome::NotFound(t) => t.as_ref(),
            Outcome::InvalidArgument(_) => None,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Outcome::InvalidArgument(_))
    }
}

//! Router error type and its HTTP rendering.

use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Response, StatusCode};
use thiserror::Error;

use car_store_core::StoreError;

/// Body text for a malformed `{id}` path segment.
pub const INVALID_CAR_ID: &str = "Invalid car ID";
/// Body text for a request body that does not decode into a car.
pub const INVALID_BODY: &str = "Error parsing request body";
/// Body text when the id is not in the store.
pub const CAR_NOT_FOUND: &str = "Car not found";
/// Body text for paths with no registered route.
pub const ROUTE_NOT_FOUND: &str = "404 page not found";

/// Request-terminating errors. Each maps to one status and a plain-text body.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Internal Error: {0}")]
    InternalError(String),
    #[error("Request Timeout")]
    Timeout,
    #[error("Bad Request: {0}")]
    BadRequest(&'static str),
    #[error("Not Found: {0}")]
    NotFound(&'static str),
}

impl RouterError {
    pub fn status(&self) -> StatusCode {
        match self {
            RouterError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RouterError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RouterError::Timeout => StatusCode::REQUEST_TIMEOUT,
            RouterError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RouterError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Text written to the response body. Internal details stay in the logs.
    pub fn message(&self) -> &'static str {
        match self {
            RouterError::MethodNotAllowed => "Invalid request method",
            RouterError::InternalError(_) => "Internal Server Error",
            RouterError::Timeout => "Request Timeout",
            RouterError::BadRequest(msg) | RouterError::NotFound(msg) => *msg,
        }
    }
}

impl From<StoreError> for RouterError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::CarNotFound { .. } => RouterError::NotFound(CAR_NOT_FOUND),
            StoreError::LockPoisoned => RouterError::InternalError(err.to_string()),
        }
    }
}

impl From<RouterError> for Response<Bytes> {
    fn from(err: RouterError) -> Self {
        let mut response = Response::new(Bytes::from(format!("{}\n", err.message())));
        *response.status_mut() = err.status();
        response.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        response
    }
}

//! Request utilities for HTTP endpoints.

use std::fmt::Display;

use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Request, Response, StatusCode};
use serde::Serialize;
use tokio::time;

use car_store_core::{CarId, NewCar};

use crate::error::{RouterError, INVALID_BODY, INVALID_CAR_ID};

/// Parses the path remainder after `/cars/` as a car id.
///
/// Accepts a decimal integer of at least 1. Empty, multi-segment and
/// non-numeric remainders are bad requests.
pub fn parse_car_id(raw_id: Option<&str>) -> Result<CarId, RouterError> {
    raw_id
        .and_then(|raw| raw.parse::<CarId>().ok())
        .filter(|id| *id >= 1)
        .ok_or(RouterError::BadRequest(INVALID_CAR_ID))
}

/// Helper function to read request body with timeout
pub async fn read_request_body_with_timeout<B>(
    req: Request<B>,
    timeout_ms: u64,
) -> Result<Bytes, RouterError>
where
    B: Body,
    B::Error: Display,
{
    let timeout_duration = time::Duration::from_millis(timeout_ms);
    let body = time::timeout(timeout_duration, req.into_body().collect())
        .await
        .map_err(|_| RouterError::Timeout)?
        .map_err(|e| {
            tracing::warn!("Failed to read request body: {}", e);
            RouterError::BadRequest(INVALID_BODY)
        })?;
    Ok(body.to_bytes())
}

/// Decodes a request body into car fields.
///
/// Only the first JSON value is read; anything after it is ignored. A
/// `null` body yields a car with every field at its zero value.
pub fn decode_new_car(body: &[u8]) -> Result<NewCar, RouterError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<NewCar>>();
    match values.next() {
        Some(Ok(new_car)) => Ok(new_car.unwrap_or_default()),
        Some(Err(e)) => {
            tracing::debug!("Rejected car body: {}", e);
            Err(RouterError::BadRequest(INVALID_BODY))
        }
        None => {
            tracing::debug!("Rejected empty car body");
            Err(RouterError::BadRequest(INVALID_BODY))
        }
    }
}

/// Serializes `value` into a JSON response with the given status.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    value: &T,
) -> Result<Response<Bytes>, RouterError> {
    let json = serde_json::to_vec(value)
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .body(Bytes::from(json))
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}

/// Helper to build empty HTTP response (for 204 No Content)
pub fn empty_response(status: StatusCode) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .body(Bytes::new())
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}

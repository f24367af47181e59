//! Car CRUD handlers.

use std::fmt::Display;

use hyper::body::{Body, Bytes};
use hyper::{Request, Response, StatusCode};

use crate::error::RouterError;
use crate::router::AppState;

use super::request_utils::{
    decode_new_car, empty_response, json_response, parse_car_id,
    read_request_body_with_timeout,
};

/// Lists all cars.
///
/// # Endpoint
/// `GET /cars`
///
/// # Response
/// - **200 OK**: JSON array of cars, ordered by id
pub fn list_cars(state: AppState) -> Result<Response<Bytes>, RouterError> {
    let cars = state.store.list()?;
    json_response(StatusCode::OK, &cars)
}

/// Creates a new car.
///
/// # Endpoint
/// `POST /cars`
///
/// # Request Body
/// ```json
/// {"company": "Toyota", "model": "Corolla", "year": 2020}
/// ```
///
/// # Response
/// - **201 Created**: The stored car with its assigned id
/// ```json
/// {"id": 1, "company": "Toyota", "model": "Corolla", "year": 2020}
/// ```
///
/// # Errors
/// - **400 Bad Request**: Body is not a JSON car
/// - **408 Request Timeout**: Body not received in time
///
/// # Example
/// ```bash
/// curl -X POST http://localhost:8060/cars \
///   -H "Content-Type: application/json" \
///   -d '{"company":"Toyota","model":"Corolla","year":2020}'
/// ```
pub async fn create_car<B>(req: Request<B>, state: AppState) -> Result<Response<Bytes>, RouterError>
where
    B: Body,
    B::Error: Display,
{
    let body = read_request_body_with_timeout(req, state.config.request_timeout_ms).await?;
    let new_car = decode_new_car(&body)?;

    let car = state.store.insert(new_car)?;
    tracing::info!(id = car.id, company = %car.company, model = %car.model, "created car");

    json_response(StatusCode::CREATED, &car)
}

/// Reads a car.
///
/// # Endpoint
/// `GET /cars/{id}`
///
/// # Errors
/// - **400 Bad Request**: Invalid car id
/// - **404 Not Found**: Car not found
pub fn get_car(
    raw_id: Option<&str>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = parse_car_id(raw_id)?;
    let car = state.store.get(id)?;
    json_response(StatusCode::OK, &car)
}

/// Replaces every field of a car except its id.
///
/// # Endpoint
/// `PUT /cars/{id}`
///
/// # Response
/// - **200 OK**: The car as now stored
///
/// # Errors
/// - **400 Bad Request**: Invalid car id or body
/// - **404 Not Found**: Car not found
/// - **408 Request Timeout**: Body not received in time
pub async fn update_car<B>(
    req: Request<B>,
    raw_id: Option<&str>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError>
where
    B: Body,
    B::Error: Display,
{
    let id = parse_car_id(raw_id)?;

    let body = read_request_body_with_timeout(req, state.config.request_timeout_ms).await?;
    let new_car = decode_new_car(&body)?;

    let car = state.store.replace(id, new_car)?;
    tracing::info!(id, "updated car");

    json_response(StatusCode::OK, &car)
}

/// Deletes a car.
///
/// # Endpoint
/// `DELETE /cars/{id}`
///
/// # Response
/// - **204 No Content**: Car removed
///
/// # Errors
/// - **400 Bad Request**: Invalid car id
/// - **404 Not Found**: Car not found
pub fn delete_car(
    raw_id: Option<&str>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = parse_car_id(raw_id)?;
    state.store.delete(id)?;
    tracing::info!(id, "deleted car");
    empty_response(StatusCode::NO_CONTENT)
}

//! Matchit routing configuration.

use std::fmt::Display;
use std::sync::Arc;

use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use matchit::Router as MatchitRouter;

use car_store_core::CarStore;

use crate::config::ApiConfig;
use crate::error::{RouterError, ROUTE_NOT_FOUND};
use crate::handlers;

/// Path prefix of the single-car routes.
const CARS_PREFIX: &str = "/cars/";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Car store shared by all requests
    pub store: Arc<CarStore>,
    /// API configuration
    pub config: Arc<ApiConfig>,
}

/// HTTP request router.
pub struct Router {
    inner: MatchitRouter<RouteHandler>,
    state: AppState,
}

impl Router {
    /// Creates a router serving `/cars` and `/cars/{id}` from `store`.
    ///
    /// Everything below `/cars/` routes to the single-car handlers, which
    /// reject any remainder that is not a car id.
    pub fn new(store: Arc<CarStore>, config: Arc<ApiConfig>) -> Self {
        let mut router = MatchitRouter::new();

        router
            .insert("/cars", RouteHandler::Cars)
            .expect("Failed to insert /cars route");
        router
            .insert("/cars/{*id}", RouteHandler::Car)
            .expect("Failed to insert /cars/{*id} route");

        Self {
            inner: router,
            state: AppState { store, config },
        }
    }

    /// Shared state handed to every handler.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Routes an incoming request to the appropriate handler.
    ///
    /// # Returns
    /// `Result<Response<Bytes>, RouterError>` containing the response or an error.
    pub async fn route<B>(&self, req: Request<B>) -> Result<Response<Bytes>, RouterError>
    where
        B: Body,
        B::Error: Display,
    {
        let path = req.uri().path().to_string();
        tracing::debug!(method = %req.method(), %path, "routing request");

        match self.inner.at(&path) {
            Ok(matched) => {
                matched
                    .value
                    .handle(req, matched.params.get("id"), self.state.clone())
                    .await
            }
            // `/cars/` with an empty id
            Err(_) if path == CARS_PREFIX => {
                RouteHandler::Car
                    .handle(req, None, self.state.clone())
                    .await
            }
            Err(_) => Err(RouterError::NotFound(ROUTE_NOT_FOUND)),
        }
    }

    /// Routes a request and renders any error into its HTTP response.
    pub async fn handle<B>(&self, req: Request<B>) -> Response<Bytes>
    where
        B: Body,
        B::Error: Display,
    {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        match self.route(req).await {
            Ok(response) => response,
            Err(err) => {
                if let RouterError::InternalError(detail) = &err {
                    tracing::error!(%method, %path, %detail, "request failed");
                } else {
                    tracing::debug!(%method, %path, error = %err, "request rejected");
                }
                err.into()
            }
        }
    }
}

/// Route handler function.
enum RouteHandler {
    Cars,
    Car,
}

impl RouteHandler {
    /// Handles a request with the given route parameters.
    async fn handle<B>(
        &self,
        req: Request<B>,
        car_id: Option<&str>,
        state: AppState,
    ) -> Result<Response<Bytes>, RouterError>
    where
        B: Body,
        B::Error: Display,
    {
        match self {
            RouteHandler::Cars => match req.method() {
                &Method::GET => handlers::list_cars(state),
                &Method::POST => handlers::create_car(req, state).await,
                _ => Err(RouterError::MethodNotAllowed),
            },
            RouteHandler::Car => match req.method() {
                &Method::GET => handlers::get_car(car_id, state),
                &Method::PUT => handlers::update_car(req, car_id, state).await,
                &Method::DELETE => handlers::delete_car(car_id, state),
                _ => Err(RouterError::MethodNotAllowed),
            },
        }
    }
}

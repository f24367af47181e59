//! HTTP endpoint handlers.

mod car_handlers;
pub mod request_utils;

pub use car_handlers::*;

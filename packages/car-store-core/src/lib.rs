//! Core storage for the car inventory service.
//!
//! Holds the car data model and a mutex-guarded in-memory store that
//! assigns ids and serves create, read, replace, delete and list.

pub mod car;
pub mod error;
pub mod store;

pub use car::{Car, CarId, NewCar};
pub use error::StoreError;
pub use store::CarStore;

//! REST API server for the in-memory car store.
//!
//! Provides the `/cars` HTTP endpoints, request routing, and the
//! hyper connection loop.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use config::ApiConfig;
pub use error::RouterError;
pub use router::{AppState, Router};
pub use server::{Acceptor, Server};

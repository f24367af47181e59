//! Store integration suite.
//!
//! 1. CRUD properties over long operation sequences
//! 2. Concurrent access from many threads

mod basic_crud;
mod concurrency;

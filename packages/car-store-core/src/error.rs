//! Store error types.

use thiserror::Error;

use crate::car::CarId;

/// Store operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No car is stored under the id
    #[error("Car {id} not found")]
    CarNotFound { id: CarId },

    /// A thread panicked while holding the store lock
    #[error("Lock poisoned")]
    LockPoisoned,
}

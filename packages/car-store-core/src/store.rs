//! In-memory car store guarded by a single mutex.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::car::{Car, CarId, NewCar};
use crate::error::StoreError;

/// Mutable store contents. Only reachable through the store lock.
#[derive(Debug)]
struct StoreState {
    /// Map of car id to car record
    cars: BTreeMap<CarId, Car>,
    /// Next id to hand out; never reused after deletion
    next_id: CarId,
}

/// Owner of all car records and the id counter.
///
/// Every operation runs as one critical section under the same lock, so
/// id assignment and map updates are atomic with respect to each other.
/// Shared between request handlers as `Arc<CarStore>`.
#[derive(Debug)]
pub struct CarStore {
    state: Mutex<StoreState>,
}

impl CarStore {
    /// Creates an empty store whose first issued id is 1.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                cars: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, StoreError> {
        self.state.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Stores a new car under the next free id.
    ///
    /// # Returns
    /// The stored car, carrying its assigned id.
    pub fn insert(&self, new_car: NewCar) -> Result<Car, StoreError> {
        let mut state = self.lock()?;
        let id = state.next_id;
        state.next_id += 1;

        let car = new_car.with_id(id);
        state.cars.insert(id, car.clone());
        tracing::debug!(id, "inserted car");
        Ok(car)
    }

    /// Returns a copy of the car stored under `id`.
    pub fn get(&self, id: CarId) -> Result<Car, StoreError> {
        let state = self.lock()?;
        state
            .cars
            .get(&id)
            .cloned()
            .ok_or(StoreError::CarNotFound { id })
    }

    /// Overwrites every field of an existing car except its id.
    ///
    /// # Returns
    /// The car as now stored, or `CarNotFound` if `id` is absent.
    pub fn replace(&self, id: CarId, new_car: NewCar) -> Result<Car, StoreError> {
        let mut state = self.lock()?;
        let slot = state
            .cars
            .get_mut(&id)
            .ok_or(StoreError::CarNotFound { id })?;
        *slot = new_car.with_id(id);
        Ok(slot.clone())
    }

    /// Removes the car stored under `id` and returns it.
    pub fn delete(&self, id: CarId) -> Result<Car, StoreError> {
        let mut state = self.lock()?;
        let car = state
            .cars
            .remove(&id)
            .ok_or(StoreError::CarNotFound { id })?;
        tracing::debug!(id, "deleted car");
        Ok(car)
    }

    /// Snapshot of all stored cars, ordered by ascending id.
    pub fn list(&self) -> Result<Vec<Car>, StoreError> {
        let state = self.lock()?;
        Ok(state.cars.values().cloned().collect())
    }

    /// Number of stored cars.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.cars.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock()?.cars.is_empty())
    }

    /// Id the next insert will receive.
    pub fn next_id(&self) -> Result<CarId, StoreError> {
        Ok(self.lock()?.next_id)
    }
}

impl Default for CarStore {
    fn default() -> Self {
        Self::new()
    }
}

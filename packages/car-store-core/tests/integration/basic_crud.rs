//! CRUD properties exercised through the public store API.

use std::collections::HashSet;

use car_store_core::{CarId, CarStore, NewCar, StoreError};

fn sample(i: i64) -> NewCar {
    NewCar::new(format!("Company {}", i), format!("Model {}", i), 1990 + i)
}

#[test]
fn test_ids_strictly_increase_across_deletes() -> anyhow::Result<()> {
    let store = CarStore::new();
    let mut issued = Vec::new();

    for i in 0..50 {
        let car = store.insert(sample(i))?;
        issued.push(car.id);
        // Delete every third car right after creating it
        if i % 3 == 0 {
            store.delete(car.id)?;
        }
    }

    assert!(issued.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(issued.first(), Some(&1));
    assert_eq!(store.next_id()?, 51);
    Ok(())
}

#[test]
fn test_list_contains_each_car_once() -> anyhow::Result<()> {
    let store = CarStore::new();
    let mut expected = HashSet::new();
    for i in 0..20 {
        let car = store.insert(sample(i))?;
        expected.insert(car.id);
    }

    let listed = store.list()?;
    let listed_ids: HashSet<CarId> = listed.iter().map(|c| c.id).collect();

    assert_eq!(listed.len(), 20);
    assert_eq!(listed_ids, expected);
    Ok(())
}

#[test]
fn test_full_crud_lifecycle() -> anyhow::Result<()> {
    let store = CarStore::new();

    let corolla = store.insert(NewCar::new("Toyota", "Corolla", 2020))?;
    let civic = store.insert(NewCar::new("Honda", "Civic", 2019))?;
    assert_eq!((corolla.id, civic.id), (1, 2));

    let camry = store.replace(corolla.id, NewCar::new("Toyota", "Camry", 2021))?;
    assert_eq!(camry.id, 1);
    assert_eq!(camry.model, "Camry");
    assert_eq!(camry.year, 2021);
    assert_eq!(store.get(1)?, camry);

    store.delete(1)?;
    assert_eq!(store.get(1), Err(StoreError::CarNotFound { id: 1 }));
    assert_eq!(store.list()?, vec![civic]);
    Ok(())
}

#[test]
fn test_replace_after_delete_is_not_found() -> anyhow::Result<()> {
    let store = CarStore::new();
    let car = store.insert(sample(1))?;
    store.delete(car.id)?;

    assert_eq!(
        store.replace(car.id, sample(2)),
        Err(StoreError::CarNotFound { id: car.id })
    );
    assert!(store.is_empty()?);
    Ok(())
}

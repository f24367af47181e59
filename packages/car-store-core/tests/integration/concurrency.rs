//! Concurrent inserts, updates and deletes against a shared store.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use car_store_core::{CarId, CarStore, NewCar};
use ntest::timeout;

const THREADS: usize = 8;
const INSERTS_PER_THREAD: usize = 250;

#[test]
#[timeout(10000)]
fn test_concurrent_inserts_issue_unique_contiguous_ids() {
    let store = Arc::new(CarStore::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..INSERTS_PER_THREAD)
                    .map(|i| {
                        store
                            .insert(NewCar::new(format!("T{}", t), format!("M{}", i), 2000))
                            .unwrap()
                            .id
                    })
                    .collect::<Vec<CarId>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "id {} issued twice", id);
        }
    }

    let total = (THREADS * INSERTS_PER_THREAD) as CarId;
    assert_eq!(ids, (1..=total).collect::<HashSet<_>>());
    assert_eq!(store.next_id().unwrap(), total + 1);
    assert_eq!(store.len().unwrap(), total as usize);
}

#[test]
#[timeout(10000)]
fn test_concurrent_mixed_operations_keep_store_consistent() {
    let store = Arc::new(CarStore::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut kept = Vec::new();
                for i in 0..100 {
                    let car = store
                        .insert(NewCar::new("Shared", format!("{}-{}", t, i), 1999))
                        .unwrap();
                    if i % 2 == 0 {
                        store.delete(car.id).unwrap();
                    } else {
                        let updated = store
                            .replace(car.id, NewCar::new("Shared", "updated", 2024))
                            .unwrap();
                        assert_eq!(updated.id, car.id);
                        kept.push(car.id);
                    }
                }
                kept
            })
        })
        .collect();

    let mut kept = HashSet::new();
    for handle in handles {
        kept.extend(handle.join().unwrap());
    }

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), kept.len());
    for car in listed {
        assert!(kept.contains(&car.id));
        assert_eq!(car.model, "updated");
        assert_eq!(car.year, 2024);
    }
}

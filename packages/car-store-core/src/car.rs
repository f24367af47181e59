//! Car data model.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned car identifier. Issued ids start at 1.
pub type CarId = u64;

/// A stored car record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub company: String,
    pub model: String,
    pub year: i64,
}

/// Car fields supplied by a client on create or update.
///
/// Decodes only from a JSON object. Keys match field names ignoring ASCII
/// case, absent or `null` fields keep their zero value, the last of
/// duplicate keys wins, and unknown keys (including `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewCar {
    pub company: String,
    pub model: String,
    pub year: i64,
}

impl NewCar {
    pub fn new(company: impl Into<String>, model: impl Into<String>, year: i64) -> Self {
        Self {
            company: company.into(),
            model: model.into(),
            year,
        }
    }

    /// Attaches an id, producing the record as it is stored.
    pub fn with_id(self, id: CarId) -> Car {
        Car {
            id,
            company: self.company,
            model: self.model,
            year: self.year,
        }
    }
}

impl<'de> Deserialize<'de> for NewCar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(NewCarVisitor)
    }
}

struct NewCarVisitor;

impl<'de> Visitor<'de> for NewCarVisitor {
    type Value = NewCar;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a car object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<NewCar, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut car = NewCar::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("company") {
                if let Some(company) = map.next_value::<Option<String>>()? {
                    car.company = company;
                }
            } else if key.eq_ignore_ascii_case("model") {
                if let Some(model) = map.next_value::<Option<String>>()? {
                    car.model = model;
                }
            } else if key.eq_ignore_ascii_case("year") {
                if let Some(year) = map.next_value::<Option<i64>>()? {
                    car.year = year;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(car)
    }
}

impl From<Car> for NewCar {
    fn from(car: Car) -> Self {
        Self {
            company: car.company,
            model: car.model,
            year: car.year,
        }
    }
}

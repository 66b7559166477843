//! Modelo de Car
//!
//! A car registration validated against the vehicle catalog. `make` and
//! `model` hold the catalog's canonical names. `(make_id, model_id)` is unique.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::clients::ModelRecord;

/// Car principal - mapea a la tabla cars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: i64,
    pub make: String,
    pub make_id: i32,
    pub model: String,
    pub model_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Datos para insertar un car ya validado
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub make: String,
    pub make_id: i32,
    pub model: String,
    pub model_id: i32,
}

impl From<ModelRecord> for NewCar {
    fn from(record: ModelRecord) -> Self {
        Self {
            make: record.make_name,
            make_id: record.make_id,
            model: record.model_name,
            model_id: record.model_id,
        }
    }
}

/// Car con su calificación media. `average_rate` is `None` for a car
/// without ratings.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct CarWithAverage {
    pub id: i64,
    pub make: String,
    pub make_id: i32,
    pub model: String,
    pub model_id: i32,
    pub average_rate: Option<f64>,
}

/// Arithmetic mean of `rates`, `None` when empty.
pub fn average_rate(rates: &[i32]) -> Option<f64> {
    if rates.is_empty() {
        return None;
    }
    let total: i64 = rates.iter().map(|&r| i64::from(r)).sum();
    Some(total as f64 / rates.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_rate() {
        assert_eq!(average_rate(&[3, 5, 1]), Some(3.0));
        assert_eq!(average_rate(&[4, 5]), Some(4.5));
        assert_eq!(average_rate(&[]), None);
    }

    #[test]
    fn test_new_car_uses_catalog_names() {
        let car = NewCar::from(ModelRecord {
            make_id: 474,
            make_name: "HONDA".to_string(),
            model_id: 27546,
            model_name: "CBX".to_string(),
        });
        assert_eq!(car.make, "HONDA");
        assert_eq!(car.model, "CBX");
        assert_eq!((car.make_id, car.model_id), (474, 27546));
    }
}

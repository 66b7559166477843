use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::car::average_rate;
use crate::models::{Car, CarWithAverage, NewCar, Rating};
use crate::utils::errors::AppError;

use super::car_repository::CarRepository;
use super::rating_repository::RatingRepository;

#[derive(Default)]
struct Tables {
    cars: Vec<Car>,
    ratings: Vec<Rating>,
    next_car_id: i64,
    next_rating_id: i64,
}

/// In-memory implementation of both repositories, used when no database is
/// configured and in tests. A single lock covers every check-and-insert.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarRepository for InMemoryStore {
    async fn create_if_absent(&self, car: NewCar) -> Result<Option<Car>, AppError> {
        let mut tables = self.tables.write().await;

        if tables
            .cars
            .iter()
            .any(|c| c.make_id == car.make_id && c.model_id == car.model_id)
        {
            return Ok(None);
        }

        tables.next_car_id += 1;
        let created = Car {
            id: tables.next_car_id,
            make: car.make,
            make_id: car.make_id,
            model: car.model,
            model_id: car.model_id,
            created_at: Utc::now(),
        };
        tables.cars.push(created.clone());
        Ok(Some(created))
    }

    async fn list_with_average_rate(&self) -> Result<Vec<CarWithAverage>, AppError> {
        let tables = self.tables.read().await;

        let cars = tables
            .cars
            .iter()
            .map(|car| {
                let rates: Vec<i32> = tables
                    .ratings
                    .iter()
                    .filter(|r| r.car_id == car.id)
                    .map(|r| r.rate)
                    .collect();
                CarWithAverage {
                    id: car.id,
                    make: car.make.clone(),
                    make_id: car.make_id,
                    model: car.model.clone(),
                    model_id: car.model_id,
                    average_rate: average_rate(&rates),
                }
            })
            .collect();

        Ok(cars)
    }
}

#[async_trait]
impl RatingRepository for InMemoryStore {
    async fn create_for_existing_car(
        &self,
        car_id: i64,
        rate: i32,
    ) -> Result<Option<Rating>, AppError> {
        let mut tables = self.tables.write().await;

        if !tables.cars.iter().any(|c| c.id == car_id) {
            return Ok(None);
        }

        tables.next_rating_id += 1;
        let rating = Rating {
            id: tables.next_rating_id,
            car_id,
            rate,
            created_at: Utc::now(),
        };
        tables.ratings.push(rating.clone());
        Ok(Some(rating))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cbx() -> NewCar {
        NewCar {
            make: "HONDA".to_string(),
            make_id: 474,
            model: "CBX".to_string(),
            model_id: 27546,
        }
    }

    #[tokio::test]
    async fn test_duplicate_pair_is_rejected() {
        let store = InMemoryStore::new();

        let first = store.create_if_absent(cbx()).await.unwrap();
        assert_eq!(first.map(|c| c.id), Some(1));

        let second = store.create_if_absent(cbx()).await.unwrap();
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn test_rating_requires_existing_car() {
        let store = InMemoryStore::new();
        assert!(store.create_for_existing_car(999, 3).await.unwrap().is_none());

        let car = store.create_if_absent(cbx()).await.unwrap().unwrap();
        let rating = store.create_for_existing_car(car.id, 3).await.unwrap().unwrap();
        assert_eq!(rating.car_id, car.id);
        assert_eq!(rating.rate, 3);
    }

    #[tokio::test]
    async fn test_list_with_average_rate() {
        let store = InMemoryStore::new();
        let rated = store.create_if_absent(cbx()).await.unwrap().unwrap();
        let unrated = store
            .create_if_absent(NewCar {
                make: "HONDA".to_string(),
                make_id: 474,
                model: "CR-Z".to_string(),
                model_id: 2128,
            })
            .await
            .unwrap()
            .unwrap();

        for rate in [3, 5, 1] {
            store.create_for_existing_car(rated.id, rate).await.unwrap();
        }

        let cars = store.list_with_average_rate().await.unwrap();
        assert_eq!(cars.len(), 2);
        assert_eq!(cars[0].id, rated.id);
        assert_eq!(cars[0].average_rate, Some(3.0));
        assert_eq!(cars[1].id, unrated.id);
        assert_eq!(cars[1].average_rate, None);
    }
}

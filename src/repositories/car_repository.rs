use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::models::{Car, CarWithAverage, NewCar};
use crate::utils::errors::AppError;

/// Storage for registered cars.
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Insert `car` unless a car with the same `(make_id, model_id)` exists.
    /// Returns `None` when the pair is already registered.
    async fn create_if_absent(&self, car: NewCar) -> Result<Option<Car>, AppError>;

    /// Every car with the mean of its ratings, ordered by id.
    async fn list_with_average_rate(&self) -> Result<Vec<CarWithAverage>, AppError>;
}

pub struct PgCarRepository {
    pool: PgPool,
}

impl PgCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn create_if_absent(&self, car: NewCar) -> Result<Option<Car>, AppError> {
        // ON CONFLICT keeps the uniqueness check and the write in one statement
        let created = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (make, make_id, model, model_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (make_id, model_id) DO NOTHING
            RETURNING id, make, make_id, model, model_id, created_at
            "#,
        )
        .bind(&car.make)
        .bind(car.make_id)
        .bind(&car.model)
        .bind(car.model_id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_with_average_rate(&self) -> Result<Vec<CarWithAverage>, AppError> {
        let cars = sqlx::query_as::<_, CarWithAverage>(
            r#"
            SELECT c.id, c.make, c.make_id, c.model, c.model_id,
                   AVG(r.rate)::DOUBLE PRECISION AS average_rate
            FROM cars c
            LEFT JOIN ratings r ON r.car_id = c.id
            GROUP BY c.id
            ORDER BY c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }
}

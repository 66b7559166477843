use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::models::Rating;
use crate::utils::errors::AppError;

/// Storage for car ratings.
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Insert a rating for `car_id` if that car exists.
    /// Returns `None` when there is no such car.
    async fn create_for_existing_car(&self, car_id: i64, rate: i32)
        -> Result<Option<Rating>, AppError>;
}

pub struct PgRatingRepository {
    pool: PgPool,
}

impl PgRatingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RatingRepository for PgRatingRepository {
    async fn create_for_existing_car(
        &self,
        car_id: i64,
        rate: i32,
    ) -> Result<Option<Rating>, AppError> {
        // The existence check and the insert are the same statement
        let rating = sqlx::query_as::<_, Rating>(
            r#"
            INSERT INTO ratings (car_id, rate, created_at)
            SELECT id, $2, $3 FROM cars WHERE id = $1
            RETURNING id, car_id, rate, created_at
            "#,
        )
        .bind(car_id)
        .bind(rate)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(rating)
    }
}

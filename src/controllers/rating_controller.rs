use std::sync::Arc;

use tracing::info;

use crate::models::rating::{MAX_RATE, MIN_RATE};
use crate::models::Rating;
use crate::repositories::RatingRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct RatingController {
    repository: Arc<dyn RatingRepository>,
}

impl RatingController {
    pub fn new(repository: Arc<dyn RatingRepository>) -> Self {
        Self { repository }
    }

    pub async fn rate(&self, car_id: i64, rate: i32) -> AppResult<Rating> {
        if !(MIN_RATE..=MAX_RATE).contains(&rate) {
            return Err(AppError::BadRequest(format!(
                "Rate must be between {} and {}, got {}",
                MIN_RATE, MAX_RATE, rate
            )));
        }

        let rating = self
            .repository
            .create_for_existing_car(car_id, rate)
            .await?
            .ok_or(AppError::CarNotFound(car_id))?;

        info!("⭐ Rating {} guardado para car {}: {}", rating.id, car_id, rate);
        Ok(rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryStore;

    #[tokio::test]
    async fn test_rate_out_of_range_is_rejected() {
        let controller = RatingController::new(Arc::new(InMemoryStore::new()));
        let err = controller.rate(1, 0).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_rate_missing_car() {
        let controller = RatingController::new(Arc::new(InMemoryStore::new()));
        let err = controller.rate(999, 3).await.unwrap_err();
        assert_eq!(err.to_string(), "Car ID 999 does not exist.");
    }
}

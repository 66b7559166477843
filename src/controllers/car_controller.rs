use std::sync::Arc;

use tracing::info;

use crate::clients::VehicleCatalog;
use crate::models::{Car, CarWithAverage, NewCar};
use crate::repositories::CarRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct CarController {
    repository: Arc<dyn CarRepository>,
    catalog: Arc<dyn VehicleCatalog>,
}

impl CarController {
    pub fn new(repository: Arc<dyn CarRepository>, catalog: Arc<dyn VehicleCatalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Validate `make`/`model` against the catalog and store the car under the
    /// catalog's canonical names.
    pub async fn register(&self, make: &str, model: &str) -> AppResult<Car> {
        let record = self.catalog.find_model(make, model).await?;

        let (make_id, model_id) = (record.make_id, record.model_id);
        let car = self
            .repository
            .create_if_absent(NewCar::from(record))
            .await?
            .ok_or_else(|| {
                AppError::AlreadyExists(format!(
                    "Car {} {} (make_id {}, model_id {}) is already registered",
                    make, model, make_id, model_id
                ))
            })?;

        info!(
            "✅ Car {} registrado: {} {} ({}/{})",
            car.id, car.make, car.model, car.make_id, car.model_id
        );
        Ok(car)
    }

    pub async fn list_cars(&self) -> AppResult<Vec<CarWithAverage>> {
        self.repository.list_with_average_rate().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{CatalogError, ModelList, ModelRecord};
    use crate::repositories::InMemoryStore;
    use async_trait::async_trait;

    struct OneModelCatalog;

    #[async_trait]
    impl VehicleCatalog for OneModelCatalog {
        async fn fetch_model_list(&self, make: &str) -> Result<ModelList, CatalogError> {
            if make.eq_ignore_ascii_case("honda") {
                Ok(ModelList::new(vec![ModelRecord {
                    make_id: 474,
                    make_name: "HONDA".to_string(),
                    model_id: 27546,
                    model_name: "CBX".to_string(),
                }]))
            } else {
                Ok(ModelList::default())
            }
        }
    }

    fn controller() -> CarController {
        CarController::new(Arc::new(InMemoryStore::new()), Arc::new(OneModelCatalog))
    }

    #[tokio::test]
    async fn test_register_once() {
        let controller = controller();

        let car = controller.register("honda", "CBX").await.unwrap();
        assert_eq!(car.make, "HONDA");
        assert_eq!((car.make_id, car.model_id), (474, 27546));

        let err = controller.register("honda", "CBX").await.unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_register_unknown_pair() {
        let controller = controller();
        for (make, model) in [("honey", "CBX"), ("honda", "CB")] {
            let err = controller.register(make, model).await.unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)));
        }
        assert!(controller.list_cars().await.unwrap().is_empty());
    }
}

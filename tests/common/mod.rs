#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use car_ratings::clients::{CatalogError, ModelList, ModelRecord, VehicleCatalog};
use car_ratings::middleware::cors_middleware;
use car_ratings::{create_app, AppState};

/// Catalog double answering from a fixed table, keyed by lowercase make.
pub struct StaticCatalog {
    makes: HashMap<String, Vec<ModelRecord>>,
}

impl StaticCatalog {
    pub fn honda() -> Self {
        let honda = [(1861, "Accord"), (2128, "CR-Z"), (27546, "CBX")]
            .into_iter()
            .map(|(model_id, model_name)| ModelRecord {
                make_id: 474,
                make_name: "HONDA".to_string(),
                model_id,
                model_name: model_name.to_string(),
            })
            .collect();

        let mut makes = HashMap::new();
        makes.insert("honda".to_string(), honda);
        Self { makes }
    }
}

#[async_trait]
impl VehicleCatalog for StaticCatalog {
    async fn fetch_model_list(&self, make: &str) -> Result<ModelList, CatalogError> {
        let records = self
            .makes
            .get(&make.to_lowercase())
            .cloned()
            .unwrap_or_default();
        Ok(ModelList::new(records))
    }
}

/// Catalog double whose every call fails at the transport level.
pub struct FailingCatalog(pub String);

#[async_trait]
impl VehicleCatalog for FailingCatalog {
    async fn fetch_model_list(&self, _make: &str) -> Result<ModelList, CatalogError> {
        Err(CatalogError::Transport(self.0.clone()))
    }
}

/// Serve the app on an ephemeral port and return its base URL.
pub async fn spawn_app(state: AppState) -> String {
    let app = create_app(state, cors_middleware(&[]));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub async fn spawn_honda_app() -> String {
    spawn_app(AppState::in_memory(Arc::new(StaticCatalog::honda()))).await
}

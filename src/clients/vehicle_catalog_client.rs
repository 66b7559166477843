//! Cliente del catálogo de vehículos (NHTSA vPIC)
//!
//! Looks up the models a catalog knows for a given make and resolves a
//! submitted model name to its catalog record. Every call goes to the remote
//! service; nothing is cached.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The catalog could not be reached or answered with something unusable.
    /// Carries the underlying error text unchanged.
    #[error("{0}")]
    Transport(String),

    #[error("Model '{model}' not found for make '{make}'")]
    ModelNotFound { make: String, model: String },
}

/// One make/model entry as returned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    #[serde(rename = "Make_ID")]
    pub make_id: i32,
    #[serde(rename = "Make_Name")]
    pub make_name: String,
    #[serde(rename = "Model_ID")]
    pub model_id: i32,
    #[serde(rename = "Model_Name")]
    pub model_name: String,
}

/// Models returned for one make, in the order the catalog sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelList(Vec<ModelRecord>);

impl ModelList {
    pub fn new(records: Vec<ModelRecord>) -> Self {
        Self(records)
    }

    /// Exact, case-sensitive match on the model name.
    pub fn find_exact(&self, model_name: &str) -> Option<&ModelRecord> {
        self.0.iter().find(|record| record.model_name == model_name)
    }

    pub fn get(&self, index: usize) -> Option<&ModelRecord> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelRecord> {
        self.0.iter()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogEnvelope {
    #[serde(rename = "Results")]
    results: Vec<ModelRecord>,
}

#[async_trait]
pub trait VehicleCatalog: Send + Sync {
    /// Fetch every model the catalog lists for `make`.
    async fn fetch_model_list(&self, make: &str) -> Result<ModelList, CatalogError>;

    /// Resolve `model_name` under `make`, failing with `ModelNotFound` when the
    /// list has no exact match (an unknown make yields an empty list).
    async fn find_model(&self, make: &str, model_name: &str) -> Result<ModelRecord, CatalogError> {
        let models = self.fetch_model_list(make).await?;
        models
            .find_exact(model_name)
            .cloned()
            .ok_or_else(|| CatalogError::ModelNotFound {
                make: make.to_string(),
                model: model_name.to_string(),
            })
    }
}

pub struct NhtsaCatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl NhtsaCatalogClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn model_list_url(&self, make: &str) -> String {
        format!(
            "{}/GetModelsForMake/{}?format=json",
            self.base_url,
            urlencoding::encode(make)
        )
    }
}

#[async_trait]
impl VehicleCatalog for NhtsaCatalogClient {
    async fn fetch_model_list(&self, make: &str) -> Result<ModelList, CatalogError> {
        let url = self.model_list_url(make);
        info!("🚗 Consultando catálogo: {}", url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "CarRatings/1.0")
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                warn!("❌ Catalog request failed: {}", e);
                CatalogError::Transport(e.to_string())
            })?;

        let envelope: CatalogEnvelope = response.json().await.map_err(|e| {
            warn!("❌ Catalog response could not be parsed: {}", e);
            CatalogError::Transport(e.to_string())
        })?;

        debug!("📄 {} models returned for make '{}'", envelope.results.len(), make);
        Ok(ModelList::new(envelope.results))
    }
}

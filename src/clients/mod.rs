//! Clients - HTTP Clients for External APIs
//!
//! This module contains HTTP clients for communicating with external APIs.

pub mod vehicle_catalog_client;

// Re-export main types for convenience
pub use vehicle_catalog_client::{
    CatalogError,
    ModelList,
    ModelRecord,
    NhtsaCatalogClient,
    VehicleCatalog,
};

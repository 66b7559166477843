//! Data transfer objects
//!
//! Request and response bodies of the HTTP API.

pub mod car_dto;
pub mod rating_dto;

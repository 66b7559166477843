//! Controllers
//!
//! Lógica de negocio: registro de cars, calificaciones y listado.

pub mod car_controller;
pub mod rating_controller;

pub use car_controller::CarController;
pub use rating_controller::RatingController;

//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema PostgreSQL.

pub mod car;
pub mod rating;

pub use car::{Car, CarWithAverage, NewCar};
pub use rating::Rating;

//! Repositories
//!
//! Persistence for cars and ratings: PostgreSQL through sqlx, and an
//! in-memory store with the same guarantees.

pub mod car_repository;
pub mod in_memory;
pub mod rating_repository;

pub use car_repository::{CarRepository, PgCarRepository};
pub use in_memory::InMemoryStore;
pub use rating_repository::{PgRatingRepository, RatingRepository};

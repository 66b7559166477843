//! Modelo de Rating

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const MIN_RATE: i32 = 1;
pub const MAX_RATE: i32 = 5;

/// Rating - mapea a la tabla ratings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Rating {
    pub id: i64,
    pub car_id: i64,
    pub rate: i32,
    pub created_at: DateTime<Utc>,
}

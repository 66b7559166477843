use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::rating::{MAX_RATE, MIN_RATE};
use crate::models::Rating;
use crate::utils::validation::{invalid, validate_integer, IntegerInput};

pub const RATE_RANGE_MESSAGE: &str = "Ensure this value is between 1 and 5.";

// Request para calificar un car (rate entre 1 y 5)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRatingRequest {
    #[validate(required(message = "This field is required."), custom = "validate_integer")]
    pub car_id: Option<IntegerInput>,

    #[validate(required(message = "This field is required."), custom = "validate_rate")]
    pub rate: Option<IntegerInput>,
}

fn validate_rate(rate: &IntegerInput) -> Result<(), ValidationError> {
    validate_integer(rate)?;
    match rate.value() {
        Some(value) if (i64::from(MIN_RATE)..=i64::from(MAX_RATE)).contains(&value) => Ok(()),
        _ => Err(invalid("range", RATE_RANGE_MESSAGE)),
    }
}

// Response de rating
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RatingResponse {
    pub car_id: i64,
    pub rate: i32,
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            car_id: rating.car_id,
            rate: rating.rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::{field_errors, INVALID_INTEGER_MESSAGE, REQUIRED_MESSAGE};

    #[test]
    fn test_missing_fields_are_reported_once_each() {
        let request: CreateRatingRequest = serde_json::from_str("{}").unwrap();
        let errors = field_errors(&request.validate().unwrap_err());

        assert_eq!(errors.len(), 2);
        assert_eq!(errors["car_id"], vec![REQUIRED_MESSAGE.to_string()]);
        assert_eq!(errors["rate"], vec![REQUIRED_MESSAGE.to_string()]);
    }

    #[test]
    fn test_rate_bounds() {
        for (rate, ok) in [(0, false), (1, true), (5, true), (6, false)] {
            let request = CreateRatingRequest {
                car_id: Some(IntegerInput::Integer(1)),
                rate: Some(IntegerInput::Integer(rate)),
            };
            assert_eq!(request.validate().is_ok(), ok, "rate {}", rate);
        }
    }

    #[test]
    fn test_mistyped_fields_are_reported_per_field() {
        let request: CreateRatingRequest =
            serde_json::from_str(r#"{"car_id": "abc", "rate": 3.5}"#).unwrap();
        let errors = field_errors(&request.validate().unwrap_err());

        assert_eq!(errors["car_id"], vec![INVALID_INTEGER_MESSAGE.to_string()]);
        assert_eq!(errors["rate"], vec![INVALID_INTEGER_MESSAGE.to_string()]);
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let request: CreateRatingRequest =
            serde_json::from_str(r#"{"car_id": "7", "rate": "4"}"#).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.car_id.and_then(IntegerInput::value), Some(7));
        assert_eq!(request.rate.and_then(IntegerInput::value), Some(4));
    }
}

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Car, CarWithAverage};
use crate::utils::validation::{validate_text, TextInput};

// Request para registrar un car
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarRequest {
    #[validate(required(message = "This field is required."), custom = "validate_text")]
    pub make: Option<TextInput>,

    #[validate(required(message = "This field is required."), custom = "validate_text")]
    pub model: Option<TextInput>,
}

// Response al crear un car, con los nombres de campo del catálogo
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CarCreatedResponse {
    pub id: i64,
    #[serde(rename = "Make_ID")]
    pub make_id: i32,
    #[serde(rename = "Make_Name")]
    pub make_name: String,
    #[serde(rename = "Model_ID")]
    pub model_id: i32,
    #[serde(rename = "Model_Name")]
    pub model_name: String,
}

impl From<Car> for CarCreatedResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            make_id: car.make_id,
            make_name: car.make,
            model_id: car.model_id,
            model_name: car.model,
        }
    }
}

// Response de listado con la calificación media
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CarResponse {
    pub id: i64,
    pub make: String,
    pub make_id: i32,
    pub model: String,
    pub model_id: i32,
    pub average_rate: Option<f64>,
}

impl From<CarWithAverage> for CarResponse {
    fn from(car: CarWithAverage) -> Self {
        Self {
            id: car.id,
            make: car.make,
            make_id: car.make_id,
            model: car.model,
            model_id: car.model_id,
            average_rate: car.average_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::{field_errors, BLANK_MESSAGE, INVALID_STRING_MESSAGE};

    #[test]
    fn test_whitespace_only_is_blank() {
        let request: CreateCarRequest =
            serde_json::from_str(r#"{"make": " honda ", "model": "   "}"#).unwrap();
        assert_eq!(
            request.make.as_ref().and_then(TextInput::as_str),
            Some("honda")
        );

        let errors = field_errors(&request.validate().unwrap_err());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["model"], vec![BLANK_MESSAGE.to_string()]);
    }

    #[test]
    fn test_non_text_make_is_rejected_per_field() {
        let request: CreateCarRequest =
            serde_json::from_str(r#"{"make": ["honda"], "model": "CBX"}"#).unwrap();
        let errors = field_errors(&request.validate().unwrap_err());
        assert_eq!(errors["make"], vec![INVALID_STRING_MESSAGE.to_string()]);
    }
}

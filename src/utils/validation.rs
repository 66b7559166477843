//! Utilidades de validación
//!
//! Request bodies are deserialized with every field optional and then checked
//! with `validator`, so a missing or mistyped field is reported per field
//! instead of as a deserialization failure. Bodies arrive as JSON or as
//! urlencoded forms.

use std::borrow::Cow;
use std::collections::BTreeMap;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    Form, Json,
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::utils::errors::AppError;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const BLANK_MESSAGE: &str = "This field may not be blank.";
pub const INVALID_STRING_MESSAGE: &str = "Not a valid string.";
pub const INVALID_INTEGER_MESSAGE: &str = "A valid integer is required.";

/// `{"field": ["message", ...]}`, ordered by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Flatten validator output into the per-field message map returned to clients.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

pub fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Text field as submitted. Surrounding whitespace is trimmed and numbers are
/// taken as their decimal text; anything else is kept as `Invalid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextInput {
    Text(String),
    Invalid,
}

impl TextInput {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TextInput::Text(text) => Some(text),
            TextInput::Invalid => None,
        }
    }
}

impl<'de> Deserialize<'de> for TextInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => TextInput::Text(text.trim().to_string()),
            Value::Number(number) => TextInput::Text(number.to_string()),
            _ => TextInput::Invalid,
        })
    }
}

/// Integer field as submitted. Accepts integers, floats without a fractional
/// part and numeric strings such as `"5"` or `"5.0"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IntegerInput {
    Integer(i64),
    Invalid,
}

impl IntegerInput {
    pub fn value(self) -> Option<i64> {
        match self {
            IntegerInput::Integer(value) => Some(value),
            IntegerInput::Invalid => None,
        }
    }

    fn parse(text: &str) -> Self {
        let text = text.trim();
        // "5." and "5.00" read as 5
        let digits = match text.split_once('.') {
            Some((whole, fraction)) if fraction.chars().all(|c| c == '0') => whole,
            Some(_) => return IntegerInput::Invalid,
            None => text,
        };
        digits
            .parse()
            .map(IntegerInput::Integer)
            .unwrap_or(IntegerInput::Invalid)
    }
}

impl<'de> Deserialize<'de> for IntegerInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(number) => match number.as_i64() {
                Some(value) => IntegerInput::Integer(value),
                None => IntegerInput::parse(&number.to_string()),
            },
            Value::String(text) => IntegerInput::parse(&text),
            _ => IntegerInput::Invalid,
        })
    }
}

pub fn validate_text(value: &TextInput) -> Result<(), ValidationError> {
    match value {
        TextInput::Text(text) if text.is_empty() => Err(invalid("blank", BLANK_MESSAGE)),
        TextInput::Text(_) => Ok(()),
        TextInput::Invalid => Err(invalid("invalid", INVALID_STRING_MESSAGE)),
    }
}

pub fn validate_integer(value: &IntegerInput) -> Result<(), ValidationError> {
    match value {
        IntegerInput::Integer(_) => Ok(()),
        IntegerInput::Invalid => Err(invalid("invalid", INVALID_INTEGER_MESSAGE)),
    }
}

/// Body extractor that reads JSON or an urlencoded form, depending on the
/// `Content-Type`, and runs `Validate` before the handler sees the value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedBody<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = if is_form(req.headers()) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            value
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            value
        };
        value.validate()?;
        Ok(ValidatedBody(value))
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

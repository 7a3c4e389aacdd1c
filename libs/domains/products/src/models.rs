use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation;

/// Product as stored and as returned by the list operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

/// Product together with the identifier the store assigned to it
#[derive(Debug, Clone, PartialEq)]
pub struct StoredProduct {
    pub id: String,
    pub product: Product,
}

/// Candidate product as sent by the caller.
///
/// Only the `name` and `price` members of a JSON object are read; anything
/// else in the payload is ignored. A field of the wrong JSON type is read as
/// absent, and a payload that is not an object reads as an empty input, so
/// validation always gets to classify it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate, ToSchema)]
pub struct ProductInput {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, range(exclusive_min = 0.0))]
    pub price: Option<f64>,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
        }
    }

    /// Validate and turn into a storable [`Product`]
    pub fn into_product(self) -> Result<Product, ErrorCode> {
        match (validation::validate(&self), self.name, self.price) {
            (ErrorCode::Ok, Some(name), Some(price)) => Ok(Product { name, price }),
            (ErrorCode::Ok, None, _) => Err(ErrorCode::MissingName),
            (ErrorCode::Ok, _, None) => Err(ErrorCode::InvalidPrice),
            (code, _, _) => Err(code),
        }
    }
}

impl From<&Value> for ProductInput {
    fn from(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };

        Self {
            name: fields.get("name").and_then(Value::as_str).map(str::to_owned),
            price: fields.get("price").and_then(Value::as_f64),
        }
    }
}

impl<'de> Deserialize<'de> for ProductInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from(&value))
    }
}

/// Outcome of validating a [`ProductInput`]
///
/// The numeric value is stable and only used as a log field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum ErrorCode {
    Ok = 0,
    MissingName = 1,
    InvalidPrice = 2,
}

impl ErrorCode {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// Language used for caller-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Locale {
    #[default]
    #[strum(to_string = "en")]
    En,
    #[strum(to_string = "pt-BR", serialize = "pt")]
    PtBr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatePayload {
    /// Identifier of the inserted product; null when nothing was written
    #[serde(rename = "docId")]
    pub doc_id: Option<String>,
}

/// Reply of the create operation.
///
/// `status` is `SUCCESS` exactly when `payload.docId` holds an identifier;
/// the two constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResponseEnvelope {
    status: EnvelopeStatus,
    message: String,
    payload: CreatePayload,
}

impl ResponseEnvelope {
    pub fn success(doc_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: message.into(),
            payload: CreatePayload {
                doc_id: Some(doc_id.into()),
            },
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message: message.into(),
            payload: CreatePayload { doc_id: None },
        }
    }

    pub fn status(&self) -> EnvelopeStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn doc_id(&self) -> Option<&str> {
        self.payload.doc_id.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.status == EnvelopeStatus::Success
    }
}

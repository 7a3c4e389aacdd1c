//! Classification of a candidate product.
//!
//! Rules are checked in order and the first failing rule wins:
//!
//! 1. `name` must be present and non-empty, otherwise [`ErrorCode::MissingName`]
//! 2. `price` must be present, a number and strictly positive, otherwise
//!    [`ErrorCode::InvalidPrice`]
//!
//! A name made only of whitespace is accepted.

use validator::{Validate, ValidationErrors};

use crate::models::{ErrorCode, ProductInput};

pub fn validate(input: &ProductInput) -> ErrorCode {
    let code = match input.validate() {
        Ok(()) => ErrorCode::Ok,
        Err(errors) => classify(&errors),
    };

    // NaN compares false against every bound, so check it explicitly
    match (code, input.price) {
        (ErrorCode::Ok, Some(price)) if price.is_nan() => ErrorCode::InvalidPrice,
        _ => code,
    }
}

fn classify(errors: &ValidationErrors) -> ErrorCode {
    let fields = errors.field_errors();
    if fields.contains_key("name") {
        ErrorCode::MissingName
    } else if fields.contains_key("price") {
        ErrorCode::InvalidPrice
    } else {
        ErrorCode::Ok
    }
}

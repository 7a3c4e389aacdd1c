use axum::response::{IntoResponse, Response};
use axum_helpers::CallableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Store failures reach the caller as a generic callable error; the detail
/// only goes to the log.
impl From<ProductError> for CallableError {
    fn from(err: ProductError) -> Self {
        tracing::error!(error = %err, "Product operation failed");
        CallableError::internal()
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        CallableError::from(self).into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Store(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::CallableStatus;

    #[test]
    fn test_store_error_hides_detail() {
        let err = CallableError::from(ProductError::Store("E11000 duplicate key".into()));
        assert_eq!(err, CallableError::internal());
    }

    #[test]
    fn test_internal_error_maps_to_internal_status() {
        let err = CallableError::from(ProductError::Internal("unexpected id".into()));
        assert_eq!(err.status, CallableStatus::Internal);
        assert_eq!(err.message, "internal");
    }

    #[test]
    fn test_mongo_error_conversion() {
        let err: ProductError = mongodb::error::Error::custom("boom").into();
        assert!(matches!(err, ProductError::Store(_)));
    }
}

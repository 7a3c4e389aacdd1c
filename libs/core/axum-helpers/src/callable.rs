//! Remote-callable wire protocol.
//!
//! Every operation is a `POST` whose JSON body wraps the argument in `data`:
//!
//! ```json
//! { "data": { "name": "Chair", "price": 49.9 } }
//! ```
//!
//! A completed call answers `200` with the return value under `result`. A call
//! the host could not complete answers with a non-2xx status and an `error`
//! object:
//!
//! ```json
//! { "error": { "status": "INTERNAL", "message": "internal" } }
//! ```

use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use utoipa::ToSchema;

/// Status codes a callable operation can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallableStatus {
    /// The request body is malformed
    InvalidArgument,
    /// No operation is registered under the requested name
    NotFound,
    /// The operation failed for a reason the caller cannot fix
    Internal,
}

impl CallableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::NotFound => "NOT_FOUND",
            Self::Internal => "INTERNAL",
        }
    }

    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidArgument => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for CallableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure returned to the caller as `{"error": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, thiserror::Error)]
#[error("{status}: {message}")]
pub struct CallableError {
    pub status: CallableStatus,
    pub message: String,
}

impl CallableError {
    pub fn new(status: CallableStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(CallableStatus::InvalidArgument, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(CallableStatus::NotFound, message)
    }

    /// Generic failure; the message never carries backend details
    pub fn internal() -> Self {
        Self::new(CallableStatus::Internal, "internal")
    }
}

/// Wire shape of a failed call
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CallableErrorBody {
    pub error: CallableError,
}

impl IntoResponse for CallableError {
    fn into_response(self) -> Response {
        let status = self.status.http_status();
        (status, Json(CallableErrorBody { error: self })).into_response()
    }
}

/// Wire shape of a completed call
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CallableResult<T> {
    pub result: T,
}

/// Handler return value serialized as `{"result": ...}` with `200 OK`.
pub struct CallableResponse<T>(pub T);

impl<T: Serialize> IntoResponse for CallableResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(CallableResult { result: self.0 })).into_response()
    }
}

#[derive(Deserialize)]
struct CallableBody<T> {
    data: Option<T>,
}

/// Extracts the `data` argument of a callable request.
///
/// A missing or `null` `data` yields `T::default()`. A body that is not JSON,
/// or whose `data` cannot be read as `T`, is rejected with `INVALID_ARGUMENT`.
///
/// ```ignore
/// async fn echo(CallableRequest(input): CallableRequest<Input>) -> CallableResponse<Input> {
///     CallableResponse(input)
/// }
/// ```
pub struct CallableRequest<T>(pub T);

impl<T, S> FromRequest<S> for CallableRequest<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = CallableError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<CallableBody<T>>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "Rejected callable request body");
                CallableError::invalid_argument("Bad Request")
            })?;

        Ok(CallableRequest(body.data.unwrap_or_default()))
    }
}

/// Fallback for paths that name no operation
pub async fn function_not_found() -> CallableError {
    CallableError::not_found("function not found")
}

/// Fallback for an operation path reached with a method other than `POST`
pub async fn method_not_allowed() -> CallableError {
    CallableError::invalid_argument("Bad Request")
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejected listing filter input.
///
/// Every variant is caused by the caller's query parameters and maps to
/// 400 Bad Request with the error's message as body.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// `by_server_id` filter left no servers in the result set.
    #[error("Server with id {0} not found")]
    ServerNotFound(i32),

    /// `by_server_id` is not a valid server identifier.
    #[error("Server id '{0}' is not a valid identifier")]
    InvalidServerId(String),

    /// `qty` is not a non-negative integer.
    #[error("Quantity '{0}' is not a non-negative integer")]
    InvalidQuantity(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

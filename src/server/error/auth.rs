use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user is logged in for this session.
    ///
    /// Raised when an endpoint or filter requires an identity and the session
    /// has none. Results in a 401 Unauthorized response.
    #[error("Authentication credentials were not provided")]
    NotAuthenticated,

    /// Session references a user ID that no longer exists in the database.
    ///
    /// Results in a 401 Unauthorized response, the client must log in again.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the OAuth2 authorization code for a token failed.
    ///
    /// Results in a 500 Internal Server Error, details are logged server-side.
    #[error("Failed to exchange OAuth2 authorization code: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotAuthenticated` / `UserNotInDatabase` → 401 Unauthorized
/// - `CsrfValidationFailed` → 400 Bad Request with "There was an issue logging you in"
/// - `TokenExchange` → 500 Internal Server Error with a generic message
///
/// Client-facing messages stay generic to avoid leaking why a login failed.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: AuthError::NotAuthenticated.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::TokenExchange(reason) => {
                tracing::error!("OAuth2 token exchange failed: {}", reason);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

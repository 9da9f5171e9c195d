use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{
            __path_callback, __path_get_user, __path_login, __path_logout, callback, get_user,
            login, logout,
        },
        server::{__path_list_servers, list_servers},
    },
    error::AppError,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "djchat API", description = "Server listing and Discord login"),
    tags(
        (name = "server", description = "Server listing"),
        (name = "auth", description = "Discord OAuth2 login and sessions")
    )
)]
struct ApiDoc;

/// Builds the API router.
///
/// The OpenAPI document is served at `/api/schema` and its Swagger UI at
/// `/api/schema/ui`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(list_servers))
        .routes(routes!(login))
        .routes(routes!(callback))
        .routes(routes!(logout))
        .routes(routes!(get_user))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/schema/ui").url("/api/schema", api))
        .fallback(not_found)
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

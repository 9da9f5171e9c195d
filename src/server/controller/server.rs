use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        server::{ServerDto, ServerListQuery},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::server::ServerFilter,
        service::server::ServerService, state::AppState,
    },
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// List servers.
///
/// Returns servers narrowed by the optional query parameters, applied in order:
/// category, membership of the caller, member count annotation, quantity and
/// finally a single server ID. With no parameters every server is returned.
///
/// # Access Control
/// - Public, except `by_user=true` which requires a logged in user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Caller's session, used to resolve `by_user`
/// - `query` - Listing parameters
///
/// # Returns
/// - `200 OK` - Matching servers ordered by ascending ID
/// - `400 Bad Request` - Malformed `qty` or `by_server_id`, or server ID not found
/// - `401 Unauthorized` - `by_user=true` without a logged in user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/server/select",
    tag = SERVER_TAG,
    params(ServerListQuery),
    responses(
        (status = 200, description = "Matching servers", body = Vec<ServerDto>),
        (status = 400, description = "Invalid filter value or server not found", body = ErrorDto),
        (status = 401, description = "Authentication required for by_user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_servers(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ServerListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .current()
        .await?
        .map(|user| user.id);

    let filter = ServerFilter::from_query(caller, query)?;

    let servers = ServerService::new(&state.db).list(&filter).await?;

    let servers: Vec<ServerDto> = servers
        .into_iter()
        .map(|server| server.into_dto(filter.with_num_members))
        .collect();

    Ok((StatusCode::OK, Json(servers)))
}

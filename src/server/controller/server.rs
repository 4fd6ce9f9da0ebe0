use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, server::ServerDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::server::ServerListQuery,
        service::server::ServerService, state::AppState,
    },
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// Query parameters accepted by the server listing.
///
/// Boolean flags are only set by the literal value `true`. Empty values count as absent.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ServerListParams {
    /// Only list servers in the category with exactly this name
    pub category: Option<String>,
    /// `true` to only list servers the caller is a member of (requires authentication)
    pub by_user: Option<String>,
    /// Maximum number of servers to return
    pub qty: Option<String>,
    /// Only list the server with this id (requires authentication)
    pub by_serverid: Option<String>,
    /// `true` to include each server's member count
    pub with_num_members: Option<String>,
}

impl From<ServerListParams> for ServerListQuery {
    fn from(params: ServerListParams) -> Self {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            category: present(params.category),
            by_user: params.by_user.as_deref() == Some("true"),
            with_num_members: params.with_num_members.as_deref() == Some("true"),
            qty: present(params.qty),
            by_serverid: present(params.by_serverid),
        }
    }
}

/// List servers.
///
/// Returns the servers matching the query parameters. Filters apply in a fixed order:
/// category, membership, member count annotation, quantity, then server id. Because the
/// quantity limit runs before the id lookup, an id outside the first `qty` servers is
/// reported as missing.
///
/// # Access Control
/// - Public, except `by_user` and `by_serverid` which require an authenticated session
///
/// # Returns
/// - `200 OK` - Matching servers
/// - `400 Bad Request` - `qty` or `by_serverid` is not a valid integer
/// - `401 Unauthorized` - Identity-scoped filter requested without authentication
/// - `404 Not Found` - No server with the requested id in the filtered listing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/servers",
    tag = SERVER_TAG,
    params(ServerListParams),
    responses(
        (status = 200, description = "Successfully listed servers", body = Vec<ServerDto>),
        (status = 400, description = "Invalid quantity or server ID", body = ErrorDto),
        (status = 401, description = "Authentication required for this filter", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_servers(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ServerListParams>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &session).identity().await?;

    let service = ServerService::new(&state.db);

    let query = ServerListQuery::from(params);

    let servers = service.list(&query, identity).await?;

    Ok((
        StatusCode::OK,
        Json(
            servers
                .into_iter()
                .map(|s| s.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

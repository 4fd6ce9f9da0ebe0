use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{category, server},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Server Directory API",
        description = "Browse categories and filter the server listing"
    ),
    tags(
        (name = "server", description = "Server listing"),
        (name = "category", description = "Server categories")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(server::list_servers))
        .routes(routes!(category::list_categories))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}

use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use mhs::kernel::server::ApiState;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let static_dir = state.config.storage.static_dir.clone();
    let api = ApiDoc::openapi();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(mhs::server::router::system_router())
        .merge(mhs::features::activities::routes::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    // Create the Scalar UI routes
    let scalar_routes = Scalar::with_url("/api", api_doc);

    // Merge all routes, then attach the front-end entry points
    Router::new()
        .merge(openapi_routes)
        .merge(scalar_routes)
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .nest_service("/static", ServeDir::new(static_dir))
}

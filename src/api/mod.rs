mod handlers;

use std::path::PathBuf;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::catalog::Catalog;

pub use handlers::ErrorBody;

/// Build the HTTP router.
///
/// - `/api/stories` and `/api/story/{name}` expose the catalog and slides.
/// - `/story_assets/...` serves raw files from the catalog root.
/// - Anything else is looked up in `static_dir` when one is given.
pub fn create_router(catalog: Catalog, static_dir: Option<PathBuf>) -> Router {
    let assets = ServeDir::new(catalog.root());

    let api = Router::new()
        .route("/stories", get(handlers::list_stories))
        .route("/story/{name}", get(handlers::get_story));

    let router = Router::new()
        .nest("/api", api)
        .route("/health", get(handlers::health))
        .nest_service("/story_assets", assets)
        .with_state(catalog);

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}

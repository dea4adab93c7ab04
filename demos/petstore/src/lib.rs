#![allow(missing_docs)]
use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use axum::routing::get;
use redoc_mount::{ApiDocument, LogoOptions, RawOptions, RouterExt};
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;

mod cats;
mod errors;

pub use self::cats::Cat;
pub use self::errors::ApiErrorResponse;

/// Where the ReDoc viewer is mounted
pub const DOCS_PATH: &str = "docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cats example",
        description = "The cats API description",
        version = "1.0"
    ),
    paths(cats::list_cats, cats::get_cat),
    components(schemas(Cat, ApiErrorResponse)),
    tags((name = "cats", description = "Everything about cats"))
)]
pub struct ApiDoc;

/// The ReDoc options of the petstore
pub fn redoc_options() -> Value {
    let logo = LogoOptions {
        url: Some("https://redocly.github.io/redoc/petstore-logo.png".to_string()),
        background_color: Some("#F0F0F0".to_string()),
        alt_text: Some("PetStore Logo".to_string()),
        href: None,
    };

    RawOptions::new()
        .with_title("Redoc Module")
        .with_logo(&logo)
        .with("sortPropsAlphabetically", true)
        .with("hideDownloadButton", false)
        .with("hideHostname", false)
        .with("noAutoAuth", true)
        .with("pathInMiddlePanel", true)
        .with_basic_auth("admin", "123")
        .with_tag_group("Core resources", ["cats"])
        .into()
}

/// The application router, with ReDoc mounted at [`DOCS_PATH`]
///
/// # Errors
///
/// fail if the OpenAPI document cannot be converted
/// fail if ReDoc cannot be mounted
pub fn app() -> anyhow::Result<Router> {
    let document = ApiDocument::try_from(ApiDoc::openapi()).context("converting OpenAPI")?;

    let router = Router::new()
        .nest("/cats", cats::cat_router())
        .route("/health", get(|| async { "OK" }))
        .redoc(DOCS_PATH, document, &redoc_options())
        .context("mounting ReDoc")?;

    Ok(router)
}

/// Launch the server
///
/// # Errors
///
/// fail if the socket cannot be created (e.g. port already used)
/// fail if the server cannot be launch
pub async fn run(addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("opening {addr}"))?;
    info!("Using address {addr}, ReDoc on http://{addr}/{DOCS_PATH}/");

    let app = app()?.layer(TraceLayer::new_for_http());
    axum::serve(listener, app.into_make_service())
        .await
        .context("starting server")?;

    Ok(())
}

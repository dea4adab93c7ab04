//! # ReDoc mount
//!
//! Serve a [ReDoc](https://github.com/Redocly/redoc) viewer for an already generated
//! OpenAPI document, and expose the document itself as JSON next to it.
//!
//! The setup pipeline is small:
//! 1. the raw (loosely typed) options are validated and defaulted ([`validate_options`]),
//! 2. the document receives the ReDoc vendor extensions ([`add_vendor_extensions`]),
//! 3. two `GET` routes are registered on an [`HttpAdapter`]: the HTML viewer and the JSON document.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use axum::Router;
//! use redoc_mount::{ApiDocument, RawOptions, RouterExt};
//! use utoipa::openapi::{InfoBuilder, OpenApiBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let openapi = OpenApiBuilder::new()
//!     .info(InfoBuilder::new().title("Cats API").version("1.0.0").build())
//!     .build();
//! let document = ApiDocument::try_from(&openapi)?;
//!
//! let options = RawOptions::new()
//!     .with_logo_url("https://redocly.github.io/redoc/petstore-logo.png")
//!     .with_basic_auth("admin", "secret");
//!
//! // ReDoc is served at `/docs/`, the document at `/docs/swagger.json`
//! let app: Router = Router::new().redoc("docs", document, &options.into())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Options
//!
//! Every recognized option has a default, see [`RedocOptions`].
//! Validation is fail-fast: the first invalid field is reported with its path,
//! e.g. `"logo.url" must be a valid uri`.
//!
//! ## Adapters
//!
//! Routes are registered through the [`HttpAdapter`] trait.
//! With the `axum` feature (enabled by default) [`AxumAdapter`] wraps an [`axum::Router`].
//! Adapters reporting [`AdapterKind::Fastify`] are rejected with [`RedocError::UnsupportedAdapter`].

mod augment;
mod auth;
mod document;
mod error;
mod options;
mod render;
mod schema;
mod setup;

#[cfg(feature = "yaml")]
#[cfg_attr(docsrs, doc(cfg(feature = "yaml")))]
mod yaml;

pub use self::augment::{LOGO_EXTENSION, TAG_GROUPS_EXTENSION, add_vendor_extensions};
pub use self::auth::BasicAuthGate;
pub use self::document::{ApiDocument, DocumentError};
pub use self::error::RedocError;
pub use self::options::{
    AuthOptions, LogoOptions, RawOptions, RedocOptions, SecretString, TagGroupOptions,
};
pub use self::render::{ViewerOptions, render_page};
pub use self::schema::{Rule, ValidationError, validate_options};
pub use self::setup::{AdapterKind, DocsEndpoint, HttpAdapter, RedocModule};

#[cfg(feature = "axum")]
#[cfg_attr(docsrs, doc(cfg(feature = "axum")))]
pub use self::setup::{AxumAdapter, RouterExt};

use std::sync::Arc;

use http::header::{CONTENT_SECURITY_POLICY, CONTENT_TYPE, LOCATION};
use http::request::Parts;
use http::{HeaderValue, Response, StatusCode};
use tracing::debug;

use crate::BasicAuthGate;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Policy allowing the ReDoc bundle, its web worker, fonts and images.
const CONTENT_SECURITY_POLICY_VALUE: &str = "default-src * 'unsafe-inline' 'unsafe-eval'; \
    script-src * 'unsafe-inline' 'unsafe-eval'; \
    child-src * 'unsafe-inline' 'unsafe-eval' blob:; \
    worker-src * 'unsafe-inline' 'unsafe-eval' blob:; \
    connect-src * 'unsafe-inline'; \
    img-src * data: blob: 'unsafe-inline'; \
    frame-src *; \
    style-src * 'unsafe-inline';";

/// The family of the host HTTP server.
///
/// Supplied by the integration layer instead of being guessed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AdapterKind {
    /// A router accepting plain `GET` handlers (axum, express-like).
    Router,
    /// A Fastify-style server, not supported yet.
    Fastify,
}

/// A host HTTP server able to serve the ReDoc routes.
///
/// # Example
///
/// ```rust
/// use redoc_mount::{AdapterKind, DocsEndpoint, HttpAdapter};
///
/// /// Collects the routes, e.g. to register them later on another router.
/// #[derive(Default)]
/// struct Collector {
///     routes: Vec<(String, DocsEndpoint)>,
/// }
///
/// impl HttpAdapter for Collector {
///     fn kind(&self) -> AdapterKind {
///         AdapterKind::Router
///     }
///
///     fn get(&mut self, path: &str, endpoint: DocsEndpoint) {
///         self.routes.push((path.to_string(), endpoint));
///     }
/// }
/// ```
pub trait HttpAdapter {
    /// The server family.
    fn kind(&self) -> AdapterKind;

    /// Registers a `GET` route.
    fn get(&mut self, path: &str, endpoint: DocsEndpoint);
}

#[derive(Debug)]
enum Endpoint {
    Page {
        html: String,
        gate: Option<BasicAuthGate>,
    },
    Document {
        json: String,
    },
}

/// A framework-agnostic `GET` handler serving either the ReDoc page or the JSON document.
///
/// Cloning is cheap: the rendered content is shared.
#[derive(Debug, Clone)]
pub struct DocsEndpoint(Arc<Endpoint>);

impl DocsEndpoint {
    pub(crate) fn page(html: String, gate: Option<BasicAuthGate>) -> Self {
        Self(Arc::new(Endpoint::Page { html, gate }))
    }

    pub(crate) fn document(json: String) -> Self {
        Self(Arc::new(Endpoint::Document { json }))
    }

    /// Whether this endpoint serves the HTML page.
    #[must_use]
    pub fn is_page(&self) -> bool {
        matches!(*self.0, Endpoint::Page { .. })
    }

    /// Answers a request.
    ///
    /// The page endpoint redirects to the trailing-slash form of the request path
    /// (with a relative `Location`), then applies the Basic auth gate (if any)
    /// before returning the HTML.
    /// The document endpoint always returns the JSON document.
    #[must_use]
    pub fn respond(&self, request: &Parts) -> Response<String> {
        match &*self.0 {
            Endpoint::Page { html, gate } => {
                let path = request.uri.path();
                if !path.ends_with('/') {
                    return redirect_with_slash(request);
                }
                if let Some(gate) = gate
                    && let Err(challenge) = gate.check(&request.headers)
                {
                    return challenge;
                }
                let mut response = with_content_type(html.clone(), HTML_CONTENT_TYPE);
                response.headers_mut().insert(
                    CONTENT_SECURITY_POLICY,
                    HeaderValue::from_static(CONTENT_SECURITY_POLICY_VALUE),
                );
                response
            }
            Endpoint::Document { json } => with_content_type(json.clone(), JSON_CONTENT_TYPE),
        }
    }
}

fn with_content_type(body: String, content_type: &'static str) -> Response<String> {
    let mut response = Response::new(body);
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

/// Redirects to the trailing-slash form of the request path.
///
/// The `Location` is relative to the last segment, so the redirect stays correct
/// when the router is nested under a prefix the handler does not see.
fn redirect_with_slash(request: &Parts) -> Response<String> {
    let path = request.uri.path();
    let segment = path.rsplit('/').next().unwrap_or_default();
    // a segment containing `:` would be read as a URL scheme
    let prefix = if segment.contains(':') { "./" } else { "" };
    let location = match request.uri.query() {
        Some(query) => format!("{prefix}{segment}/?{query}"),
        None => format!("{prefix}{segment}/"),
    };
    debug!(%path, %location, "redirecting to trailing slash");

    let mut response = Response::new(String::new());
    match HeaderValue::try_from(location) {
        Ok(location) => {
            *response.status_mut() = StatusCode::MOVED_PERMANENTLY;
            response.headers_mut().insert(LOCATION, location);
        }
        Err(_) => *response.status_mut() = StatusCode::BAD_REQUEST,
    }
    response
}

use axum::Router;
use axum::body::Body;
use axum::extract::Request;
use axum::routing::get;
use serde_json::Value;

use super::{AdapterKind, DocsEndpoint, HttpAdapter, RedocModule};
use crate::{ApiDocument, RedocError};

/// [`HttpAdapter`] registering the ReDoc routes on an [`axum::Router`].
#[derive(Debug)]
pub struct AxumAdapter<S = ()> {
    router: Router<S>,
}

impl<S> AxumAdapter<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Wraps a router.
    pub fn new(router: Router<S>) -> Self {
        Self { router }
    }

    /// Returns the router, with the registered routes.
    pub fn into_router(self) -> Router<S> {
        self.router
    }
}

impl<S> Default for AxumAdapter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(Router::new())
    }
}

impl<S> HttpAdapter for AxumAdapter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn kind(&self) -> AdapterKind {
        AdapterKind::Router
    }

    fn get(&mut self, path: &str, endpoint: DocsEndpoint) {
        let handler = move |request: Request| {
            let endpoint = endpoint.clone();
            async move {
                let (parts, _body) = request.into_parts();
                endpoint.respond(&parts).map(Body::from)
            }
        };
        let router = std::mem::take(&mut self.router);
        self.router = router.route(path, get(handler));
    }
}

/// Mounts ReDoc on an [`axum::Router`].
pub trait RouterExt: Sized {
    /// Serves ReDoc at `path` and the document at `path/<docName>.json`.
    ///
    /// See [`RedocModule::setup`].
    ///
    /// # Errors
    ///
    /// Fails if the options are invalid or the page cannot be rendered.
    fn redoc(self, path: &str, document: ApiDocument, options: &Value) -> Result<Self, RedocError>;
}

impl<S> RouterExt for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn redoc(
        self,
        path: &str,
        mut document: ApiDocument,
        options: &Value,
    ) -> Result<Self, RedocError> {
        let mut adapter = AxumAdapter::new(self);
        RedocModule::setup(path, &mut adapter, &mut document, options)?;
        Ok(adapter.into_router())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode, header};
    use serde_json::json;
    use tower::ServiceExt;

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        String::from_utf8(bytes.to_vec()).expect("UTF-8 body")
    }

    fn document() -> ApiDocument {
        ApiDocument::try_from(json!({
            "openapi": "3.1.0",
            "info": { "title": "Cats", "version": "1.0" },
            "paths": {}
        }))
        .expect("an object")
    }

    #[tokio::test]
    async fn should_serve_page_through_router() -> anyhow::Result<()> {
        let app = Router::new().redoc("docs", document(), &json!({}))?;

        let response = app
            .oneshot(Request::builder().uri("/docs/").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("<title>Cats</title>"));
        Ok(())
    }

    #[tokio::test]
    async fn should_redirect_through_router() -> anyhow::Result<()> {
        let app = Router::new().redoc("docs", document(), &json!({}))?;

        let response = app
            .oneshot(Request::builder().uri("/docs").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some("docs/")
        );
        Ok(())
    }

    #[tokio::test]
    async fn should_redirect_inside_nested_router() -> anyhow::Result<()> {
        let docs = Router::new().redoc("docs", document(), &json!({}))?;
        let app = Router::new().nest("/api", docs);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/docs").body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        let target = url::Url::parse("http://localhost/api/docs")?.join(location)?;
        assert_eq!(target.path(), "/api/docs/");

        let response = app
            .oneshot(Request::builder().uri(target.path()).body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn should_redirect_mount_path_with_trailing_slash() -> anyhow::Result<()> {
        let app = Router::new().redoc("docs/", document(), &json!({}))?;

        let response = app
            .oneshot(Request::builder().uri("/docs").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        Ok(())
    }

    #[tokio::test]
    async fn should_serve_encoded_mount_path() -> anyhow::Result<()> {
        let app = Router::new().redoc("my docs", document(), &json!({}))?;

        let page = app
            .clone()
            .oneshot(Request::builder().uri("/my%20docs/").body(Body::empty())?)
            .await?;
        let json = app
            .oneshot(
                Request::builder()
                    .uri("/my%20docs/swagger.json")
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(page.status(), StatusCode::OK);
        assert_eq!(json.status(), StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn should_keep_existing_routes() -> anyhow::Result<()> {
        let app = Router::new()
            .route("/health", get(|| async { "OK" }))
            .redoc("docs", document(), &json!({}))?;

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        Ok(())
    }
}

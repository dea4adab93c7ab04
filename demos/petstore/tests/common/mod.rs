#![allow(dead_code, missing_docs, clippy::expect_used)]
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use headers::{Authorization, HeaderMapExt};
use rstest::fixture;
use tower::ServiceExt;
use tracing::{Level, debug};

/// Routes the server logs to the test output; later calls keep the first subscriber.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init()
        .is_ok();
    if installed {
        debug!("test subscriber installed");
    }
}

#[derive(Debug, Clone)]
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn start() -> anyhow::Result<Self> {
        let router = petstore::app()?;
        Ok(Self { router })
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    pub async fn get_with_credentials(
        &self,
        uri: &str,
        user: &str,
        password: &str,
    ) -> Response<Body> {
        let mut request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        request
            .headers_mut()
            .typed_insert(Authorization::basic(user, password));
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible router")
    }
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    String::from_utf8(bytes.to_vec()).expect("UTF-8 body")
}

#[fixture]
pub fn app() -> TestApp {
    init_tracing();
    match TestApp::start() {
        Ok(app) => app,
        Err(error) => {
            panic!("fail to start test app: {error:?}");
        }
    }
}

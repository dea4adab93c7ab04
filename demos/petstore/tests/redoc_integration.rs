#![allow(missing_docs, clippy::expect_used)]
use axum::http::{StatusCode, header};
use insta::assert_json_snapshot;
use rstest::rstest;
use serde_json::{Value, json};

mod common;
use self::common::*;

#[rstest]
#[tokio::test]
async fn should_redirect_docs_to_trailing_slash(app: TestApp) {
    let response = app.get("/docs").await;

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("docs/")
    );
}

#[rstest]
#[tokio::test]
async fn should_challenge_without_credentials(app: TestApp) {
    let response = app.get("/docs/").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .and_then(|value| value.to_str().ok()),
        Some(r#"Basic realm="Restricted""#)
    );
}

#[rstest]
#[tokio::test]
async fn should_reject_wrong_password(app: TestApp) {
    let response = app.get_with_credentials("/docs/", "admin", "456").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[tokio::test]
async fn should_serve_page_with_credentials(app: TestApp) {
    let response = app.get_with_credentials("/docs/", "admin", "123").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/html; charset=utf-8")
    );
    let body = body_text(response).await;
    assert!(body.contains("<title>Redoc Module</title>"));
    assert!(body.contains(r#""/docs/swagger.json""#));
    assert!(body.contains(r#""sortPropsAlphabetically":true"#));
    assert!(!body.contains("123"));
}

#[rstest]
#[tokio::test]
async fn should_serve_document_without_credentials(app: TestApp) {
    let response = app.get("/docs/swagger.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("application/json")
    );
    let document: Value = serde_json::from_str(&body_text(response).await).expect("JSON document");

    assert_eq!(
        document["info"]["x-logo"],
        json!({
            "url": "https://redocly.github.io/redoc/petstore-logo.png",
            "backgroundColor": "#F0F0F0",
            "altText": "PetStore Logo"
        })
    );
    assert_json_snapshot!(document["x-tagGroups"], @r#"
    [
      {
        "name": "Core resources",
        "tags": [
          "cats"
        ]
      }
    ]
    "#);
}

#[rstest]
#[tokio::test]
async fn should_keep_api_routes(app: TestApp) {
    let response = app.get("/cats/1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let cat: Value = serde_json::from_str(&body_text(response).await).expect("JSON cat");
    assert_eq!(cat["name"], "Kitty");
}

#[rstest]
#[tokio::test]
async fn should_answer_not_found_for_unknown_cat(app: TestApp) {
    let response = app.get("/cats/42").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

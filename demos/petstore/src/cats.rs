use axum::extract::Path;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{ApiErrorResponse, CatError};

/// A cat
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Cat {
    /// The cat identifier
    pub id: u32,
    /// The name of the cat
    pub name: String,
    /// The age of the cat, in years
    pub age: u8,
    /// The breed of the cat
    pub breed: String,
}

fn all_cats() -> Vec<Cat> {
    [(1, "Kitty", 3, "Maine Coon"), (2, "Tom", 7, "Siamese")]
        .into_iter()
        .map(|(id, name, age, breed)| Cat {
            id,
            name: name.to_string(),
            age,
            breed: breed.to_string(),
        })
        .collect()
}

pub(crate) fn cat_router() -> Router {
    Router::new()
        .route("/", get(list_cats))
        .route("/{id}", get(get_cat))
}

/// List all cats
#[utoipa::path(
    get,
    path = "/cats",
    tag = "cats",
    responses(
        (status = 200, description = "The cats", body = [Cat])
    )
)]
pub(crate) async fn list_cats() -> Json<Vec<Cat>> {
    Json(all_cats())
}

/// Find a cat by id
#[utoipa::path(
    get,
    path = "/cats/{id}",
    tag = "cats",
    params(
        ("id" = u32, Path, description = "The cat identifier")
    ),
    responses(
        (status = 200, description = "The found cat", body = Cat),
        (status = 404, description = "No cat with this id", body = ApiErrorResponse)
    )
)]
pub(crate) async fn get_cat(Path(id): Path<u32>) -> Result<Json<Cat>, CatError> {
    all_cats()
        .into_iter()
        .find(|cat| cat.id == id)
        .map(Json)
        .ok_or(CatError::CatNotFound { id })
}

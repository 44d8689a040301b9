// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! Public catalog category endpoints.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    error::ApiError,
    models::{Category, CategoryNode},
    state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct CategoryListQuery {
    /// Return a flat list instead of the nested tree.
    pub flat: Option<bool>,
}

/// List catalog categories.
///
/// Default shape is the tree: top-level categories only, each with
/// nested `children` up to two levels, name ascending. With `flat=true`
/// every category is returned in one flat list.
#[utoipa::path(
    get,
    path = "/api/categories",
    params(CategoryListQuery),
    tag = "Catalog",
    responses(
        (status = 200, description = "Category tree (or flat list)", body = [CategoryNode])
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<CategoryListQuery>,
) -> Response {
    let store = state.store.read().await;

    if params.flat.unwrap_or(false) {
        let categories: Vec<Category> = store.list_categories_flat();
        Json(categories).into_response()
    } else {
        Json(store.category_tree()).into_response()
    }
}

/// One category with its nested children.
#[utoipa::path(
    get,
    path = "/api/categories/{category_id}",
    params(("category_id" = Uuid, Path, description = "Category identifier")),
    tag = "Catalog",
    responses(
        (status = 200, body = CategoryNode),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<Uuid>,
) -> Result<Json<CategoryNode>, ApiError> {
    let store = state.store.read().await;
    let node = store.get_category(category_id)?;
    Ok(Json(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateCategoryRequest;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    async fn seeded_state() -> AppState {
        let state = AppState::default();
        {
            let mut store = state.store.write().await;
            let equipment = store
                .create_category(CreateCategoryRequest {
                    name: "Equipment".into(),
                    parent_id: None,
                })
                .unwrap();
            store
                .create_category(CreateCategoryRequest {
                    name: "Chairs".into(),
                    parent_id: Some(equipment.id),
                })
                .unwrap();
            store
                .create_category(CreateCategoryRequest {
                    name: "Consumables".into(),
                    parent_id: None,
                })
                .unwrap();
        }
        state
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn default_listing_is_the_nested_tree() {
        let state = seeded_state().await;

        let response = list_categories(
            State(state),
            Query(CategoryListQuery { flat: None }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let roots = body.as_array().unwrap();
        // Top-level only, name ascending.
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0]["name"], "Consumables");
        assert_eq!(roots[1]["name"], "Equipment");
        assert_eq!(roots[1]["children"][0]["name"], "Chairs");
    }

    #[tokio::test]
    async fn flat_listing_returns_every_category() {
        let state = seeded_state().await;

        let response = list_categories(
            State(state),
            Query(CategoryListQuery { flat: Some(true) }),
        )
        .await;

        let body = body_json(response).await;
        let categories = body.as_array().unwrap();
        assert_eq!(categories.len(), 3);
        // Flat rows carry no children arrays.
        assert!(categories[0].get("children").is_none());
    }

    #[tokio::test]
    async fn missing_category_is_404() {
        let state = AppState::default();
        let err = get_category(State(state), Path(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! Public catalog product endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{error::ApiError, models::Product, state::AppState};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProductListQuery {
    /// Restrict to one category.
    pub category_id: Option<Uuid>,
    /// Restrict to one vendor's storefront.
    pub vendor_id: Option<Uuid>,
}

/// List active products, optionally filtered.
#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductListQuery),
    tag = "Catalog",
    responses((status = 200, body = [Product]))
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListQuery>,
) -> Json<Vec<Product>> {
    let store = state.store.read().await;
    Json(store.list_products(params.category_id, params.vendor_id))
}

/// One active product.
#[utoipa::path(
    get,
    path = "/api/products/{product_id}",
    params(("product_id" = Uuid, Path, description = "Product identifier")),
    tag = "Catalog",
    responses(
        (status = 200, body = Product),
        (status = 404, description = "Product not found or inactive")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> Result<Json<Product>, ApiError> {
    let store = state.store.read().await;
    let product = store.get_active_product(product_id)?;
    Ok(Json(product))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn listing_on_empty_store_is_empty() {
        let Json(products) = list_products(
            State(AppState::default()),
            Query(ProductListQuery {
                category_id: None,
                vendor_id: None,
            }),
        )
        .await;
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn missing_product_is_404() {
        let err = get_product(State(AppState::default()), Path(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn seeded_demo_product_is_listed() {
        let state = AppState::default();
        state.store.write().await.seed_demo_data();

        let Json(products) = list_products(
            State(state),
            Query(ProductListQuery {
                category_id: None,
                vendor_id: None,
            }),
        )
        .await;
        assert_eq!(products.len(), 1);
        assert!(products[0].is_active);
    }
}

//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use suit_yourself_core::types::ProductId;

use crate::error::{AppError, Result};
use crate::models::product::{Product, ProductSummary};
use crate::state::AppState;

/// Product listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

/// `GET /api/products?category=`
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<ProductSummary>> {
    Json(state.catalog().list(query.category.as_deref()))
}

/// `GET /api/products/{id}`
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    state
        .catalog()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(AppError::NotFound("Product"))
}

/// `GET /api/categories`
pub async fn categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog().categories())
}

//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use trufa_core::ProductId;

use super::parse_path_id;
use crate::db::RepositoryError;
use crate::error::{AppError, Result};
use crate::models::Product;
use crate::state::AppState;

const PRODUCT_NOT_FOUND: &str = "Produto não encontrado!";

/// Response body for a toggled product.
#[derive(Debug, Serialize)]
pub struct ProductUpdated {
    pub message: &'static str,
    #[serde(rename = "produto")]
    pub product: Product,
}

/// Handle `GET /produtos`.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.products().list()?))
}

/// Handle `PATCH /produtos/{id}`: flip the product's active flag.
pub async fn toggle(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ProductUpdated>> {
    let id = parse_path_id(&raw_id)
        .map(ProductId::new)
        .ok_or_else(not_found)?;

    let product = state
        .products()
        .toggle_active(id)
        .map_err(|e| match e {
            RepositoryError::NotFound => not_found(),
            other => other.into(),
        })?;

    tracing::info!(
        product_id = %product.id,
        price = %product.price,
        active = product.active,
        "Product toggled"
    );

    Ok(Json(ProductUpdated {
        message: "Produto atualizado com sucesso!",
        product,
    }))
}

fn not_found() -> AppError {
    AppError::NotFound(PRODUCT_NOT_FOUND.to_owned())
}

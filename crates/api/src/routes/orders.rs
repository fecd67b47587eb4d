//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use trufa_core::OrderId;

use super::parse_path_id;
use crate::db::RepositoryError;
use crate::error::{AppError, Result, message_response};
use crate::extract::{JsonBody, is_truthy};
use crate::models::{NewOrder, Order};
use crate::state::AppState;

const INVALID_ORDER: &str = "Pedido inválido!";
const ORDER_NOT_FOUND: &str = "Pedido não encontrado!";

/// Order submission body.
///
/// Every field is taken as raw JSON: `produtos` must be an array, and `nome`
/// and `telefone` may be of any type as long as they are present.
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "produtos")]
    pub items: Option<Value>,
    #[serde(rename = "nome")]
    pub customer_name: Option<Value>,
    #[serde(rename = "telefone")]
    pub customer_phone: Option<Value>,
}

impl CreateOrderRequest {
    /// Validate presence of every field. An empty item list is accepted.
    fn into_new_order(self) -> Option<NewOrder> {
        let Some(Value::Array(items)) = self.items else {
            return None;
        };
        let customer_name = self.customer_name.filter(is_truthy)?;
        let customer_phone = self.customer_phone.filter(is_truthy)?;

        Some(NewOrder {
            items,
            customer_name,
            customer_phone,
        })
    }
}

/// Response body for a created order.
#[derive(Debug, Serialize)]
pub struct OrderCreated {
    pub message: &'static str,
    #[serde(rename = "pedido")]
    pub order: Order,
}

/// Response body for the order listing.
#[derive(Debug, Serialize)]
pub struct OrderList {
    #[serde(rename = "pedidos")]
    pub orders: Vec<Order>,
}

/// Handle `POST /pedidos`.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateOrderRequest>,
) -> Result<Response> {
    let new_order = req
        .into_new_order()
        .ok_or_else(|| AppError::BadRequest(INVALID_ORDER.to_owned()))?;

    let order = state.orders().create(new_order)?;
    tracing::info!(order_id = %order.id, items = order.items.len(), "Order saved");

    Ok((
        StatusCode::CREATED,
        Json(OrderCreated {
            message: "Pedido salvo com sucesso!",
            order,
        }),
    )
        .into_response())
}

/// Handle `GET /pedidos`.
pub async fn index(State(state): State<AppState>) -> Result<Json<OrderList>> {
    Ok(Json(OrderList {
        orders: state.orders().list()?,
    }))
}

/// Handle `DELETE /pedidos/{id}`.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response> {
    let id = parse_path_id(&raw_id)
        .map(OrderId::new)
        .ok_or_else(not_found)?;

    state.orders().delete(id).map_err(|e| match e {
        RepositoryError::NotFound => not_found(),
        other => other.into(),
    })?;
    tracing::info!(order_id = %id, "Order removed");

    Ok(message_response(StatusCode::OK, "Pedido removido com sucesso!"))
}

/// Handle `DELETE /pedidos`.
pub async fn delete_all(State(state): State<AppState>) -> Result<Response> {
    let removed = state.orders().clear()?;
    tracing::info!(removed, "All orders removed");

    Ok(message_response(StatusCode::OK, "Todos os pedidos foram removidos!"))
}

fn not_found() -> AppError {
    AppError::NotFound(ORDER_NOT_FOUND.to_owned())
}

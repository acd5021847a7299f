//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::core::ServerState;
use crate::db::repository::order;
use crate::orders::manager;
use crate::utils::{AppError, AppResult};
use shared::models::{Order, OrderCreate, OrderFilter, OrderUpdate};

/// GET /api/orders - list orders, newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<OrderFilter>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = order::find_all(&state.pool, &filter).await?;
    Ok(Json(orders))
}

/// GET /api/orders/:id - fetch a single order
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    let order = order::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id}")))?;
    Ok(Json(order))
}

/// POST /api/orders - create an order
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    let order = manager::create(&state.pool, payload).await?;
    Ok(Json(order))
}

/// PUT /api/orders/:id - patch an order
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<Json<Order>> {
    let order = manager::update(&state.pool, id, payload).await?;
    Ok(Json(order))
}

/// DELETE /api/orders/:id - delete an order
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = order::delete(&state.pool, id).await?;
    Ok(Json(result))
}

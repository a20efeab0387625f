//! Purchase orders and inbound orders: create and read only.

use axum::{extract::State, routing::get, Router};

use super::common::{created_response, success_response, HandlerResult, IdPath};
use crate::models::{CreateInboundOrderRequest, CreatePurchaseOrderRequest};
use crate::validation::ValidatedJson;
use crate::AppState;

async fn list_purchase_orders(State(state): State<AppState>) -> HandlerResult {
    Ok(success_response(state.services.purchase_orders.list().await?))
}

async fn get_purchase_order(State(state): State<AppState>, IdPath(id): IdPath) -> HandlerResult {
    Ok(success_response(state.services.purchase_orders.get(id).await?))
}

async fn create_purchase_order(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePurchaseOrderRequest>,
) -> HandlerResult {
    Ok(created_response(
        state.services.purchase_orders.create(request).await?,
    ))
}

async fn list_inbound_orders(State(state): State<AppState>) -> HandlerResult {
    Ok(success_response(state.services.inbound_orders.list().await?))
}

async fn get_inbound_order(State(state): State<AppState>, IdPath(id): IdPath) -> HandlerResult {
    Ok(success_response(state.services.inbound_orders.get(id).await?))
}

async fn create_inbound_order(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateInboundOrderRequest>,
) -> HandlerResult {
    Ok(created_response(
        state.services.inbound_orders.create(request).await?,
    ))
}

pub fn purchase_orders_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_purchase_orders).post(create_purchase_order))
        .route("/:id", get(get_purchase_order))
}

pub fn inbound_orders_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inbound_orders).post(create_inbound_order))
        .route("/:id", get(get_inbound_order))
}

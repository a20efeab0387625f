use axum::{extract::State, routing::get, Router};

use super::common::{created_response, no_content_response, success_response, HandlerResult, IdPath};
use crate::models::{CreateWarehouseRequest, WarehousePatch};
use crate::validation::ValidatedJson;
use crate::AppState;

async fn list_warehouses(State(state): State<AppState>) -> HandlerResult {
    Ok(success_response(state.services.warehouses.list().await?))
}

async fn get_warehouse(State(state): State<AppState>, IdPath(id): IdPath) -> HandlerResult {
    Ok(success_response(state.services.warehouses.get(id).await?))
}

async fn create_warehouse(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateWarehouseRequest>,
) -> HandlerResult {
    Ok(created_response(state.services.warehouses.create(request).await?))
}

async fn update_warehouse(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(patch): ValidatedJson<WarehousePatch>,
) -> HandlerResult {
    Ok(success_response(state.services.warehouses.update(id, patch).await?))
}

async fn delete_warehouse(State(state): State<AppState>, IdPath(id): IdPath) -> HandlerResult {
    state.services.warehouses.delete(id).await?;
    Ok(no_content_response())
}

pub fn warehouses_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_warehouses).post(create_warehouse))
        .route("/:id", get(get_warehouse).patch(update_warehouse).delete(delete_warehouse))
}

use axum::{extract::State, routing::get, Router};

use super::common::{created_response, no_content_response, success_response, HandlerResult, IdPath};
use crate::models::{BuyerPatch, CreateBuyerRequest};
use crate::validation::ValidatedJson;
use crate::AppState;

async fn list_buyers(State(state): State<AppState>) -> HandlerResult {
    Ok(success_response(state.services.buyers.list().await?))
}

async fn get_buyer(State(state): State<AppState>, IdPath(id): IdPath) -> HandlerResult {
    Ok(success_response(state.services.buyers.get(id).await?))
}

async fn create_buyer(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateBuyerRequest>,
) -> HandlerResult {
    Ok(created_response(state.services.buyers.create(request).await?))
}

async fn update_buyer(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(patch): ValidatedJson<BuyerPatch>,
) -> HandlerResult {
    Ok(success_response(state.services.buyers.update(id, patch).await?))
}

async fn delete_buyer(State(state): State<AppState>, IdPath(id): IdPath) -> HandlerResult {
    state.services.buyers.delete(id).await?;
    Ok(no_content_response())
}

pub fn buyers_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_buyers).post(create_buyer))
        .route("/:id", get(get_buyer).patch(update_buyer).delete(delete_buyer))
}

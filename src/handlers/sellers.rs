use axum::{extract::State, routing::get, Router};

use super::common::{created_response, no_content_response, success_response, HandlerResult, IdPath};
use crate::models::{CreateSellerRequest, SellerPatch};
use crate::validation::ValidatedJson;
use crate::AppState;

async fn list_sellers(State(state): State<AppState>) -> HandlerResult {
    Ok(success_response(state.services.sellers.list().await?))
}

async fn get_seller(State(state): State<AppState>, IdPath(id): IdPath) -> HandlerResult {
    Ok(success_response(state.services.sellers.get(id).await?))
}

async fn create_seller(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateSellerRequest>,
) -> HandlerResult {
    Ok(created_response(state.services.sellers.create(request).await?))
}

async fn update_seller(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(patch): ValidatedJson<SellerPatch>,
) -> HandlerResult {
    Ok(success_response(state.services.sellers.update(id, patch).await?))
}

async fn delete_seller(State(state): State<AppState>, IdPath(id): IdPath) -> HandlerResult {
    state.services.sellers.delete(id).await?;
    Ok(no_content_response())
}

pub fn sellers_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sellers).post(create_seller))
        .route("/:id", get(get_seller).patch(update_seller).delete(delete_seller))
}

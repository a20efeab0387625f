use axum::{extract::State, routing::get, Router};

use super::common::{created_response, no_content_response, success_response, HandlerResult, IdPath};
use crate::models::{CreateProductRequest, ProductPatch};
use crate::validation::ValidatedJson;
use crate::AppState;

async fn list_products(State(state): State<AppState>) -> HandlerResult {
    Ok(success_response(state.services.products.list().await?))
}

async fn get_product(State(state): State<AppState>, IdPath(id): IdPath) -> HandlerResult {
    Ok(success_response(state.services.products.get(id).await?))
}

async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> HandlerResult {
    Ok(created_response(state.services.products.create(request).await?))
}

async fn update_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(patch): ValidatedJson<ProductPatch>,
) -> HandlerResult {
    Ok(success_response(state.services.products.update(id, patch).await?))
}

async fn delete_product(State(state): State<AppState>, IdPath(id): IdPath) -> HandlerResult {
    state.services.products.delete(id).await?;
    Ok(no_content_response())
}

pub fn products_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", get(get_product).patch(update_product).delete(delete_product))
}

use axum::{extract::State, routing::get, Router};

use super::common::{created_response, success_response, HandlerResult, IdPath};
use crate::models::CreateProductTypeRequest;
use crate::validation::ValidatedJson;
use crate::AppState;

async fn list_product_types(State(state): State<AppState>) -> HandlerResult {
    Ok(success_response(state.services.product_types.list().await?))
}

async fn get_product_type(State(state): State<AppState>, IdPath(id): IdPath) -> HandlerResult {
    Ok(success_response(state.services.product_types.get(id).await?))
}

async fn create_product_type(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateProductTypeRequest>,
) -> HandlerResult {
    Ok(created_response(
        state.services.product_types.create(request).await?,
    ))
}

pub fn product_types_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_product_types).post(create_product_type))
        .route("/:id", get(get_product_type))
}

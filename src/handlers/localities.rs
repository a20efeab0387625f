use axum::{extract::State, routing::get, Router};

use super::common::{created_response, success_response, HandlerResult, IdPath};
use crate::models::CreateLocalityRequest;
use crate::validation::ValidatedJson;
use crate::AppState;

async fn list_localities(State(state): State<AppState>) -> HandlerResult {
    Ok(success_response(state.services.localities.list().await?))
}

async fn get_locality(State(state): State<AppState>, IdPath(id): IdPath) -> HandlerResult {
    Ok(success_response(state.services.localities.get(id).await?))
}

async fn create_locality(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateLocalityRequest>,
) -> HandlerResult {
    Ok(created_response(
        state.services.localities.create(request).await?,
    ))
}

/// Number of sellers registered in one locality.
async fn locality_sellers_report(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> HandlerResult {
    Ok(success_response(
        state.services.localities.sellers_report(id).await?,
    ))
}

pub fn localities_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_localities).post(create_locality))
        .route("/:id", get(get_locality))
        .route("/:id/sellers", get(locality_sellers_report))
}

use axum::{extract::State, routing::get, Router};

use super::common::{created_response, no_content_response, success_response, HandlerResult, IdPath};
use crate::models::{CreateSectionRequest, SectionPatch};
use crate::validation::ValidatedJson;
use crate::AppState;

async fn list_sections(State(state): State<AppState>) -> HandlerResult {
    Ok(success_response(state.services.sections.list().await?))
}

async fn get_section(State(state): State<AppState>, IdPath(id): IdPath) -> HandlerResult {
    Ok(success_response(state.services.sections.get(id).await?))
}

async fn create_section(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateSectionRequest>,
) -> HandlerResult {
    Ok(created_response(state.services.sections.create(request).await?))
}

async fn update_section(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(patch): ValidatedJson<SectionPatch>,
) -> HandlerResult {
    Ok(success_response(state.services.sections.update(id, patch).await?))
}

async fn delete_section(State(state): State<AppState>, IdPath(id): IdPath) -> HandlerResult {
    state.services.sections.delete(id).await?;
    Ok(no_content_response())
}

pub fn sections_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sections).post(create_section))
        .route("/:id", get(get_section).patch(update_section).delete(delete_section))
}

use axum::{extract::State, routing::get, Router};

use super::common::{created_response, no_content_response, success_response, HandlerResult, IdPath};
use crate::models::{CreateEmployeeRequest, EmployeePatch};
use crate::validation::ValidatedJson;
use crate::AppState;

async fn list_employees(State(state): State<AppState>) -> HandlerResult {
    Ok(success_response(state.services.employees.list().await?))
}

async fn get_employee(State(state): State<AppState>, IdPath(id): IdPath) -> HandlerResult {
    Ok(success_response(state.services.employees.get(id).await?))
}

async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateEmployeeRequest>,
) -> HandlerResult {
    Ok(created_response(state.services.employees.create(request).await?))
}

async fn update_employee(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(patch): ValidatedJson<EmployeePatch>,
) -> HandlerResult {
    Ok(success_response(state.services.employees.update(id, patch).await?))
}

async fn delete_employee(State(state): State<AppState>, IdPath(id): IdPath) -> HandlerResult {
    state.services.employees.delete(id).await?;
    Ok(no_content_response())
}

pub fn employees_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route("/:id", get(get_employee).patch(update_employee).delete(delete_employee))
}

//! HTTP handlers for cafe endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::dto::{
    CafeCreatedResponse, CafeDetailResponse, CafeListResponse, CafeRequest, CafeResponse,
    CafeUpdatedResponse,
};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{path_id, JsonBody};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::response::MessageResponse;
use crate::adapters::http::state::AppState;
use crate::application::access::enforce_role;
use crate::application::{CreateCafeCommand, DeleteCafeCommand, UpdateCafeCommand};
use crate::domain::foundation::{CafeId, DomainError, ErrorCode, Identity, Operation};

fn cafe_id(raw: &str) -> Result<CafeId, ApiError> {
    path_id(raw, || DomainError::new(ErrorCode::CafeNotFound, "Cafe not found"))
}

/// Id of a cafe about to be mutated; roles the operation never admits are
/// refused before the id is parsed.
fn owned_cafe_id(identity: &Identity, operation: Operation, raw: &str) -> Result<CafeId, ApiError> {
    enforce_role(operation, identity)?;
    cafe_id(raw)
}

/// POST /api/cafes
pub async fn create_cafe(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
    JsonBody(request): JsonBody<CafeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cafe = state
        .create_cafe_handler()
        .handle(
            &identity,
            CreateCafeCommand {
                details: request.into(),
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CafeCreatedResponse {
            success: true,
            message: "Cafe created successfully".to_string(),
            cafe_id: cafe.id().to_string(),
        }),
    ))
}

/// GET /api/cafes
pub async fn list_cafes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let cafes = state.list_cafes_handler().handle().await?;
    Ok(Json(CafeListResponse::new(&cafes)))
}

/// GET /api/cafes/my
pub async fn my_cafes(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let cafes = state.my_cafes_handler().handle(&identity).await?;
    Ok(Json(CafeListResponse::new(&cafes)))
}

/// GET /api/cafes/:id
pub async fn get_cafe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cafe = state.get_cafe_handler().handle(cafe_id(&id)?).await?;
    Ok(Json(CafeDetailResponse {
        success: true,
        cafe: CafeResponse::from(&cafe),
    }))
}

/// PUT /api/cafes/:id
pub async fn update_cafe(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<CafeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateCafeCommand {
        cafe_id: owned_cafe_id(&identity, Operation::UpdateCafe, &id)?,
        details: request.into(),
    };
    let cafe = state.update_cafe_handler().handle(&identity, cmd).await?;

    Ok(Json(CafeUpdatedResponse {
        success: true,
        message: "Cafe updated successfully".to_string(),
        cafe: CafeResponse::from(&cafe),
    }))
}

/// DELETE /api/cafes/:id
pub async fn delete_cafe(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteCafeCommand {
        cafe_id: owned_cafe_id(&identity, Operation::DeleteCafe, &id)?,
    };
    state.delete_cafe_handler().handle(&identity, cmd).await?;

    Ok(Json(MessageResponse::new("Cafe deleted successfully")))
}

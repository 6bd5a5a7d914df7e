use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{
    CreateMaintenanceRequest, MaintenanceListQuery, UpdateMaintenanceRequest,
};
use crate::api::dtos::responses::CleaningTasksResponse;
use crate::api::extractors::auth::{require_role, AuthUser};
use crate::domain::models::maintenance::{
    MaintenanceKind, MaintenancePriority, MaintenanceRequest, MaintenanceStatus,
    NewMaintenanceParams,
};
use crate::domain::models::room::RoomStatus;
use crate::error::AppError;
use crate::state::AppState;

pub async fn report_maintenance(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateMaintenanceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let room = state.room_repo.find_by_id(&payload.room_id).await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    let priority = payload.priority.unwrap_or(MaintenancePriority::Medium);

    let request = MaintenanceRequest::new(NewMaintenanceParams {
        room_id: room.id.clone(),
        reported_by: user.id,
        description: payload.description,
        kind: payload.kind.unwrap_or(MaintenanceKind::Other),
        priority,
        images: payload.images.unwrap_or_default(),
    });

    let created = state.maintenance_repo.create(&request).await?;

    // High-priority issues take the room out of service immediately.
    if priority == MaintenancePriority::High {
        state.room_repo.update_status(&room.id, RoomStatus::Maintenance).await?;
        info!("Room {} moved to maintenance (high priority issue)", room.room_number);
    }

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_maintenance(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Query(query): Query<MaintenanceListQuery>,
) -> Result<impl IntoResponse, AppError> {
    require_role(&user, &["admin", "manager", "housekeeping"])?;

    let requests = state
        .maintenance_repo
        .list(query.status, query.room_id, query.priority)
        .await?;
    Ok(Json(requests))
}

pub async fn update_maintenance_status(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(request_id): Path<String>,
    Json(payload): Json<UpdateMaintenanceRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_role(&user, &["admin", "manager", "housekeeping"])?;

    let status = MaintenanceStatus::parse(&payload.status)
        .ok_or_else(|| AppError::Validation(format!("Unknown maintenance status '{}'", payload.status)))?;

    let mut request = state.maintenance_repo.find_by_id(&request_id).await?
        .ok_or(AppError::NotFound("Maintenance request not found".into()))?;

    request.status = status;

    let mut room_status = None;
    match status {
        MaintenanceStatus::Resolved => {
            request.resolved_at = Some(Utc::now());
            request.notes = payload.notes;

            // A room taken out of service by this workflow goes back through
            // housekeeping rather than straight to available.
            let room = state.room_repo.find_by_id(&request.room_id).await?
                .ok_or(AppError::NotFound("Room not found".into()))?;
            if room.status == RoomStatus::Maintenance {
                room_status = Some(RoomStatus::Cleaning);
            }
        }
        MaintenanceStatus::InProgress => {
            if payload.notes.is_some() {
                request.notes = payload.notes;
            }
        }
        MaintenanceStatus::Open => {}
    }

    let updated = state.maintenance_repo.update(&request, room_status).await?;
    info!("Maintenance request {} is now {:?}", updated.id, updated.status);
    Ok(Json(updated))
}

pub async fn cleaning_tasks(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    require_role(&user, &["admin", "manager", "housekeeping"])?;

    let tasks = state.room_repo.list(Some(RoomStatus::Cleaning), None).await?;
    let total = tasks.len();
    Ok(Json(CleaningTasksResponse { tasks, total }))
}

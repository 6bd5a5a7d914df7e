use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{
    AvailabilitySearchQuery, CreateRoomRequest, RoomAvailabilityQuery, RoomListQuery,
    UpdateRoomRequest, UpdateRoomStatusRequest,
};
use crate::api::dtos::responses::{AvailabilityResponse, AvailableRoomsResponse};
use crate::api::extractors::auth::{require_role, AuthUser};
use crate::domain::models::room::{NewRoomParams, Room, RoomStatus};
use crate::domain::services::reservation::is_room_available;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_room(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateRoomRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_role(&user, &["admin", "manager"])?;

    if payload.price_per_night <= 0.0 {
        return Err(AppError::Validation("price_per_night must be positive".into()));
    }
    if payload.room_number.trim().is_empty() {
        return Err(AppError::Validation("Room number is required".into()));
    }

    if state.room_repo.find_by_number(&payload.room_number).await?.is_some() {
        return Err(AppError::Conflict("Room with this number already exists".into()));
    }

    let room = Room::new(NewRoomParams {
        room_number: payload.room_number,
        room_type: payload.room_type,
        price_per_night: payload.price_per_night,
        amenities: payload.amenities.unwrap_or_default(),
        images: payload.images.unwrap_or_default(),
        floor: payload.floor,
        max_occupancy: payload.max_occupancy,
    });

    let created = state.room_repo.create(&room).await?;
    info!("Room created: {}", created.room_number);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(query): Query<RoomListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = state.room_repo.list(query.status, query.room_type).await?;
    Ok(Json(rooms))
}

pub async fn get_room(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(room_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let room = state.room_repo.find_by_id(&room_id).await?
        .ok_or(AppError::NotFound("Room not found".into()))?;
    Ok(Json(room))
}

pub async fn update_room(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(room_id): Path<String>,
    Json(payload): Json<UpdateRoomRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_role(&user, &["admin", "manager"])?;

    let mut room = state.room_repo.find_by_id(&room_id).await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    if let Some(number) = payload.room_number {
        if number != room.room_number
            && state.room_repo.find_by_number(&number).await?.is_some()
        {
            return Err(AppError::Conflict("Another room already has this room number".into()));
        }
        room.room_number = number;
    }
    if let Some(room_type) = payload.room_type {
        room.room_type = room_type;
    }
    if let Some(price) = payload.price_per_night {
        if price <= 0.0 {
            return Err(AppError::Validation("price_per_night must be positive".into()));
        }
        room.price_per_night = price;
    }
    if let Some(amenities) = payload.amenities {
        room.amenities = sqlx::types::Json(amenities);
    }
    if let Some(images) = payload.images {
        room.images = sqlx::types::Json(images);
    }
    if let Some(floor) = payload.floor {
        room.floor = Some(floor);
    }
    if let Some(max_occupancy) = payload.max_occupancy {
        room.max_occupancy = Some(max_occupancy);
    }

    let updated = state.room_repo.update(&room).await?;
    Ok(Json(updated))
}

/// Explicit staff action on the cached status (e.g. housekeeping marking a
/// cleaned room available again). Booking-driven changes go through the
/// status machine instead.
pub async fn update_room_status(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(room_id): Path<String>,
    Json(payload): Json<UpdateRoomStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_role(&user, &["admin", "manager", "receptionist", "housekeeping"])?;

    let status = RoomStatus::parse(&payload.status)
        .ok_or_else(|| AppError::Validation(format!("Unknown room status '{}'", payload.status)))?;

    let updated = state.room_repo.update_status(&room_id, status).await?;
    info!("Room {} status set to {}", updated.room_number, updated.status);
    Ok(Json(updated))
}

pub async fn delete_room(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(room_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    require_role(&user, &["admin"])?;

    let room = state.room_repo.find_by_id(&room_id).await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    // Historical (checked-out/cancelled) bookings remain as orphans;
    // only active ones block deletion.
    if state.booking_repo.has_active_for_room(&room.id).await? {
        return Err(AppError::Conflict("Cannot delete room with active bookings".into()));
    }

    state.room_repo.delete(&room.id).await?;
    info!("Room deleted: {}", room.room_number);
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

pub async fn room_availability(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    Query(query): Query<RoomAvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    if query.check_out <= query.check_in {
        return Err(AppError::Validation("checkOut must be after checkIn".into()));
    }

    let room = state.room_repo.find_by_id(&room_id).await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    let bookings = state.booking_repo.list_active_by_room(&room.id).await?;
    Ok(Json(AvailabilityResponse {
        available: is_room_available(&bookings, query.check_in, query.check_out),
    }))
}

/// A room may be cached `available` yet hold a future confirmed booking that
/// overlaps the requested window, so both the cached status and the overlap
/// set are filtered.
pub async fn find_available_rooms(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AvailabilitySearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    if query.check_out <= query.check_in {
        return Err(AppError::Validation("checkOut must be after checkIn".into()));
    }

    let booked: HashSet<String> = state
        .booking_repo
        .find_booked_room_ids(query.check_in, query.check_out)
        .await?
        .into_iter()
        .collect();

    let rooms: Vec<Room> = state
        .room_repo
        .list_available(query.room_type)
        .await?
        .into_iter()
        .filter(|room| !booked.contains(&room.id))
        .collect();

    let total = rooms.len();
    Ok(Json(AvailableRoomsResponse {
        rooms,
        total,
        check_in: query.check_in,
        check_out: query.check_out,
    }))
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::api::dtos::requests::{
    BookingListQuery, CreateBookingRequest, UpdateBookingStatusRequest,
};
use crate::api::dtos::responses::BookingListResponse;
use crate::api::extractors::auth::{require_role, AuthUser};
use crate::api::extractors::maybe_auth::MaybeAuthUser;
use crate::domain::models::booking::{Booking, BookingStatus, NewBookingParams};
use crate::domain::models::room::RoomStatus;
use crate::domain::ports::BookingFilter;
use crate::domain::services::reservation::{
    apply_transition, calculate_nights, calculate_total_price, find_conflict,
};
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.check_out <= payload.check_in {
        return Err(AppError::Validation("checkOut must be after checkIn".into()));
    }

    let services = payload.additional_services.unwrap_or_default();
    if services.iter().any(|s| s.price <= 0.0) {
        return Err(AppError::Validation("Additional service prices must be positive".into()));
    }

    // Contact details come from the payload for walk-ins, or fall back to
    // the signed-in guest's identity.
    let (guest_name, guest_email, guest_phone) = match (&payload.guest_details, &user) {
        (Some(details), _) => (details.name.clone(), details.email.clone(), details.phone.clone()),
        (None, Some(u)) => (u.name.clone(), u.email.clone(), None),
        (None, None) => {
            return Err(AppError::Validation("Guest contact details are required".into()));
        }
    };

    // Serialize the check-then-create sequence per room so two concurrent
    // requests cannot both pass the overlap check.
    let _room_guard = state
        .room_locks
        .acquire(&payload.room_id, Duration::from_millis(state.config.room_lock_timeout_ms))
        .await?;

    let room = state.room_repo.find_by_id(&payload.room_id).await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    if room.status != RoomStatus::Available {
        return Err(AppError::Conflict(format!("Room is currently {}", room.status)));
    }

    let existing = state.booking_repo.list_active_by_room(&room.id).await?;
    if find_conflict(&existing, payload.check_in, payload.check_out, None).is_some() {
        warn!("Booking rejected: room {} already booked for the requested dates", room.room_number);
        return Err(AppError::Conflict("Room is already booked for these dates".into()));
    }

    // Nights are computed before any service charges are added.
    let nights = calculate_nights(payload.check_in, payload.check_out);
    let total_price = calculate_total_price(nights, room.price_per_night, &services);

    let booking = Booking::new(NewBookingParams {
        room_id: room.id.clone(),
        guest_id: user.map(|u| u.id),
        guest_name,
        guest_email,
        guest_phone,
        check_in: payload.check_in,
        check_out: payload.check_out,
        additional_services: services,
        notes: payload.notes,
        total_price,
    });

    // Occupancy is reflected only at check-in; a future-dated confirmed
    // booking must not hide the room from today's walk-in view, so the
    // room's cached status is left untouched here.
    let created = state.booking_repo.create(&booking).await?;
    info!("Booking confirmed: {} for room {} ({} nights)", created.id, room.room_number, nights);

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Query(query): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    require_role(&user, &["admin", "manager", "receptionist"])?;

    let filter = BookingFilter {
        status: query.status,
        room_id: query.room_id,
        page: query.page.unwrap_or(1).max(1),
        limit: query.limit.unwrap_or(10).clamp(1, 100),
    };

    let (bookings, total) = state.booking_repo.list(&filter).await?;
    let pages = (total + filter.limit - 1) / filter.limit;

    Ok(Json(BookingListResponse {
        bookings,
        total,
        page: filter.page,
        pages,
    }))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(booking_id): Path<String>,
    Json(payload): Json<UpdateBookingStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_role(&user, &["admin", "manager", "receptionist"])?;

    // The status value is validated against the enumerated set before the
    // state machine is consulted.
    let target = BookingStatus::parse(&payload.status)
        .ok_or_else(|| AppError::Validation(format!("Unknown booking status '{}'", payload.status)))?;

    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    let _room_guard = state
        .room_locks
        .acquire(&booking.room_id, Duration::from_millis(state.config.room_lock_timeout_ms))
        .await?;

    // Re-read under the lock: the status may have moved while we waited.
    let mut booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    let room_status = apply_transition(booking.status, target)?;
    booking.status = target;

    let updated = state.booking_repo.transition(&booking, room_status).await?;
    info!(
        "Booking {} is now {}, room {} set to {}",
        updated.id, updated.status, updated.room_id, room_status
    );

    Ok(Json(updated))
}

use chrono::{DateTime, Utc};

use crate::domain::models::booking::{AdditionalService, Booking, BookingStatus};
use crate::domain::models::room::RoomStatus;
use crate::error::AppError;

const SECONDS_PER_NIGHT: f64 = 86_400.0;

/// Half-open interval intersection: [a_start, a_end) and [b_start, b_end)
/// overlap iff a_start < b_end && b_start < a_end. A checkout at 11:00 does
/// not conflict with a check-in at 11:00.
pub fn intervals_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Scans the given bookings for an active one whose stay overlaps the
/// requested interval. Cancelled and checked-out bookings never block.
/// `exclude` skips one booking id, for re-validating a booking against
/// its siblings.
pub fn find_conflict<'a>(
    bookings: &'a [Booking],
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    exclude: Option<&str>,
) -> Option<&'a Booking> {
    bookings.iter().find(|b| {
        b.status.is_active()
            && exclude != Some(b.id.as_str())
            && intervals_overlap(b.check_in, b.check_out, check_in, check_out)
    })
}

pub fn is_room_available(
    bookings: &[Booking],
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
) -> bool {
    find_conflict(bookings, check_in, check_out, None).is_none()
}

/// Fractional days round to the nearest whole night. This is the single
/// night-count policy for the whole crate; there is deliberately no
/// ceiling-based variant anywhere.
pub fn calculate_nights(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> i64 {
    let span = (check_out - check_in).num_seconds().abs() as f64;
    (span / SECONDS_PER_NIGHT).round() as i64
}

pub fn calculate_total_price(
    nights: i64,
    price_per_night: f64,
    services: &[AdditionalService],
) -> f64 {
    let room_charge = nights as f64 * price_per_night;
    let services_charge: f64 = services.iter().map(|s| s.price).sum();
    room_charge + services_charge
}

/// The booking status machine. Returns the room status side effect the
/// transition triggers; the caller must commit booking and room together.
pub fn apply_transition(
    current: BookingStatus,
    target: BookingStatus,
) -> Result<RoomStatus, AppError> {
    match (current, target) {
        (BookingStatus::Confirmed, BookingStatus::CheckedIn) => Ok(RoomStatus::Occupied),
        (BookingStatus::CheckedIn, BookingStatus::CheckedOut) => Ok(RoomStatus::Cleaning),
        (BookingStatus::Confirmed, BookingStatus::Cancelled)
        | (BookingStatus::CheckedIn, BookingStatus::Cancelled) => Ok(RoomStatus::Available),
        _ => Err(AppError::Conflict(format!(
            "Invalid booking status transition from {} to {}",
            current, target
        ))),
    }
}

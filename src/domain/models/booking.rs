use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// Booking lifecycle forms a path, not a full graph:
/// confirmed -> checked-in -> checked-out, with cancellation possible from
/// confirmed or checked-in. checked-out and cancelled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(rename_all = "kebab-case")]
pub enum BookingStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::CheckedIn => "checked-in",
            BookingStatus::CheckedOut => "checked-out",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "confirmed" => Some(BookingStatus::Confirmed),
            "checked-in" => Some(BookingStatus::CheckedIn),
            "checked-out" => Some(BookingStatus::CheckedOut),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    /// Active bookings count against room availability; cancelled and
    /// checked-out bookings are retained history and never block.
    pub fn is_active(self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::CheckedIn)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdditionalService {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub room_id: String,
    /// Registered guest account, if the booking was made while signed in.
    pub guest_id: Option<String>,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub status: BookingStatus,
    pub additional_services: Json<Vec<AdditionalService>>,
    pub notes: Option<String>,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub room_id: String,
    pub guest_id: Option<String>,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub additional_services: Vec<AdditionalService>,
    pub notes: Option<String>,
    pub total_price: f64,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            room_id: params.room_id,
            guest_id: params.guest_id,
            guest_name: params.guest_name,
            guest_email: params.guest_email,
            guest_phone: params.guest_phone,
            check_in: params.check_in,
            check_out: params.check_out,
            status: BookingStatus::Confirmed,
            additional_services: Json(params.additional_services),
            notes: params.notes,
            total_price: params.total_price,
            created_at: Utc::now(),
        }
    }
}

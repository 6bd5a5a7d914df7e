use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::models::booking::{AdditionalService, BookingStatus};
use crate::domain::models::maintenance::{MaintenanceKind, MaintenancePriority, MaintenanceStatus};
use crate::domain::models::room::{RoomStatus, RoomType};

#[derive(Deserialize)]
pub struct CreateRoomRequest {
    pub room_number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub price_per_night: f64,
    pub amenities: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub floor: Option<i64>,
    pub max_occupancy: Option<i64>,
}

#[derive(Deserialize)]
pub struct UpdateRoomRequest {
    pub room_number: Option<String>,
    #[serde(rename = "type")]
    pub room_type: Option<RoomType>,
    pub price_per_night: Option<f64>,
    pub amenities: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub floor: Option<i64>,
    pub max_occupancy: Option<i64>,
}

#[derive(Deserialize)]
pub struct UpdateRoomStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct RoomListQuery {
    pub status: Option<RoomStatus>,
    #[serde(rename = "type")]
    pub room_type: Option<RoomType>,
}

#[derive(Deserialize)]
pub struct AvailabilitySearchQuery {
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    #[serde(rename = "type")]
    pub room_type: Option<RoomType>,
}

#[derive(Deserialize)]
pub struct RoomAvailabilityQuery {
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct GuestDetailsDto {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub room_id: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guest_details: Option<GuestDetailsDto>,
    pub additional_services: Option<Vec<AdditionalService>>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct BookingListQuery {
    pub status: Option<BookingStatus>,
    pub room_id: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct CreateMaintenanceRequest {
    pub room_id: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: Option<MaintenanceKind>,
    pub priority: Option<MaintenancePriority>,
    pub images: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct UpdateMaintenanceRequest {
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct MaintenanceListQuery {
    pub status: Option<MaintenanceStatus>,
    pub room_id: Option<String>,
    pub priority: Option<MaintenancePriority>,
}

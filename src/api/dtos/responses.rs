use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::{booking::Booking, room::Room};

#[derive(Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}

#[derive(Serialize)]
pub struct AvailableRoomsResponse {
    pub rooms: Vec<Room>,
    pub total: usize,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct BookingListResponse {
    pub bookings: Vec<Booking>,
    pub total: i64,
    pub page: i64,
    pub pages: i64,
}

#[derive(Serialize)]
pub struct CleaningTasksResponse {
    pub tasks: Vec<Room>,
    pub total: usize,
}

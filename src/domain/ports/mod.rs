use crate::domain::models::{
    booking::{Booking, BookingStatus},
    maintenance::{MaintenancePriority, MaintenanceRequest, MaintenanceStatus},
    room::{Room, RoomStatus, RoomType},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, room: &Room) -> Result<Room, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Room>, AppError>;
    async fn find_by_number(&self, room_number: &str) -> Result<Option<Room>, AppError>;
    async fn list(&self, status: Option<RoomStatus>, room_type: Option<RoomType>) -> Result<Vec<Room>, AppError>;
    /// Rooms whose cached status is `available`, ordered by ascending price.
    async fn list_available(&self, room_type: Option<RoomType>) -> Result<Vec<Room>, AppError>;
    async fn update(&self, room: &Room) -> Result<Room, AppError>;
    async fn update_status(&self, id: &str, status: RoomStatus) -> Result<Room, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[derive(Debug, Default, Clone)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub room_id: Option<String>,
    pub page: i64,
    pub limit: i64,
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    /// Returns the matching page plus the total row count for the filter.
    async fn list(&self, filter: &BookingFilter) -> Result<(Vec<Booking>, i64), AppError>;
    async fn list_active_by_room(&self, room_id: &str) -> Result<Vec<Booking>, AppError>;
    /// Distinct ids of rooms with an active booking overlapping the interval.
    async fn find_booked_room_ids(&self, check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Result<Vec<String>, AppError>;
    async fn has_active_for_room(&self, room_id: &str) -> Result<bool, AppError>;
    /// Persists a status transition together with its room status side
    /// effect in one transaction; both succeed or neither takes effect.
    async fn transition(&self, booking: &Booking, room_status: RoomStatus) -> Result<Booking, AppError>;
}

#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    async fn create(&self, request: &MaintenanceRequest) -> Result<MaintenanceRequest, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<MaintenanceRequest>, AppError>;
    async fn list(
        &self,
        status: Option<MaintenanceStatus>,
        room_id: Option<String>,
        priority: Option<MaintenancePriority>,
    ) -> Result<Vec<MaintenanceRequest>, AppError>;
    /// Persists the request update, optionally flipping the room status in
    /// the same transaction (used when resolving puts the room back into
    /// the cleaning queue).
    async fn update(&self, request: &MaintenanceRequest, room_status: Option<RoomStatus>) -> Result<MaintenanceRequest, AppError>;
}

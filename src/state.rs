use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{BookingRepository, MaintenanceRepository, RoomRepository};
use crate::domain::services::room_lock::RoomLockRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub room_repo: Arc<dyn RoomRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub maintenance_repo: Arc<dyn MaintenanceRepository>,
    pub room_locks: Arc<RoomLockRegistry>,
}

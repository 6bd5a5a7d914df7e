pub mod sqlite_booking_repo;
pub mod sqlite_maintenance_repo;
pub mod sqlite_room_repo;

pub mod reservation;
pub mod room_lock;

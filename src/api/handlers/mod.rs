pub mod booking;
pub mod health;
pub mod maintenance;
pub mod room;

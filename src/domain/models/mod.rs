pub mod booking;
pub mod maintenance;
pub mod room;
pub mod user;

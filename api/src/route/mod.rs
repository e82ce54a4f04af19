pub mod desk;
pub mod desk_booking;
pub mod health;
pub mod v1;

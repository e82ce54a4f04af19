pub mod desk;
pub mod desk_booking;

pub mod desk;
pub mod desk_booking;
pub mod id;

pub mod desk_booking;

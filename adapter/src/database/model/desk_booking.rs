use chrono::NaiveDate;
use kernel::model::{
    desk_booking::DeskBooking,
    id::{DeskBookingId, DeskId},
};

#[derive(sqlx::FromRow)]
pub struct DeskBookingRow {
    pub desk_booking_id: DeskBookingId,
    pub desk_id: DeskId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
}

impl From<DeskBookingRow> for DeskBooking {
    fn from(value: DeskBookingRow) -> Self {
        let DeskBookingRow {
            desk_booking_id,
            desk_id,
            first_name,
            last_name,
            email,
            date,
        } = value;
        DeskBooking {
            desk_booking_id,
            desk_id,
            first_name,
            last_name,
            email,
            date,
        }
    }
}

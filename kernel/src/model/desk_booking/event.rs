use chrono::NaiveDate;

use crate::model::{desk_booking::DeskBookingRequest, id::DeskId};

// A booking before the store has assigned its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDeskBooking {
    pub desk_id: DeskId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
}

impl CreateDeskBooking {
    pub fn from_request(desk_id: DeskId, request: &DeskBookingRequest) -> Self {
        Self {
            desk_id,
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            date: request.date,
        }
    }
}

use chrono::NaiveDate;
use garde::Validate;

use crate::model::id::{DeskBookingId, DeskId};

pub mod event;
pub mod validation;

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
#[garde(context(validation::ValidationContext))]
pub struct DeskBookingRequest {
    #[garde(length(chars, max = 50))]
    pub first_name: String,
    #[garde(length(chars, max = 50))]
    pub last_name: String,
    #[garde(email, length(chars, max = 100))]
    pub email: String,
    #[garde(custom(validation::date_in_future))]
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskBooking {
    pub desk_booking_id: DeskBookingId,
    pub desk_id: DeskId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeskBookingResultCode {
    Success,
    NoDeskAvailable,
}

/// Outcome of a booking attempt. The request fields are echoed back whether
/// or not a desk was found; `desk_booking_id` is set only on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskBookingResult {
    pub code: DeskBookingResultCode,
    pub desk_booking_id: Option<DeskBookingId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
}

impl DeskBookingResult {
    pub fn success(desk_booking_id: DeskBookingId, request: DeskBookingRequest) -> Self {
        Self::echo(
            DeskBookingResultCode::Success,
            Some(desk_booking_id),
            request,
        )
    }

    pub fn no_desk_available(request: DeskBookingRequest) -> Self {
        Self::echo(DeskBookingResultCode::NoDeskAvailable, None, request)
    }

    fn echo(
        code: DeskBookingResultCode,
        desk_booking_id: Option<DeskBookingId>,
        request: DeskBookingRequest,
    ) -> Self {
        let DeskBookingRequest {
            first_name,
            last_name,
            email,
            date,
        } = request;
        Self {
            code,
            desk_booking_id,
            first_name,
            last_name,
            email,
            date,
        }
    }
}

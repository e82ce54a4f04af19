use chrono::NaiveDate;
use kernel::model::{
    desk_booking::{DeskBooking, DeskBookingRequest, DeskBookingResult, DeskBookingResultCode},
    id::{DeskBookingId, DeskId},
};
use serde::{Deserialize, Serialize};

pub const NO_DESK_AVAILABLE_MESSAGE: &str = "No desk available for selected date";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeskBookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
}

impl From<CreateDeskBookingRequest> for DeskBookingRequest {
    fn from(value: CreateDeskBookingRequest) -> Self {
        let CreateDeskBookingRequest {
            first_name,
            last_name,
            email,
            date,
        } = value;
        DeskBookingRequest {
            first_name,
            last_name,
            email,
            date,
        }
    }
}

#[derive(Debug, Serialize)]
pub enum DeskBookingResultCodeName {
    Success,
    NoDeskAvailable,
}

impl From<DeskBookingResultCode> for DeskBookingResultCodeName {
    fn from(value: DeskBookingResultCode) -> Self {
        match value {
            DeskBookingResultCode::Success => Self::Success,
            DeskBookingResultCode::NoDeskAvailable => Self::NoDeskAvailable,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeskBookingResultResponse {
    pub code: DeskBookingResultCodeName,
    pub desk_booking_id: Option<DeskBookingId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<DeskBookingResult> for DeskBookingResultResponse {
    fn from(value: DeskBookingResult) -> Self {
        let DeskBookingResult {
            code,
            desk_booking_id,
            first_name,
            last_name,
            email,
            date,
        } = value;
        let message = match code {
            DeskBookingResultCode::Success => None,
            DeskBookingResultCode::NoDeskAvailable => Some(NO_DESK_AVAILABLE_MESSAGE.to_string()),
        };
        Self {
            code: code.into(),
            desk_booking_id,
            first_name,
            last_name,
            email,
            date,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeskBookingsResponse {
    pub items: Vec<DeskBookingResponse>,
}

impl From<Vec<DeskBooking>> for DeskBookingsResponse {
    fn from(value: Vec<DeskBooking>) -> Self {
        Self {
            items: value.into_iter().map(DeskBookingResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeskBookingResponse {
    pub desk_booking_id: DeskBookingId,
    pub desk_id: DeskId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
}

impl From<DeskBooking> for DeskBookingResponse {
    fn from(value: DeskBooking) -> Self {
        let DeskBooking {
            desk_booking_id,
            desk_id,
            first_name,
            last_name,
            email,
            date,
        } = value;
        Self {
            desk_booking_id,
            desk_id,
            first_name,
            last_name,
            email,
            date,
        }
    }
}

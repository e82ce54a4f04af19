use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    desk_booking::{event::CreateDeskBooking, DeskBooking},
    id::DeskBookingId,
};

#[async_trait]
pub trait DeskBookingRepository: Send + Sync {
    // Persists the booking and returns the id the store assigned to it.
    async fn save(&self, event: CreateDeskBooking) -> AppResult<DeskBookingId>;
    async fn find_all(&self) -> AppResult<Vec<DeskBooking>>;
}

use std::sync::Arc;

use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::{
    model::desk_booking::{event::CreateDeskBooking, DeskBookingRequest, DeskBookingResult},
    repository::{desk::DeskRepository, desk_booking::DeskBookingRepository},
};

/// Books the first desk that is free on the requested date.
///
/// Two concurrent callers may pick the same desk here. The store's
/// `(desk_id, date)` unique key rejects the second save.
#[derive(new)]
pub struct DeskBookingProcessor {
    desk_repository: Arc<dyn DeskRepository>,
    desk_booking_repository: Arc<dyn DeskBookingRepository>,
}

impl DeskBookingProcessor {
    #[tracing::instrument(name = "book desk", skip_all)]
    pub async fn book_desk(
        &self,
        request: Option<DeskBookingRequest>,
    ) -> AppResult<DeskBookingResult> {
        let request = request.ok_or_else(|| AppError::InvalidArgument("request".into()))?;

        let available_desks = self.desk_repository.find_available(request.date).await?;
        let Some(desk) = available_desks.first() else {
            tracing::info!(date = %request.date, "no desk available");
            return Ok(DeskBookingResult::no_desk_available(request));
        };

        let desk_booking_id = self
            .desk_booking_repository
            .save(CreateDeskBooking::from_request(desk.desk_id, &request))
            .await?;

        tracing::info!(
            date = %request.date,
            desk_id = %desk.desk_id,
            desk_booking_id = %desk_booking_id,
            "desk booked"
        );

        Ok(DeskBookingResult::success(desk_booking_id, request))
    }
}

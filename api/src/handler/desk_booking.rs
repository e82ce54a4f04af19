use axum::{extract::State, http::StatusCode, Json};
use chrono::Local;
use kernel::model::desk_booking::{
    validation::validate_request, DeskBookingRequest, DeskBookingResultCode,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::desk_booking::{
    CreateDeskBookingRequest, DeskBookingResultResponse, DeskBookingsResponse,
};

// A missing or unreadable body reaches the processor as an absent request,
// which it rejects with `InvalidArgument`.
pub async fn book_desk(
    State(registry): State<AppRegistry>,
    payload: Option<Json<CreateDeskBookingRequest>>,
) -> AppResult<(StatusCode, Json<DeskBookingResultResponse>)> {
    let request = payload.map(|Json(req)| DeskBookingRequest::from(req));

    if let Some(request) = &request {
        validate_request(request, Local::now().date_naive()).map_err(|violations| {
            tracing::debug!(?violations, "rejected desk booking request");
            AppError::ValidationError(violations)
        })?;
    }

    let result = registry.desk_booking_processor().book_desk(request).await?;

    let status = match result.code {
        DeskBookingResultCode::Success => StatusCode::CREATED,
        DeskBookingResultCode::NoDeskAvailable => StatusCode::CONFLICT,
    };
    Ok((status, Json(result.into())))
}

pub async fn show_desk_booking_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DeskBookingsResponse>> {
    registry
        .desk_booking_repository()
        .find_all()
        .await
        .map(DeskBookingsResponse::from)
        .map(Json)
}

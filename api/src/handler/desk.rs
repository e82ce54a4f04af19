use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::desk::{AvailableDesksQuery, CreateDeskRequest, CreateDeskResponse, DesksResponse};

pub async fn register_desk(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateDeskRequest>,
) -> AppResult<(StatusCode, Json<CreateDeskResponse>)> {
    req.validate(&())?;

    registry
        .desk_repository()
        .create(req.into())
        .await
        .map(|desk_id| (StatusCode::CREATED, Json(CreateDeskResponse { desk_id })))
}

pub async fn show_desk_list(State(registry): State<AppRegistry>) -> AppResult<Json<DesksResponse>> {
    registry
        .desk_repository()
        .find_all()
        .await
        .map(DesksResponse::from)
        .map(Json)
}

pub async fn show_available_desks(
    Query(query): Query<AvailableDesksQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DesksResponse>> {
    registry
        .desk_repository()
        .find_available(query.date)
        .await
        .map(DesksResponse::from)
        .map(Json)
}

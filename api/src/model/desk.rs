use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{
    desk::{event::CreateDesk, Desk},
    id::DeskId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeskRequest {
    #[garde(length(chars, min = 1, max = 200))]
    pub description: String,
}

impl From<CreateDeskRequest> for CreateDesk {
    fn from(value: CreateDeskRequest) -> Self {
        let CreateDeskRequest { description } = value;
        CreateDesk { description }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeskResponse {
    pub desk_id: DeskId,
}

#[derive(Debug, Deserialize)]
pub struct AvailableDesksQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesksResponse {
    pub items: Vec<DeskResponse>,
}

impl From<Vec<Desk>> for DesksResponse {
    fn from(value: Vec<Desk>) -> Self {
        Self {
            items: value.into_iter().map(DeskResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeskResponse {
    pub desk_id: DeskId,
    pub description: String,
}

impl From<Desk> for DeskResponse {
    fn from(value: Desk) -> Self {
        let Desk {
            desk_id,
            description,
        } = value;
        Self {
            desk_id,
            description,
        }
    }
}

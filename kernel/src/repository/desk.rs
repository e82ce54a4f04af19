use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

use crate::model::{
    desk::{event::CreateDesk, Desk},
    id::DeskId,
};

#[async_trait]
pub trait DeskRepository: Send + Sync {
    async fn create(&self, event: CreateDesk) -> AppResult<DeskId>;
    async fn find_all(&self) -> AppResult<Vec<Desk>>;
    // Desks with no booking on `date`, lowest id first.
    async fn find_available(&self, date: NaiveDate) -> AppResult<Vec<Desk>>;
}

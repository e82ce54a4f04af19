use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::{
    desk::{event::CreateDesk, Desk},
    id::DeskId,
};
use kernel::repository::desk::DeskRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::desk::DeskRow, ConnectionPool};

#[derive(new)]
pub struct DeskRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl DeskRepository for DeskRepositoryImpl {
    #[tracing::instrument(skip(self))]
    async fn create(&self, event: CreateDesk) -> AppResult<DeskId> {
        sqlx::query_scalar::<_, DeskId>(
            r#"
                INSERT INTO desks (description)
                VALUES ($1)
                RETURNING desk_id
            "#,
        )
        .bind(event.description)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_all(&self) -> AppResult<Vec<Desk>> {
        sqlx::query_as::<_, DeskRow>(
            r#"
                SELECT desk_id, description
                FROM desks
                ORDER BY desk_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Desk::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    #[tracing::instrument(skip(self))]
    async fn find_available(&self, date: NaiveDate) -> AppResult<Vec<Desk>> {
        // A desk is free on `date` when no booking row references it for that day.
        // Lowest id first: the processor books the head of this list.
        sqlx::query_as::<_, DeskRow>(
            r#"
                SELECT d.desk_id, d.description
                FROM desks AS d
                WHERE NOT EXISTS (
                    SELECT 1
                    FROM desk_bookings AS b
                    WHERE b.desk_id = d.desk_id
                      AND b.date = $1
                )
                ORDER BY d.desk_id ASC
            "#,
        )
        .bind(date)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Desk::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}

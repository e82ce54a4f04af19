use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    desk_booking::{event::CreateDeskBooking, DeskBooking},
    id::DeskBookingId,
};
use kernel::repository::desk_booking::DeskBookingRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::desk_booking::DeskBookingRow, ConnectionPool};

#[derive(new)]
pub struct DeskBookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl DeskBookingRepository for DeskBookingRepositoryImpl {
    #[tracing::instrument(skip(self, event), fields(desk_id = %event.desk_id, date = %event.date))]
    async fn save(&self, event: CreateDeskBooking) -> AppResult<DeskBookingId> {
        sqlx::query_scalar::<_, DeskBookingId>(
            r#"
                INSERT INTO desk_bookings
                (desk_id, first_name, last_name, email, date)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING desk_booking_id
            "#,
        )
        .bind(event.desk_id)
        .bind(&event.first_name)
        .bind(&event.last_name)
        .bind(&event.email)
        .bind(event.date)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| map_save_error(e, &event))
    }

    async fn find_all(&self) -> AppResult<Vec<DeskBooking>> {
        sqlx::query_as::<_, DeskBookingRow>(
            r#"
                SELECT
                desk_booking_id,
                desk_id,
                first_name,
                last_name,
                email,
                date
                FROM desk_bookings
                ORDER BY date ASC, desk_booking_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(DeskBooking::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}

// The (desk_id, date) unique key is what stops two concurrent requests from
// taking the same desk; the loser's insert lands here.
fn map_save_error(e: sqlx::Error, event: &CreateDeskBooking) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return AppError::Conflict(format!(
                "desk {} is already booked on {}",
                event.desk_id, event.date
            ));
        }
        if db.is_foreign_key_violation() {
            return AppError::EntityNotFound(format!("desk {} not found", event.desk_id));
        }
    }
    AppError::SpecificOperationError(e)
}

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Response, Router};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use kernel::model::{
    desk::{event::CreateDesk, Desk},
    desk_booking::{event::CreateDeskBooking, DeskBooking},
    id::{DeskBookingId, DeskId},
};
use kernel::repository::{
    desk::DeskRepository, desk_booking::DeskBookingRepository, health::HealthCheckRepository,
};
use registry::AppRegistry;
use serde_json::Value;
use shared::error::AppResult;

use crate::route::v1;

/// Desks and bookings kept in memory, standing in for all repositories.
#[derive(Default)]
pub struct InMemoryStore {
    desks: Mutex<Vec<Desk>>,
    bookings: Mutex<Vec<DeskBooking>>,
    lookups: Mutex<usize>,
}

impl InMemoryStore {
    pub fn with_desks(descriptions: &[&str]) -> Arc<Self> {
        let store = Self::default();
        {
            let mut desks = store.desks.lock().unwrap();
            for (i, description) in descriptions.iter().enumerate() {
                desks.push(Desk {
                    desk_id: DeskId::from(i as i64 + 1),
                    description: description.to_string(),
                });
            }
        }
        Arc::new(store)
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.lock().unwrap().len()
    }

    pub fn lookup_count(&self) -> usize {
        *self.lookups.lock().unwrap()
    }
}

#[async_trait]
impl HealthCheckRepository for InMemoryStore {
    async fn check_db(&self) -> bool {
        true
    }
}

#[async_trait]
impl DeskRepository for InMemoryStore {
    async fn create(&self, event: CreateDesk) -> AppResult<DeskId> {
        let mut desks = self.desks.lock().unwrap();
        let desk_id = DeskId::from(desks.len() as i64 + 1);
        desks.push(Desk {
            desk_id,
            description: event.description,
        });
        Ok(desk_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Desk>> {
        Ok(self.desks.lock().unwrap().clone())
    }

    async fn find_available(&self, date: NaiveDate) -> AppResult<Vec<Desk>> {
        *self.lookups.lock().unwrap() += 1;
        let bookings = self.bookings.lock().unwrap();
        Ok(self
            .desks
            .lock()
            .unwrap()
            .iter()
            .filter(|d| {
                !bookings
                    .iter()
                    .any(|b| b.desk_id == d.desk_id && b.date == date)
            })
            .cloned()
            .collect())
    }
}

#[async_trait]
impl DeskBookingRepository for InMemoryStore {
    async fn save(&self, event: CreateDeskBooking) -> AppResult<DeskBookingId> {
        let mut bookings = self.bookings.lock().unwrap();
        let desk_booking_id = DeskBookingId::from(bookings.len() as i64 + 1);
        let CreateDeskBooking {
            desk_id,
            first_name,
            last_name,
            email,
            date,
        } = event;
        bookings.push(DeskBooking {
            desk_booking_id,
            desk_id,
            first_name,
            last_name,
            email,
            date,
        });
        Ok(desk_booking_id)
    }

    async fn find_all(&self) -> AppResult<Vec<DeskBooking>> {
        Ok(self.bookings.lock().unwrap().clone())
    }
}

pub fn app(store: Arc<InMemoryStore>) -> Router {
    let registry = AppRegistry::with_repositories(store.clone(), store.clone(), store);
    v1::routes().with_state(registry)
}

pub async fn read_json(res: Response<Body>) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

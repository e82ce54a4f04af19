use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    desk::DeskRepositoryImpl, desk_booking::DeskBookingRepositoryImpl,
    health::HealthCheckRepositoryImpl,
};
use kernel::processor::desk_booking::DeskBookingProcessor;
use kernel::repository::{
    desk::DeskRepository, desk_booking::DeskBookingRepository, health::HealthCheckRepository,
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    desk_repository: Arc<dyn DeskRepository>,
    desk_booking_repository: Arc<dyn DeskBookingRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let desk_repository = Arc::new(DeskRepositoryImpl::new(pool.clone()));
        let desk_booking_repository = Arc::new(DeskBookingRepositoryImpl::new(pool.clone()));
        Self::with_repositories(
            health_check_repository,
            desk_repository,
            desk_booking_repository,
        )
    }

    /// Builds a registry from already constructed repositories, e.g. in-memory
    /// ones in handler tests.
    pub fn with_repositories(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        desk_repository: Arc<dyn DeskRepository>,
        desk_booking_repository: Arc<dyn DeskBookingRepository>,
    ) -> Self {
        Self {
            health_check_repository,
            desk_repository,
            desk_booking_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn desk_repository(&self) -> Arc<dyn DeskRepository> {
        self.desk_repository.clone()
    }

    pub fn desk_booking_repository(&self) -> Arc<dyn DeskBookingRepository> {
        self.desk_booking_repository.clone()
    }

    pub fn desk_booking_processor(&self) -> DeskBookingProcessor {
        DeskBookingProcessor::new(
            self.desk_repository.clone(),
            self.desk_booking_repository.clone(),
        )
    }
}

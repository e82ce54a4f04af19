use super::{
    desk::build_desk_routers, desk_booking::build_desk_booking_routers,
    health::build_health_check_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_desk_routers())
        .merge(build_desk_booking_routers());
    Router::new().nest("/api/v1", router)
}

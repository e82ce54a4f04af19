use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::desk_booking::{book_desk, show_desk_booking_list};

pub fn build_desk_booking_routers() -> Router<AppRegistry> {
    let desk_bookings_routers = Router::new()
        .route("/", post(book_desk))
        .route("/", get(show_desk_booking_list));

    Router::new().nest("/desk-bookings", desk_bookings_routers)
}

use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::desk::{register_desk, show_available_desks, show_desk_list};

pub fn build_desk_routers() -> Router<AppRegistry> {
    let desks_routers = Router::new()
        .route("/", post(register_desk))
        .route("/", get(show_desk_list))
        .route("/available", get(show_available_desks));

    Router::new().nest("/desks", desks_routers)
}

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/calendars", post(handlers::calendar::create_calendar))
        .route("/calendars/:id", get(handlers::calendar::get_calendar))
        .route(
            "/calendars/:id/time-slots",
            post(handlers::calendar::create_time_slots),
        )
        .route(
            "/calendars/:id/verify",
            post(handlers::calendar::verify_password),
        )
}

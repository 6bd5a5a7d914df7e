use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;

use crate::api::handlers::{booking, health, maintenance, room};
use crate::state::AppState;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Rooms
        .route("/api/v1/rooms", get(room::list_rooms).post(room::create_room))
        .route("/api/v1/rooms/availability", get(room::find_available_rooms))
        .route("/api/v1/rooms/{room_id}", get(room::get_room).put(room::update_room).delete(room::delete_room))
        .route("/api/v1/rooms/{room_id}/status", patch(room::update_room_status))
        .route("/api/v1/rooms/{room_id}/availability", get(room::room_availability))

        // Bookings
        .route("/api/v1/bookings", post(booking::create_booking).get(booking::list_bookings))
        .route("/api/v1/bookings/{booking_id}", get(booking::get_booking))
        .route("/api/v1/bookings/{booking_id}/status", patch(booking::update_booking_status))

        // Maintenance
        .route("/api/v1/maintenance", post(maintenance::report_maintenance).get(maintenance::list_maintenance))
        .route("/api/v1/maintenance/cleaning-tasks", get(maintenance::cleaning_tasks))
        .route("/api/v1/maintenance/{request_id}", patch(maintenance::update_maintenance_status))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}

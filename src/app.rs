use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/records", post(handlers::submit_form))
        .route("/session/end", post(handlers::end_session_form))
        .route(
            "/api/records",
            get(handlers::list_records).post(handlers::create_record),
        )
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/session", delete(handlers::delete_session))
        .route("/healthz", get(handlers::healthz))
        .with_state(state)
}

use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/add/student",
            get(handlers::add_form).post(handlers::add_student),
        )
        .route(
            "/update/student/:id",
            get(handlers::update_form).post(handlers::update_student),
        )
        .route(
            "/delete/student/:id",
            get(handlers::delete_student).post(handlers::delete_student),
        )
        .route("/export/students", get(handlers::export_students))
        .route("/stats/phone_length", get(handlers::phone_length_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

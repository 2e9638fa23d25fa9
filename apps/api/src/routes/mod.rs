pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        // Wizard navigation
        .route("/api/v1/sessions/:id/step", put(handlers::handle_set_step))
        .route(
            "/api/v1/sessions/:id/step/next",
            post(handlers::handle_next_step),
        )
        .route(
            "/api/v1/sessions/:id/step/back",
            post(handlers::handle_previous_step),
        )
        // Document edits
        .route(
            "/api/v1/sessions/:id/personal",
            patch(handlers::handle_set_personal_field),
        )
        .route(
            "/api/v1/sessions/:id/scalar",
            patch(handlers::handle_set_scalar_field),
        )
        .route(
            "/api/v1/sessions/:id/entries",
            post(handlers::handle_add_entry).patch(handlers::handle_update_entry),
        )
        .route(
            "/api/v1/sessions/:id/entries/:section",
            post(handlers::handle_add_blank_entry),
        )
        .route(
            "/api/v1/sessions/:id/entries/:section/:index",
            delete(handlers::handle_remove_entry),
        )
        // Preview and print
        .route("/api/v1/sessions/:id/preview", get(handlers::handle_preview))
        .route(
            "/api/v1/sessions/:id/preview/html",
            get(handlers::handle_preview_html),
        )
        .route(
            "/api/v1/sessions/:id/preview/text",
            get(handlers::handle_preview_text),
        )
        .route("/api/v1/sessions/:id/print", get(handlers::handle_print))
        .with_state(state)
}

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use podium_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    admin::{self, authors, presentations, roles, rooms, schedule, users},
    auth::{login, login_page, logout, register, register_page},
    health::{healthz, readyz},
    pages::{index, main_schedule, presenter},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Public pages
        .route("/", get(index))
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout))
        .route("/register", get(register_page).post(register))
        // Logged-in pages
        .route("/main", get(main_schedule))
        .route("/presenter/{username}", get(presenter))
        // Admin
        .route("/admin", get(admin::index))
        .route("/admin/presentations", get(presentations::list))
        .route(
            "/admin/presentations/new",
            get(presentations::new_form).post(presentations::create),
        )
        .route(
            "/admin/presentations/{id}/edit",
            get(presentations::edit_form).post(presentations::update),
        )
        .route(
            "/admin/presentations/{id}/delete",
            post(presentations::delete),
        )
        .route("/admin/schedule", get(schedule::list))
        .route(
            "/admin/schedule/new",
            get(schedule::new_form).post(schedule::create),
        )
        .route(
            "/admin/schedule/{id}/edit",
            get(schedule::edit_form).post(schedule::update),
        )
        .route("/admin/schedule/{id}/delete", post(schedule::delete))
        .route("/admin/rooms", get(rooms::list))
        .route("/admin/rooms/new", get(rooms::new_form).post(rooms::create))
        .route(
            "/admin/rooms/{id}/edit",
            get(rooms::edit_form).post(rooms::update),
        )
        .route("/admin/rooms/{id}/delete", post(rooms::delete))
        .route("/admin/users", get(users::list))
        .route(
            "/admin/users/{id}/edit",
            get(users::edit_form).post(users::update),
        )
        .route("/admin/users/{id}/delete", post(users::delete))
        .route("/admin/authors", get(authors::list))
        .route(
            "/admin/authors/new",
            get(authors::new_form).post(authors::create),
        )
        .route(
            "/admin/authors/{presentation_id}/{user_id}/delete",
            post(authors::delete),
        )
        .route("/admin/roles", get(roles::list))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}

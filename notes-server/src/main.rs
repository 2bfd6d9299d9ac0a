mod config;
mod dto;
mod handlers;
mod models;
mod repository;
mod service;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post, put},
};

use std::sync::Arc;

use handlers::rest;
use repository::Repository;
use service::NoteService;

use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Load config from env variables
    let cfg = config::load_from_env().expect("failed to load configuration from environment");

    // Service creation; connections are opened per request, so there is
    // nothing to establish up front
    let service = Arc::new(NoteService::new(Repository::new(&cfg)));

    // Router config
    let app = Router::new()
        .route("/", get(root))
        .route("/api/notes", get(rest::get_all_notes))
        .route("/api/notes/{id}", get(rest::get_one_note))
        .route("/api/notes", post(rest::create_note))
        .route("/api/notes/{id}", put(rest::update_note))
        .route("/api/notes/{id}", delete(rest::delete_note))
        .route("/api/notes/{id}/important", patch(rest::mark_important))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", rest::ApiDoc::openapi()))
        .with_state(service)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.port))
        .await
        .expect("failed to bind to address");

    tracing::info!(
        "Started listening on {}",
        listener.local_addr().expect("failed to get local address")
    );
    axum::serve(listener, app)
        .await
        .expect("failed to start server");
}

async fn root() -> Response {
    (StatusCode::OK, "Notes API is running").into_response()
}

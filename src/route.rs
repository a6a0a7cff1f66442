use std::{sync::Arc, time::Duration};

use axum::{
    http::{Method, Request},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::{
    classify::ServerErrorsFailureClass,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::Span;

use crate::{handler::*, AppState};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Any origin may call the API, as browsers load the frontend from elsewhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http()
        .on_request(|req: &Request<_>, _span: &Span| {
            tracing::info!("{} {}", req.method(), req.uri());
        })
        .on_response(|res: &Response, latency: Duration, _span: &Span| {
            tracing::info!(latency_ms = latency.as_millis() as u64, "{}", res.status());
        })
        .on_failure(
            |error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                tracing::error!("{}", error);
            },
        );

    // GET reads the segment as a username, PUT and DELETE as an id
    Router::new()
        .route("/api/login", post(login))
        .route("/api/todos", post(create_todo))
        .route(
            "/api/todos/:segment",
            get(get_todos).put(update_todo).delete(delete_todo),
        )
        .with_state(app_state)
        .layer(trace)
        .layer(cors)
}

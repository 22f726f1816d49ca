use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{AppState, handlers};

fn cors() -> CorsLayer {
    let origins = if cfg!(debug_assertions) {
        let dev_ports = vec![3000, 8000, 8080, 8081, 5173];
        let mut allowed_origins = Vec::new();
        for port in dev_ports {
            allowed_origins.push(format!("http://localhost:{}", port));
            allowed_origins.push(format!("http://127.0.0.1:{}", port));
        }
        allowed_origins
    } else {
        // Production origins - add your domains here
        vec![]
    };

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST])
}

/// Setup the routes for the server and configure CORS and request tracing
pub fn setup_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::get))
        .route("/activities", get(handlers::v1::activities::list))
        .route(
            "/activities/{activity}/signup",
            post(handlers::v1::activities::signup),
        )
        .route(
            "/activities/{activity}/unregister",
            post(handlers::v1::activities::unregister),
        )
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::server::handlers::{health_handler, login_handler, report_handler, signup_handler};
use crate::store::KeyValueStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct UdaanState<S: KeyValueStore> {
    pub store: S,
}

impl<S: KeyValueStore> UdaanState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

pub fn udaan_router<S: KeyValueStore>(state: UdaanState<S>, body_limit: usize) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/signup", post(signup_handler::<S>))
        .route("/api/login", post(login_handler::<S>))
        .route("/api/dashboard/report", post(report_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::auth::{self, LoginForm, Outcome, SignupForm, View};
use crate::scoring::{DashboardReport, Transaction};
use crate::server::router::UdaanState;
use crate::store::KeyValueStore;
use crate::UdaanError;

/// Where the client should navigate, plus an optional message to show first.
#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub next: View,
    pub location: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl From<Outcome> for NavigationResponse {
    fn from(o: Outcome) -> Self {
        Self {
            next: o.next,
            location: o.next.page(),
            message: o.notice,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// POST /api/signup
pub async fn signup_handler<S: KeyValueStore>(
    State(state): State<UdaanState<S>>,
    payload: Result<Json<SignupForm>, JsonRejection>,
) -> Result<Json<NavigationResponse>, UdaanError> {
    let Json(form) = payload?;
    let outcome = auth::register(&state.store, &form).await?;
    Ok(Json(outcome.into()))
}

/// POST /api/login
pub async fn login_handler<S: KeyValueStore>(
    State(state): State<UdaanState<S>>,
    payload: Result<Json<LoginForm>, JsonRejection>,
) -> Result<Json<NavigationResponse>, UdaanError> {
    let Json(form) = payload?;
    let outcome = auth::authenticate(&state.store, &form).await?;
    Ok(Json(outcome.into()))
}

/// POST /api/dashboard/report
pub async fn report_handler(
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Json<DashboardReport>, UdaanError> {
    let Json(req) = payload?;
    Ok(Json(DashboardReport::build(&req.transactions)?))
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

//! HTTP interface: one page, two methods.
//!
//! `GET /` renders the dashboard, `POST /` runs a prediction and answers
//! with a redirect back to the page (redirect-after-POST, so a browser
//! refresh never re-submits the form).

use crate::application::dashboard::DashboardService;
use crate::domain::types::StudyFeatures;
use askama::Template;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::error;

#[derive(Clone)]
struct AppState {
    dashboard: Arc<DashboardService>,
}

pub fn router(dashboard: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/", get(show_dashboard).post(submit_prediction))
        .with_state(AppState { dashboard })
        .layer(TraceLayer::new_for_http())
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    prediction: Option<f64>,
    dates: Vec<String>,
    scores: Vec<f64>,
}

/// Form fields, coerced by serde; a field that fails numeric coercion
/// rejects the whole request. No bounds validation beyond that.
#[derive(Debug, Deserialize)]
struct StudyForm {
    hours: f64,
    previous: f64,
    extra: i64,
    sleep: f64,
    papers: i64,
}

#[derive(Debug, Deserialize)]
struct DashboardQuery {
    latest: Option<String>,
}

async fn show_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, AppError> {
    // Tolerant coercion: a malformed `latest` is treated as absent.
    let latest = query.latest.as_deref().and_then(|v| v.parse::<f64>().ok());
    let view = state.dashboard.view(latest).await?;

    let page = IndexTemplate {
        prediction: view.prediction,
        dates: view.dates,
        scores: view.scores,
    };
    Ok(Html(page.render().map_err(anyhow::Error::from)?))
}

async fn submit_prediction(
    State(state): State<AppState>,
    Form(form): Form<StudyForm>,
) -> Result<Redirect, AppError> {
    let features = StudyFeatures {
        hours: form.hours,
        previous_score: form.previous,
        extracurricular: form.extra,
        sleep_hours: form.sleep,
        papers_solved: form.papers,
    };

    let score = state.dashboard.submit(&features).await?;
    Ok(Redirect::to(&format!("/?latest={score}")))
}

/// Handler-internal failures become a plain 500; details stay in the logs.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use projection::{simulate, MonthRecord, ParameterError, SimulationParameters};
use report::Summary;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/static/styles.css", get(styles))
        .route("/static/app.js", get(script))
        .route("/api/defaults", get(defaults))
        .route("/api/projection", get(projection))
        .route("/api/projection/export.csv", get(export))
        .with_state(state)
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ProjectionQuery {
    initial_buyers: Option<u32>,
    monthly_growth: Option<u32>,
    meeting_fee: Option<f64>,
    commission_rate: Option<f64>,
    commission_duration_months: Option<u32>,
}

impl ProjectionQuery {
    fn resolve(self, defaults: SimulationParameters) -> SimulationParameters {
        SimulationParameters {
            initial_buyers: self.initial_buyers.unwrap_or(defaults.initial_buyers),
            monthly_growth: self.monthly_growth.unwrap_or(defaults.monthly_growth),
            meeting_fee: self.meeting_fee.unwrap_or(defaults.meeting_fee),
            commission_rate: self.commission_rate.unwrap_or(defaults.commission_rate),
            commission_duration_months: self
                .commission_duration_months
                .unwrap_or(defaults.commission_duration_months),
        }
    }
}

#[derive(Debug, Serialize)]
struct ProjectionResponse {
    parameters: SimulationParameters,
    summary: Summary,
    months: Vec<MonthRecord>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

async fn dashboard() -> Html<&'static str> {
    Html(ui::index_html())
}

async fn styles() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        ui::styles_css(),
    )
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        ui::app_js(),
    )
}

async fn defaults(State(state): State<AppState>) -> Json<SimulationParameters> {
    Json(state.defaults())
}

async fn projection(
    State(state): State<AppState>,
    Query(query): Query<ProjectionQuery>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let parameters = query.resolve(state.defaults());
    let months = simulate(&parameters).map_err(reject)?;
    let summary = Summary::from_months(&months).expect("the projection horizon is never empty");

    Ok(Json(ProjectionResponse {
        parameters,
        summary,
        months,
    }))
}

async fn export(
    State(state): State<AppState>,
    Query(query): Query<ProjectionQuery>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let parameters = query.resolve(state.defaults());
    let months = simulate(&parameters).map_err(reject)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"revenue_projection.csv\"",
            ),
        ],
        report::export_csv(&months),
    ))
}

fn reject(error: ParameterError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

use axum::{routing::get, Router};
use projection::SimulationParameters;

pub fn build_app(defaults: SimulationParameters) -> Router {
    debug_assert!(api::module_ready());
    debug_assert!(ui::module_ready());

    api::app_with_defaults(defaults).route("/health", get(healthcheck))
}

async fn healthcheck() -> &'static str {
    "ok"
}

pub mod routes;
pub mod state;

use axum::Router;
use projection::SimulationParameters;

pub fn module_ready() -> bool {
    true
}

pub fn app() -> Router {
    routes::router(state::AppState::new())
}

pub fn app_with_defaults(defaults: SimulationParameters) -> Router {
    routes::router(state::AppState::with_defaults(defaults))
}

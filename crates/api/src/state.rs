use projection::SimulationParameters;

#[derive(Clone, Copy, Debug, Default)]
pub struct AppState {
    defaults: SimulationParameters,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: SimulationParameters) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> SimulationParameters {
        self.defaults
    }
}

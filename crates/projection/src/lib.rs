mod engine;
mod params;
mod schedule;

pub use engine::{simulate, MonthRecord, CONVERSION_RATE, TICKET_SIZE_USD};
pub use params::{ParameterError, SimulationParameters};
pub use schedule::{activity_rate, month_start, ANCHOR_YEAR, HORIZON_MONTHS};

#[cfg(test)]
mod tests {
    use super::{SimulationParameters, CONVERSION_RATE, HORIZON_MONTHS, TICKET_SIZE_USD};

    #[test]
    fn model_constants_match_fixed_assumptions() {
        assert_eq!(TICKET_SIZE_USD, 100_000.0);
        assert_eq!(CONVERSION_RATE, 0.20);
        assert_eq!(HORIZON_MONTHS, 36);
    }

    #[test]
    fn parameter_defaults_match_baseline_scenario() {
        let params = SimulationParameters::default();

        assert_eq!(params.initial_buyers, 50);
        assert_eq!(params.monthly_growth, 2);
        assert_eq!(params.meeting_fee, 1_000.0);
        assert_eq!(params.commission_rate, 0.01);
        assert_eq!(params.commission_duration_months, 12);
    }
}

use serde::Serialize;
use time::Date;

use crate::params::{ParameterError, SimulationParameters};
use crate::schedule::{activity_rate, month_start, HORIZON_MONTHS};

pub const TICKET_SIZE_USD: f64 = 100_000.0;
pub const CONVERSION_RATE: f64 = 0.20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthRecord {
    pub date: Date,
    pub year: i32,
    pub active_buyers: f64,
    pub monthly_meetings: f64,
    pub new_deals: f64,
    pub active_recurring_deals: f64,
    pub meeting_revenue: f64,
    pub commission_revenue: f64,
    pub total_revenue: f64,
}

pub fn simulate(params: &SimulationParameters) -> Result<Vec<MonthRecord>, ParameterError> {
    params.validate()?;

    let duration = params.commission_duration_months as usize;
    let mut months = Vec::with_capacity(HORIZON_MONTHS);
    let mut new_deals_history: Vec<f64> = Vec::with_capacity(HORIZON_MONTHS);

    for month_index in 0..HORIZON_MONTHS {
        let date = month_start(month_index);
        let year = date.year();

        let active_buyers =
            f64::from(params.initial_buyers) + month_index as f64 * f64::from(params.monthly_growth);
        let monthly_meetings = active_buyers * activity_rate(year);
        let new_deals = monthly_meetings * CONVERSION_RATE;
        new_deals_history.push(new_deals);

        // Inclusive trailing window over the most recent `duration` deal
        // counts, clamped at the start of the horizon. The history is
        // append-only and holds unrounded values.
        let window_start = new_deals_history.len().saturating_sub(duration);
        let active_recurring_deals: f64 = new_deals_history[window_start..].iter().sum();

        let meeting_revenue = monthly_meetings * params.meeting_fee;
        let commission_revenue = active_recurring_deals * TICKET_SIZE_USD * params.commission_rate;

        months.push(MonthRecord {
            date,
            year,
            active_buyers,
            monthly_meetings,
            new_deals,
            active_recurring_deals,
            meeting_revenue,
            commission_revenue,
            total_revenue: meeting_revenue + commission_revenue,
        });
    }

    Ok(months)
}

#[cfg(test)]
mod tests {
    use super::{simulate, HORIZON_MONTHS};
    use crate::params::{ParameterError, SimulationParameters};

    const EPSILON: f64 = 1e-9;

    fn flat_hundred_buyers() -> SimulationParameters {
        SimulationParameters {
            initial_buyers: 100,
            monthly_growth: 0,
            meeting_fee: 1.0,
            commission_rate: 0.01,
            commission_duration_months: 1,
        }
    }

    #[test]
    fn produces_one_record_per_month_of_the_fixed_horizon() {
        let months = simulate(&SimulationParameters::default()).unwrap();

        assert_eq!(months.len(), HORIZON_MONTHS);
        assert_eq!(months[0].date.year(), 2026);
        assert_eq!(u8::from(months[0].date.month()), 1);
        assert_eq!(months[HORIZON_MONTHS - 1].date.year(), 2028);
        assert_eq!(u8::from(months[HORIZON_MONTHS - 1].date.month()), 12);

        for pair in months.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn identical_parameters_produce_identical_projections() {
        let params = SimulationParameters::default();

        let first = simulate(&params).unwrap();
        let second = simulate(&params).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn active_buyers_grow_linearly_and_never_decrease() {
        let params = SimulationParameters {
            initial_buyers: 10,
            monthly_growth: 3,
            ..SimulationParameters::default()
        };

        let months = simulate(&params).unwrap();

        for (index, month) in months.iter().enumerate() {
            assert_eq!(month.active_buyers, 10.0 + index as f64 * 3.0);
        }
        for pair in months.windows(2) {
            assert!(pair[1].active_buyers >= pair[0].active_buyers);
        }
    }

    #[test]
    fn meeting_volume_follows_the_yearly_activity_tiers() {
        let months = simulate(&flat_hundred_buyers()).unwrap();

        assert!((months[0].monthly_meetings - 25.0).abs() < EPSILON);
        assert!((months[12].monthly_meetings - 50.0).abs() < EPSILON);
        assert!((months[24].monthly_meetings - 100.0 * 10.0 / 12.0).abs() < EPSILON);
    }

    #[test]
    fn recurring_deals_sum_the_trailing_window_of_new_deals() {
        let params = SimulationParameters {
            commission_duration_months: 6,
            ..SimulationParameters::default()
        };

        let months = simulate(&params).unwrap();

        for (index, month) in months.iter().enumerate() {
            let window_start = (index + 1).saturating_sub(6);
            let expected: f64 = months[window_start..=index]
                .iter()
                .map(|record| record.new_deals)
                .sum();

            assert!((month.active_recurring_deals - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn window_clamps_to_the_single_first_month() {
        let params = SimulationParameters {
            commission_duration_months: 12,
            ..SimulationParameters::default()
        };

        let months = simulate(&params).unwrap();

        assert_eq!(months[0].active_recurring_deals, months[0].new_deals);
    }

    #[test]
    fn duration_longer_than_the_horizon_keeps_every_deal_active() {
        let params = SimulationParameters {
            commission_duration_months: 60,
            ..SimulationParameters::default()
        };

        let months = simulate(&params).unwrap();
        let all_deals: f64 = months.iter().map(|record| record.new_deals).sum();
        let last = months.last().unwrap();

        assert!((last.active_recurring_deals - all_deals).abs() < EPSILON);
    }

    #[test]
    fn revenue_streams_combine_into_total_revenue() {
        let months = simulate(&SimulationParameters::default()).unwrap();

        for month in &months {
            assert_eq!(
                month.total_revenue,
                month.meeting_revenue + month.commission_revenue
            );
            assert!(month.meeting_revenue >= 0.0);
            assert!(month.commission_revenue >= 0.0);
            assert!(month.total_revenue >= 0.0);
        }
    }

    #[test]
    fn commission_revenue_uses_ticket_size_and_rate() {
        let months = simulate(&flat_hundred_buyers()).unwrap();

        // Duration of one month: only the current month's deals recur.
        // 25 meetings -> 5 new deals -> 5 * 100_000 * 0.01.
        assert!((months[0].commission_revenue - 5_000.0).abs() < EPSILON);
        assert!((months[0].meeting_revenue - 25.0).abs() < EPSILON);
    }

    #[test]
    fn marketplace_without_buyers_produces_all_zero_records() {
        let params = SimulationParameters {
            initial_buyers: 0,
            monthly_growth: 0,
            ..SimulationParameters::default()
        };

        let months = simulate(&params).unwrap();

        assert_eq!(months.len(), HORIZON_MONTHS);
        for month in &months {
            assert_eq!(month.monthly_meetings, 0.0);
            assert_eq!(month.new_deals, 0.0);
            assert_eq!(month.active_recurring_deals, 0.0);
            assert_eq!(month.meeting_revenue, 0.0);
            assert_eq!(month.commission_revenue, 0.0);
            assert_eq!(month.total_revenue, 0.0);
        }
    }

    #[test]
    fn invalid_parameters_fail_before_any_record_is_produced() {
        let params = SimulationParameters {
            commission_rate: 0.0,
            ..SimulationParameters::default()
        };

        assert_eq!(
            simulate(&params),
            Err(ParameterError::CommissionRateOutOfRange)
        );
    }
}

use projection::MonthRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total_revenue: f64,
    pub final_year: i32,
    pub final_year_avg_monthly_revenue: f64,
    pub final_year_commission_share_pct: f64,
    pub final_active_buyers: u64,
}

impl Summary {
    pub fn from_months(months: &[MonthRecord]) -> Option<Self> {
        let last = months.last()?;
        let final_year = last.year;

        let total_revenue = months.iter().map(|month| month.total_revenue).sum();

        let mut final_year_months = 0usize;
        let mut final_year_total = 0.0;
        let mut final_year_commission = 0.0;
        for month in months.iter().filter(|month| month.year == final_year) {
            final_year_months += 1;
            final_year_total += month.total_revenue;
            final_year_commission += month.commission_revenue;
        }

        let final_year_commission_share_pct = if final_year_total > 0.0 {
            final_year_commission / final_year_total * 100.0
        } else {
            0.0
        };

        Some(Self {
            total_revenue,
            final_year,
            final_year_avg_monthly_revenue: final_year_total / final_year_months as f64,
            final_year_commission_share_pct,
            final_active_buyers: last.active_buyers as u64,
        })
    }
}

use std::{error, fmt};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub initial_buyers: u32,
    pub monthly_growth: u32,
    pub meeting_fee: f64,
    pub commission_rate: f64,
    pub commission_duration_months: u32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_buyers: 50,
            monthly_growth: 2,
            meeting_fee: 1_000.0,
            commission_rate: 0.01,
            commission_duration_months: 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    NonFiniteMeetingFee,
    NegativeMeetingFee,
    CommissionRateOutOfRange,
    ZeroCommissionDuration,
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteMeetingFee => write!(f, "meeting fee must be a finite number"),
            Self::NegativeMeetingFee => write!(f, "meeting fee must not be negative"),
            Self::CommissionRateOutOfRange => {
                write!(f, "commission rate must be a finite fraction in (0, 1]")
            }
            Self::ZeroCommissionDuration => {
                write!(f, "commission duration must be at least one month")
            }
        }
    }
}

impl error::Error for ParameterError {}

impl SimulationParameters {
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.meeting_fee.is_finite() {
            return Err(ParameterError::NonFiniteMeetingFee);
        }
        if self.meeting_fee < 0.0 {
            return Err(ParameterError::NegativeMeetingFee);
        }
        if !self.commission_rate.is_finite()
            || self.commission_rate <= 0.0
            || self.commission_rate > 1.0
        {
            return Err(ParameterError::CommissionRateOutOfRange);
        }
        if self.commission_duration_months == 0 {
            return Err(ParameterError::ZeroCommissionDuration);
        }

        Ok(())
    }
}

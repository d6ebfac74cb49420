use std::{
    env, fmt,
    net::{AddrParseError, SocketAddr},
    ops::RangeInclusive,
};

use projection::SimulationParameters;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_INITIAL_BUYERS: u32 = 50;
const DEFAULT_MONTHLY_GROWTH: u32 = 2;
const DEFAULT_MEETING_FEE: f64 = 1_000.0;
const DEFAULT_COMMISSION_RATE_PCT: f64 = 1.0;
const DEFAULT_COMMISSION_DURATION_YEARS: u32 = 1;

const INITIAL_BUYERS_RANGE: RangeInclusive<u32> = 10..=500;
const MONTHLY_GROWTH_RANGE: RangeInclusive<u32> = 1..=50;
const MEETING_FEE_RANGE: RangeInclusive<f64> = 100.0..=5_000.0;
const COMMISSION_RATE_PCT_RANGE: RangeInclusive<f64> = 0.5..=10.0;
const COMMISSION_DURATION_YEARS_RANGE: RangeInclusive<u32> = 1..=5;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub default_parameters: SimulationParameters,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidListenAddr(AddrParseError),
    InvalidInitialBuyers,
    InvalidMonthlyGrowth,
    InvalidMeetingFee,
    InvalidCommissionRatePct,
    InvalidCommissionDurationYears,
    NonUnicode(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidListenAddr(err) => {
                write!(f, "FORECAST_SERVER_ADDR is not a valid socket address: {err}")
            }
            Self::InvalidInitialBuyers => {
                write!(f, "FORECAST_INITIAL_BUYERS must be an integer between 10 and 500")
            }
            Self::InvalidMonthlyGrowth => {
                write!(f, "FORECAST_MONTHLY_GROWTH must be an integer between 1 and 50")
            }
            Self::InvalidMeetingFee => {
                write!(f, "FORECAST_MEETING_FEE must be a number between 100 and 5000")
            }
            Self::InvalidCommissionRatePct => {
                write!(
                    f,
                    "FORECAST_COMMISSION_RATE_PCT must be a percentage between 0.5 and 10"
                )
            }
            Self::InvalidCommissionDurationYears => {
                write!(
                    f,
                    "FORECAST_COMMISSION_DURATION_YEARS must be an integer between 1 and 5"
                )
            }
            Self::NonUnicode(key) => write!(f, "{key} contains non-unicode data"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidListenAddr(err) => Some(err),
            _ => None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match env::var("FORECAST_SERVER_ADDR") {
            Ok(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            Err(env::VarError::NotPresent) => DEFAULT_LISTEN_ADDR
                .parse()
                .expect("default listen address must be valid"),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicode("FORECAST_SERVER_ADDR"));
            }
        };

        let initial_buyers = parse_u32_range_env(
            "FORECAST_INITIAL_BUYERS",
            DEFAULT_INITIAL_BUYERS,
            INITIAL_BUYERS_RANGE,
            ConfigError::InvalidInitialBuyers,
        )?;

        let monthly_growth = parse_u32_range_env(
            "FORECAST_MONTHLY_GROWTH",
            DEFAULT_MONTHLY_GROWTH,
            MONTHLY_GROWTH_RANGE,
            ConfigError::InvalidMonthlyGrowth,
        )?;

        let meeting_fee = parse_f64_range_env(
            "FORECAST_MEETING_FEE",
            DEFAULT_MEETING_FEE,
            MEETING_FEE_RANGE,
            ConfigError::InvalidMeetingFee,
        )?;

        let commission_rate_pct = parse_f64_range_env(
            "FORECAST_COMMISSION_RATE_PCT",
            DEFAULT_COMMISSION_RATE_PCT,
            COMMISSION_RATE_PCT_RANGE,
            ConfigError::InvalidCommissionRatePct,
        )?;

        let commission_duration_years = parse_u32_range_env(
            "FORECAST_COMMISSION_DURATION_YEARS",
            DEFAULT_COMMISSION_DURATION_YEARS,
            COMMISSION_DURATION_YEARS_RANGE,
            ConfigError::InvalidCommissionDurationYears,
        )?;

        Ok(Self {
            listen_addr,
            default_parameters: SimulationParameters {
                initial_buyers,
                monthly_growth,
                meeting_fee,
                commission_rate: commission_rate_pct / 100.0,
                commission_duration_months: commission_duration_years * 12,
            },
        })
    }
}

fn parse_u32_range_env(
    key: &'static str,
    default_value: u32,
    range: RangeInclusive<u32>,
    invalid_error: ConfigError,
) -> Result<u32, ConfigError> {
    match env::var(key) {
        Ok(value) => {
            let parsed = match value.parse::<u32>() {
                Ok(parsed) => parsed,
                Err(_) => return Err(invalid_error),
            };
            if !range.contains(&parsed) {
                return Err(invalid_error);
            }
            Ok(parsed)
        }
        Err(env::VarError::NotPresent) => Ok(default_value),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NonUnicode(key)),
    }
}

fn parse_f64_range_env(
    key: &'static str,
    default_value: f64,
    range: RangeInclusive<f64>,
    invalid_error: ConfigError,
) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(value) => {
            let parsed = match value.parse::<f64>() {
                Ok(parsed) => parsed,
                Err(_) => return Err(invalid_error),
            };
            if !parsed.is_finite() || !range.contains(&parsed) {
                return Err(invalid_error);
            }
            Ok(parsed)
        }
        Err(env::VarError::NotPresent) => Ok(default_value),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NonUnicode(key)),
    }
}

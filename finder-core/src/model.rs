use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors raised by the input view.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The user-visible message for an empty or whitespace-only submission.
    #[error("City name cannot be empty")]
    EmptyCity,
}

/// A validated, trimmed, non-empty location string.
///
/// This is the only value passed from the input view to the result view;
/// constructing one is the only way to trigger a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    /// Trim and validate raw user input.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyCity);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CityQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current conditions for one city query, as returned by the provider.
///
/// Owned by a single result-view activation and discarded on navigation;
/// nothing is cached between submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub condition: String,
    pub observation_time: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Derived display value; callers format it to two decimals.
    pub fn temperature_f(&self) -> f64 {
        self.temperature_c * 9.0 / 5.0 + 32.0
    }
}

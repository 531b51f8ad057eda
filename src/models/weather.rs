//! Daily weather forecast model and condition classification

use serde::{Deserialize, Serialize};

/// Weather condition vocabulary reported by the forecast provider
///
/// Values mirror the provider's `weather.main` field; anything outside
/// the known vocabulary maps to `Unknown` and carries no planning bias.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Drizzle,
    Snow,
    #[serde(other)]
    Unknown,
}

impl WeatherCondition {
    /// Whether this condition pushes the day towards covered venues
    #[must_use]
    pub fn favours_indoor(&self) -> bool {
        matches!(
            self,
            Self::Rain | Self::Thunderstorm | Self::Drizzle | Self::Snow
        )
    }

    /// Whether this condition pushes the day towards open-air venues
    #[must_use]
    pub fn favours_outdoor(&self) -> bool {
        matches!(self, Self::Clear | Self::Clouds)
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Thunderstorm => "Thunderstorm",
            Self::Drizzle => "Drizzle",
            Self::Snow => "Snow",
            Self::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// One day of the trip's weather forecast
///
/// Forecasts are ordered sequences, index 0 = day 1; a forecast may be
/// shorter than the trip or empty when the provider is unavailable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherDay {
    /// 1-based trip day this entry applies to
    pub day: u32,
    /// Dominant condition for the day
    pub condition: WeatherCondition,
    /// Temperature in Celsius
    pub temp: f32,
    /// Human-readable description of the conditions
    pub description: String,
    /// Relative humidity percentage
    pub humidity: u8,
}

//! Weather forecast client for OpenWeatherMap integration
//!
//! Fetches the 5-day/3-hour forecast for a destination city and samples
//! one entry per trip day. The planner treats weather as advisory, so
//! this client never fails outward: any network, auth, or parse problem
//! yields an empty forecast and a warning, and planning proceeds
//! weather-blind.

use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};

use crate::config::WeatherConfig;
use crate::models::WeatherDay;

/// The provider serves at most five days of forecast
pub const MAX_FORECAST_DAYS: usize = 5;

/// 3-hourly entries per forecast day
const SAMPLES_PER_DAY: usize = 8;

/// Fetch the daily forecast for a city, degrading to empty on any failure
pub async fn fetch_forecast(
    client: &reqwest::Client,
    config: &WeatherConfig,
    city: &str,
    days: u32,
) -> Vec<WeatherDay> {
    match fetch_forecast_inner(client, config, city, days).await {
        Ok(forecast) => {
            info!(city, days = forecast.len(), "weather forecast fetched");
            forecast
        }
        Err(err) => {
            warn!(city, error = %format!("{err:#}"), "weather forecast unavailable, planning without it");
            Vec::new()
        }
    }
}

async fn fetch_forecast_inner(
    client: &reqwest::Client,
    config: &WeatherConfig,
    city: &str,
    days: u32,
) -> Result<Vec<WeatherDay>> {
    let api_key = config
        .api_key
        .as_deref()
        .ok_or_else(|| anyhow!("no weather API key configured"))?;

    let url = format!(
        "{}/forecast?q={}&appid={}&units=metric",
        config.base_url,
        urlencoding::encode(city),
        api_key
    );

    let mut attempt = 0u32;
    let response = loop {
        match client.get(&url).send().await {
            Ok(response) => break response,
            Err(err) if attempt < config.max_retries => {
                attempt += 1;
                warn!(city, attempt, "weather request failed, retrying: {err}");
                tokio::time::sleep(std::time::Duration::from_millis(250 * u64::from(attempt)))
                    .await;
            }
            Err(err) => return Err(err).with_context(|| "Weather request failed"),
        }
    };

    let response = response
        .error_for_status()
        .with_context(|| "Weather API returned an error status")?;

    let payload: openweather::ForecastResponse = response
        .json()
        .await
        .with_context(|| "Failed to parse OpenWeatherMap forecast response")?;

    Ok(openweather::to_weather_days(&payload, days))
}

/// `OpenWeatherMap` API response structures and conversion utilities
mod openweather {
    use serde::Deserialize;

    use super::{MAX_FORECAST_DAYS, SAMPLES_PER_DAY};
    use crate::models::{WeatherCondition, WeatherDay};

    /// Forecast response from the 5-day/3-hour endpoint
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub list: Vec<ForecastEntry>,
    }

    /// One 3-hour forecast slot
    #[derive(Debug, Deserialize)]
    pub struct ForecastEntry {
        pub main: MainData,
        pub weather: Vec<ConditionData>,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainData {
        pub temp: f32,
        pub humidity: u8,
    }

    #[derive(Debug, Deserialize)]
    pub struct ConditionData {
        pub main: WeatherCondition,
        pub description: String,
    }

    /// Sample one slot per day from the 3-hourly list
    ///
    /// Slot `i * 8` lands at the same time-of-day on each successive day.
    pub fn to_weather_days(response: &ForecastResponse, days: u32) -> Vec<WeatherDay> {
        let mut forecast = Vec::new();

        for day_index in 0..(days as usize).min(MAX_FORECAST_DAYS) {
            let Some(entry) = response.list.get(day_index * SAMPLES_PER_DAY) else {
                break;
            };

            let (condition, description) = entry
                .weather
                .first()
                .map(|w| (w.main, w.description.clone()))
                .unwrap_or((WeatherCondition::Unknown, String::new()));

            forecast.push(WeatherDay {
                day: day_index as u32 + 1,
                condition,
                temp: (entry.main.temp * 10.0).round() / 10.0,
                description,
                humidity: entry.main.humidity,
            });
        }

        forecast
    }
}

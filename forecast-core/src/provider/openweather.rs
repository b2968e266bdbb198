use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::WeatherError,
    model::{WeatherQuery, WeatherReport},
};

use super::WeatherProvider;

pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Client for the OpenWeatherMap current-weather endpoint.
///
/// Issues exactly one request per lookup, without timeout or retry.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new() -> Self {
        Self::with_base_url(OPENWEATHER_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn current_url(&self) -> String {
        format!("{}{}", self.base_url, CURRENT_WEATHER_PATH)
    }
}

impl Default for OpenWeatherProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
}

/// Decode a current-weather JSON body into a report.
pub fn parse_current(body: &str) -> Result<WeatherReport, WeatherError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;

    let description = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or(WeatherError::NoConditions)?;

    Ok(WeatherReport {
        location_name: parsed.name,
        country_code: parsed.sys.country,
        temperature: parsed.main.temp,
        feels_like: parsed.main.feels_like,
        description,
    })
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError> {
        debug!(city = %query.city, units = %query.units, "requesting current weather");

        let res = self
            .http
            .get(self.current_url())
            .query(&[
                ("q", query.city.as_str()),
                ("units", query.units.as_str()),
                ("appid", query.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(WeatherError::Transport)?;

        let status = res.status();
        debug!(%status, "OpenWeather responded");

        // `res` is dropped on the early returns, which releases the body.
        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::CityNotFound {
                city: query.city.clone(),
            });
        }
        if status != StatusCode::OK {
            return Err(WeatherError::Status {
                status: status.as_u16(),
            });
        }

        let body = res.text().await.map_err(WeatherError::Transport)?;

        parse_current(&body)
    }
}

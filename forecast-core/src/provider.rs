use crate::{WeatherError, WeatherQuery, WeatherReport};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Source of current weather conditions.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError>;
}

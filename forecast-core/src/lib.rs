//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - The on-disk configuration (`~/.forecast/config.yaml`)
//! - The OpenWeatherMap current-weather client
//! - Shared domain models (queries, reports, units) and errors
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::{Config, ConfigKey, ConfigStore};
pub use error::{UnknownUnits, WeatherError};
pub use model::{Units, WeatherQuery, WeatherReport};
pub use provider::{OpenWeatherProvider, WeatherProvider};

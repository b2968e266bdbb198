use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::UnknownUnits;

/// Measurement system passed to OpenWeatherMap as the `units` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = UnknownUnits;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            other => Err(UnknownUnits(other.to_string())),
        }
    }
}

/// One resolved lookup: the flags given on the command line with
/// configuration values filled in for whatever was left out.
#[derive(Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: String,
    pub units: Units,
    pub api_key: String,
}

impl fmt::Debug for WeatherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherQuery")
            .field("city", &self.city)
            .field("units", &self.units)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Display fields extracted from a current-weather response.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub location_name: String,
    pub country_code: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_parse_known_values() {
        assert_eq!("metric".parse::<Units>().unwrap(), Units::Metric);
        assert_eq!("imperial".parse::<Units>().unwrap(), Units::Imperial);
    }

    #[test]
    fn units_reject_anything_else() {
        let err = "kelvin".parse::<Units>().unwrap_err();
        assert!(err.to_string().contains("kelvin"));
        assert!("Metric".parse::<Units>().is_err());
    }

    #[test]
    fn query_debug_hides_api_key() {
        let query = WeatherQuery {
            city: "Paris".into(),
            units: Units::Metric,
            api_key: "secret-key".into(),
        };

        let dbg = format!("{query:?}");
        assert!(dbg.contains("Paris"));
        assert!(!dbg.contains("secret-key"));
    }
}

use thiserror::Error;

/// Returned when a units value is neither `metric` nor `imperial`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown units '{0}', expected 'metric' or 'imperial'")]
pub struct UnknownUnits(pub String);

/// Everything that can end a weather lookup early.
///
/// The `Display` output is meant to be shown to the user as-is.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(
        "Error: OpenWeatherMap API key not found. Please run 'forecast setup' to configure your API key."
    )]
    MissingApiKey,

    #[error("City '{city}' not found.")]
    CityNotFound { city: String },

    #[error("Error: received status code {status}")]
    Status { status: u16 },

    #[error("Error fetching weather data: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Error decoding JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Error decoding JSON response: no weather conditions in payload")]
    NoConditions,
}

// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use std::fmt;
use std::time::Duration;

pub(crate) const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Measurement system the API reports numeric fields in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
  #[default]
  Imperial,
  Metric,
  Standard,
}

impl Units {
  /// Parses a caller-supplied unit-system name. Empty input falls back to
  /// imperial; unknown names are rejected rather than passed upstream.
  pub fn parse(value: &str) -> Result<Self, Error> {
    match value.trim().to_lowercase().as_str() {
      "" | "imperial" => Ok(Self::Imperial),
      "metric" => Ok(Self::Metric),
      "standard" => Ok(Self::Standard),
      other => Err(Error::InvalidUnits(other.to_string())),
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Imperial => "imperial",
      Self::Metric => "metric",
      Self::Standard => "standard",
    }
  }
}

impl fmt::Display for Units {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone)]
pub struct WeatherConfig {
  pub(crate) api_key: String,
  pub(crate) units: Units,
  pub(crate) endpoint: String,
  pub(crate) timeout: Duration,
}

impl WeatherConfig {
  pub fn new(api_key: impl Into<String>, units: &str) -> Result<Self, Error> {
    let api_key = api_key.into();
    if api_key.trim().is_empty() {
      return Err(Error::InvalidApiKey);
    }

    Ok(Self {
      api_key,
      units: Units::parse(units)?,
      endpoint: API_BASE_URL.to_string(),
      timeout: REQUEST_TIMEOUT,
    })
  }

  /// Points the client at a different service root. Production callers
  /// never need this; tests aim it at a local mock server.
  pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
    self.endpoint = endpoint.into();
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_units_fall_back_to_imperial() {
    assert_eq!(Units::parse("").unwrap(), Units::Imperial);
  }

  #[test]
  fn known_units_parse_case_insensitively() {
    assert_eq!(Units::parse("Metric").unwrap(), Units::Metric);
    assert_eq!(Units::parse("IMPERIAL").unwrap(), Units::Imperial);
    assert_eq!(Units::parse("standard").unwrap(), Units::Standard);
  }

  #[test]
  fn unknown_units_are_rejected() {
    let err = Units::parse("kelvin").unwrap_err();
    assert!(matches!(err, Error::InvalidUnits(ref name) if name == "kelvin"));
  }

  #[test]
  fn units_display_the_wire_names() {
    assert_eq!(Units::Imperial.to_string(), "imperial");
    assert_eq!(Units::Metric.to_string(), "metric");
    assert_eq!(Units::Standard.to_string(), "standard");
  }

  #[test]
  fn blank_api_key_is_rejected() {
    let err = WeatherConfig::new("  ", "").unwrap_err();
    assert!(matches!(err, Error::InvalidApiKey));
  }

  #[test]
  fn config_defaults() {
    let config = WeatherConfig::new("k1", "").unwrap();
    assert_eq!(config.units, Units::Imperial);
    assert_eq!(config.endpoint, API_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(30));
  }
}

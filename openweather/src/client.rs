// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{config::WeatherConfig, models::WeatherResponse, query::location_query};
use error::Error;
use tracing::{debug, instrument, warn};
use url::Url;

/// Client for the current-weather endpoint. Holds only immutable
/// configuration, so concurrent calls need no locking; every call is a
/// single outbound request with no retries and no caching.
#[derive(Clone, Debug)]
pub struct WeatherClient {
  base: Url,
  client: reqwest::Client,
}

impl WeatherClient {
  pub fn new(config: WeatherConfig) -> Result<Self, Error> {
    let base = Url::parse_with_params(
      &config.endpoint,
      &[
        ("units", config.units.as_str()),
        ("appid", config.api_key.as_str()),
      ],
    )
    .map_err(|e| Error::Config(format!("Invalid endpoint: {e}")))?;

    let client = reqwest::Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(Error::Transport)?;

    Ok(Self { base, client })
  }

  fn endpoint(&self, query: &str) -> String {
    format!("{}&{}", self.base, query)
  }

  /// Issues one GET for the given query fragment and decodes the reply.
  ///
  /// Failure kinds stay distinct: a network failure or timeout surfaces as
  /// `Transport`, a non-2xx status as `UpstreamStatus` carrying the status
  /// and whatever body was readable, a body that cannot be consumed after
  /// a success status as `Read`, and malformed or mis-shaped JSON as
  /// `Decode`.
  #[instrument(skip(self))]
  pub async fn execute(&self, query: &str) -> Result<WeatherResponse, Error> {
    let url = self.endpoint(query);

    let response = self
      .client
      .get(&url)
      .send()
      .await
      .map_err(Error::Transport)?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      warn!("Weather API returned status {status}");
      return Err(Error::UpstreamStatus { status, body });
    }

    let body = response.text().await.map_err(|e| {
      if e.is_timeout() {
        Error::Transport(e)
      } else {
        Error::Read(e)
      }
    })?;

    let report: WeatherResponse = serde_json::from_str(&body).map_err(Error::Decode)?;
    debug!("Received weather for {}", report.name);

    Ok(report)
  }

  /// Queries by place name, skipping empty parts (see `location_query`).
  #[instrument(skip(self))]
  pub async fn query_by_name(
    &self,
    city: &str,
    region: &str,
    country: &str,
  ) -> Result<WeatherResponse, Error> {
    self.execute(&location_query(city, region, country)).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn base_endpoint_normalizes_empty_units_to_imperial() {
    let config = WeatherConfig::new("k1", "").unwrap();
    let client = WeatherClient::new(config).unwrap();

    assert_eq!(
      client.endpoint("q=London"),
      "https://api.openweathermap.org/data/2.5/weather?units=imperial&appid=k1&q=London"
    );
  }

  #[test]
  fn request_url_appends_fragment_after_base() {
    let config = WeatherConfig::new("k1", "metric")
      .unwrap()
      .with_endpoint("http://127.0.0.1:9000/data/2.5/weather");
    let client = WeatherClient::new(config).unwrap();

    assert_eq!(
      client.endpoint("q=Paris,FR"),
      "http://127.0.0.1:9000/data/2.5/weather?units=metric&appid=k1&q=Paris,FR"
    );
  }

  #[test]
  fn unparsable_endpoint_is_a_config_error() {
    let config = WeatherConfig::new("k1", "")
      .unwrap()
      .with_endpoint("not a url");
    let err = WeatherClient::new(config).unwrap_err();

    assert!(matches!(err, Error::Config(_)));
  }
}

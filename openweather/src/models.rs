// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use chrono::{DateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct Coordinate {
  pub lon: f64,
  pub lat: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
  pub main: String,
  pub description: String,
  pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainWeather {
  pub temp: f64,
  pub feels_like: f64,
  pub temp_min: f64,
  pub temp_max: f64,
  pub pressure: f64,
  pub humidity: f64,
}

/// Country code plus the sunrise/sunset instants of the `sys` block.
#[derive(Debug, Clone)]
pub struct SunTime {
  pub country: String,
  pub sunrise: DateTime<Utc>,
  pub sunset: DateTime<Utc>,
}

// Upstream encodes sunrise/sunset as Unix epoch seconds, not date-time
// strings. The two integers are decoded statically and converted here;
// every other field keeps plain JSON typing.
impl<'de> Deserialize<'de> for SunTime {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    #[derive(Deserialize)]
    struct RawSunTime {
      country: String,
      sunrise: i64,
      sunset: i64,
    }

    let raw = RawSunTime::deserialize(deserializer)?;

    let sunrise = Utc
      .timestamp_opt(raw.sunrise, 0)
      .single()
      .ok_or_else(|| de::Error::custom("Invalid sunrise timestamp"))?;

    let sunset = Utc
      .timestamp_opt(raw.sunset, 0)
      .single()
      .ok_or_else(|| de::Error::custom("Invalid sunset timestamp"))?;

    Ok(Self {
      country: raw.country,
      sunrise,
      sunset,
    })
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
  pub name: String,
  pub coord: Coordinate,
  pub weather: Vec<WeatherCondition>,
  pub sys: SunTime,
  pub main: MainWeather,
}

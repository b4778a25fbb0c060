// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod client;
pub mod config;
pub mod models;
pub mod query;

pub use client::WeatherClient;
pub use config::{Units, WeatherConfig};
pub use models::{Coordinate, MainWeather, SunTime, WeatherCondition, WeatherResponse};
pub use query::location_query;

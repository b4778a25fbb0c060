// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("Configuration error: {0}")]
  Config(String),
  #[error("Invalid API key")]
  InvalidApiKey,
  #[error("Unknown unit system: {0}")]
  InvalidUnits(String),
  #[error("Transport error: {0}")]
  Transport(reqwest::Error),
  #[error("Weather API returned status {status}: {body}")]
  UpstreamStatus {
    status: reqwest::StatusCode,
    body: String,
  },
  #[error("Failed to read response body: {0}")]
  Read(reqwest::Error),
  #[error("Failed to decode weather response: {0}")]
  Decode(#[from] serde_json::Error),
  #[error("Failed to build email message: {0}")]
  Email(#[from] lettre::error::Error),
  #[error("Invalid mailbox address: {0}")]
  Address(#[from] lettre::address::AddressError),
  #[error("SMTP transport error: {0}")]
  Smtp(#[from] lettre::transport::smtp::Error),
}

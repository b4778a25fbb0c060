// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::time::Duration;

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub(crate) const DEFAULT_MIME: &str = "text/plain; charset=utf-8";

#[derive(Clone, Debug)]
pub struct EmailConfig {
  pub(crate) address: String,
  pub(crate) port: Option<u16>,
  pub(crate) username: String,
  pub(crate) password: String,
  pub(crate) mime: String,
  pub(crate) timeout: Duration,
}

impl Default for EmailConfig {
  fn default() -> Self {
    Self {
      address: String::new(),
      port: None,
      username: String::new(),
      password: String::new(),
      mime: DEFAULT_MIME.to_string(),
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
  }
}

// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{client::EmailClient, config::EmailConfig};
use error::Error;
use lettre::{
  message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
  Tokio1Executor,
};

#[derive(Default)]
pub struct EmailClientBuilder {
  pub(crate) config: EmailConfig,
}

impl EmailClientBuilder {
  pub fn address(mut self, address: impl Into<String>) -> Self {
    self.config.address = address.into();
    self
  }

  pub fn port(mut self, port: u16) -> Self {
    self.config.port = Some(port);
    self
  }

  pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
    self.config.username = username.into();
    self.config.password = password.into();
    self
  }

  /// Pre-formatted MIME content type applied to every message body,
  /// e.g. `text/html; charset=utf-8`.
  pub fn mime(mut self, mime: impl Into<String>) -> Self {
    self.config.mime = mime.into();
    self
  }

  pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
    self.config.timeout = timeout;
    self
  }

  pub fn build(self) -> Result<EmailClient, Error> {
    if self.config.address.is_empty() {
      return Err(Error::Config("SMTP address cannot be empty".into()));
    }

    let content_type = ContentType::parse(&self.config.mime)
      .map_err(|e| Error::Config(format!("Invalid MIME content type: {e}")))?;

    let mut transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.address)?
      .timeout(Some(self.config.timeout));

    if let Some(port) = self.config.port {
      transport = transport.port(port);
    }

    if !self.config.username.is_empty() {
      transport = transport.credentials(Credentials::new(
        self.config.username.clone(),
        self.config.password.clone(),
      ));
    }

    Ok(EmailClient {
      transport: transport.build(),
      content_type,
      config: self.config,
    })
  }
}

// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{builders::EmailClientBuilder, config::EmailConfig};
use error::Error;
use lettre::{
  message::{header::ContentType, Mailbox},
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{debug, instrument};

/// One-call SMTP sender. Transport address, credentials and the MIME
/// content type are fixed at construction; each send composes a message
/// and hands it to the relay exactly once.
#[derive(Clone, Debug)]
pub struct EmailClient {
  pub(crate) config: EmailConfig,
  pub(crate) content_type: ContentType,
  pub(crate) transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailClient {
  pub fn builder() -> EmailClientBuilder {
    EmailClientBuilder::default()
  }

  #[instrument(skip(self, subject, body), fields(recipients = to.len()))]
  pub async fn send_email(
    &self,
    to: &[String],
    from: &str,
    subject: &str,
    body: &str,
  ) -> Result<(), Error> {
    let message = self.compose(to, from, subject, body)?;
    self.transport.send(message).await?;
    debug!("Email sent via {}", self.config.address);
    Ok(())
  }

  pub(crate) fn compose(
    &self,
    to: &[String],
    from: &str,
    subject: &str,
    body: &str,
  ) -> Result<Message, Error> {
    let mut builder = Message::builder()
      .from(from.parse::<Mailbox>()?)
      .subject(subject)
      .header(self.content_type.clone());

    for recipient in to {
      builder = builder.to(recipient.parse::<Mailbox>()?);
    }

    Ok(builder.body(body.to_string())?)
  }
}

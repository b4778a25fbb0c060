// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::client::EmailClient;
use async_trait::async_trait;
use error::Error;

/// Generic notification capability. Orchestrators depend on this seam, not
/// on the SMTP client behind it.
#[async_trait]
pub trait NotificationSender: Send + Sync {
  async fn send(&self, to: &[String], from: &str, subject: &str, body: &str) -> Result<(), Error>;
}

#[async_trait]
impl NotificationSender for EmailClient {
  async fn send(&self, to: &[String], from: &str, subject: &str, body: &str) -> Result<(), Error> {
    self.send_email(to, from, subject, body).await
  }
}

/// A self-describing message, e.g. a daily weather digest type.
pub trait Notification {
  fn recipients(&self) -> &[String];
  fn sender(&self) -> &str;
  fn subject(&self) -> &str;
  fn body(&self) -> &str;
}

impl EmailClient {
  pub async fn send_notification<N>(&self, notification: &N) -> Result<(), Error>
  where
    N: Notification + Sync,
  {
    self
      .send_email(
        notification.recipients(),
        notification.sender(),
        notification.subject(),
        notification.body(),
      )
      .await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct DailyDigest {
    to: Vec<String>,
  }

  impl Notification for DailyDigest {
    fn recipients(&self) -> &[String] {
      &self.to
    }

    fn sender(&self) -> &str {
      "digest@example.com"
    }

    fn subject(&self) -> &str {
      "Daily weather digest"
    }

    fn body(&self) -> &str {
      "Sunny, 72F."
    }
  }

  fn test_client() -> EmailClient {
    EmailClient::builder()
      .address("smtp.example.com")
      .build()
      .expect("client should build")
  }

  #[tokio::test]
  async fn email_client_is_a_notification_sender() {
    let client = test_client();
    let _sender: &dyn NotificationSender = &client;
  }

  #[tokio::test]
  async fn notification_fields_flow_into_the_message() {
    let client = test_client();
    let digest = DailyDigest {
      to: vec!["ops@example.com".to_string()],
    };

    let message = client
      .compose(
        digest.recipients(),
        digest.sender(),
        digest.subject(),
        digest.body(),
      )
      .unwrap();

    let rendered = String::from_utf8_lossy(&message.formatted()).to_string();
    assert!(rendered.contains("Subject: Daily weather digest"));
    assert!(rendered.contains("ops@example.com"));
    assert!(rendered.contains("Sunny, 72F."));
  }
}

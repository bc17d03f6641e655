use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::AlertEvent;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

pub const ALERT_SUBJECT: &str = "Flight Alerts";
pub const ERROR_SUBJECT: &str = "Flight Monitor Error Alert";

/// Delivers one message to a set of recipients.
pub trait Notifier {
    fn send(&self, recipients: &[String], subject: &str, body: &str) -> AppResult<()>;
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn send(&self, recipients: &[String], subject: &str, body: &str) -> AppResult<()> {
        (**self).send(recipients, subject, body)
    }
}

/// SMTP over implicit TLS with the sender's credentials.
pub struct SmtpNotifier {
    sender: String,
    password: String,
    host: String,
    port: u16,
}

impl SmtpNotifier {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            sender: cfg.email_sender.clone(),
            password: cfg.email_password.clone(),
            host: cfg.smtp_host.clone(),
            port: cfg.smtp_port,
        }
    }
}

impl Notifier for SmtpNotifier {
    fn send(&self, recipients: &[String], subject: &str, body: &str) -> AppResult<()> {
        if recipients.is_empty() {
            return Err(AppError::Config("no email receivers configured".into()));
        }

        let mut builder = Message::builder()
            .from(self.sender.parse()?)
            .subject(subject)
            .date_now();
        for rcpt in recipients {
            builder = builder.to(rcpt.parse()?);
        }
        let message = builder
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        let mailer = SmtpTransport::relay(&self.host)?
            .port(self.port)
            .credentials(Credentials::new(self.sender.clone(), self.password.clone()))
            .build();
        mailer.send(&message)?;

        info!(subject, recipients = recipients.len(), "email sent");
        Ok(())
    }
}

/// Body of the alert email: one block per alert, in order.
pub fn alert_body(alerts: &[AlertEvent], currency: &str) -> String {
    alerts
        .iter()
        .map(|a| a.render(currency))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn error_body(error_message: &str) -> String {
    format!(
        "An error occurred while fetching flight data:\n\n\
         Error: {error_message}\n\n\
         This is a notification to inform you of the issue. \
         The monitor will attempt to run again in the next scheduled interval.\n"
    )
}

pub mod smtp;
pub mod templates;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::config::Config;
use crate::models::Contact;

pub use smtp::SmtpMailer;

#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug)]
pub struct MailError {
    pub message: String,
}

impl std::fmt::Display for MailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for MailError {
    fn from(s: String) -> Self {
        MailError { message: s }
    }
}

impl From<&str> for MailError {
    fn from(s: &str) -> Self {
        MailError {
            message: s.to_string(),
        }
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;
}

/// Sends the owner notification and the sender auto-reply for a stored
/// submission. Does nothing when no mailer is configured.
#[derive(Clone)]
pub struct Notifier {
    mailer: Option<Arc<dyn Mailer>>,
    notify_to: String,
    owner_name: String,
}

impl Notifier {
    pub fn new(mailer: Arc<dyn Mailer>, notify_to: String, owner_name: String) -> Self {
        Self {
            mailer: Some(mailer),
            notify_to,
            owner_name,
        }
    }

    pub fn disabled() -> Self {
        Self {
            mailer: None,
            notify_to: String::new(),
            owner_name: String::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let Some(mail) = config.mail.as_ref() else {
            tracing::info!("Mail credentials not set, contact notifications disabled");
            return Self::disabled();
        };

        match SmtpMailer::new(mail) {
            Ok(mailer) => {
                tracing::info!(smtp_host = %mail.host, smtp_port = mail.port, "Contact notifications enabled");
                Self::new(
                    Arc::new(mailer),
                    mail.notify_to.clone(),
                    mail.owner_name.clone(),
                )
            }
            Err(e) => {
                tracing::warn!("SMTP not available, contact notifications disabled: {e}");
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.mailer.is_some()
    }

    /// Spawn a detached task that attempts both emails independently. Failures
    /// are logged inside the task and never reach the caller.
    pub fn dispatch(&self, contact: &Contact) -> Option<JoinHandle<()>> {
        let mailer = self.mailer.clone()?;

        let owner_email = templates::owner_notification(contact, &self.notify_to);
        let auto_reply = templates::auto_reply(contact, &self.owner_name);
        let contact_id = contact.id;

        Some(tokio::spawn(async move {
            tokio::join!(
                deliver(mailer.as_ref(), contact_id, "owner notification", owner_email),
                deliver(mailer.as_ref(), contact_id, "auto-reply", auto_reply),
            );
        }))
    }
}

async fn deliver(
    mailer: &dyn Mailer,
    contact_id: Uuid,
    kind: &str,
    email: Result<OutgoingEmail, MailError>,
) {
    let result = match email {
        Ok(email) => mailer.send(email).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => tracing::info!(%contact_id, "Sent {kind} email"),
        Err(e) => tracing::error!(%contact_id, "Failed to send {kind} email: {e}"),
    }
}

use askama::Template;

use crate::models::Contact;

use super::{MailError, OutgoingEmail};

pub const AUTO_REPLY_SUBJECT: &str = "Thank you for contacting me!";

#[derive(Template)]
#[template(path = "email/owner_notification.html")]
struct OwnerNotificationTemplate<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    submitted_at: String,
}

#[derive(Template)]
#[template(path = "email/auto_reply.html")]
struct AutoReplyTemplate<'a> {
    name: &'a str,
    message: &'a str,
    owner_name: &'a str,
}

pub fn owner_notification(contact: &Contact, notify_to: &str) -> Result<OutgoingEmail, MailError> {
    let html = OwnerNotificationTemplate {
        name: &contact.name,
        email: &contact.email,
        message: &contact.message,
        submitted_at: contact.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    }
    .render()
    .map_err(|e| MailError::from(format!("Failed to render owner notification: {e}")))?;

    Ok(OutgoingEmail {
        to: notify_to.to_string(),
        subject: format!("New Contact Form Submission from {}", contact.name),
        html,
    })
}

pub fn auto_reply(contact: &Contact, owner_name: &str) -> Result<OutgoingEmail, MailError> {
    let html = AutoReplyTemplate {
        name: &contact.name,
        message: &contact.message,
        owner_name,
    }
    .render()
    .map_err(|e| MailError::from(format!("Failed to render auto-reply: {e}")))?;

    Ok(OutgoingEmail {
        to: contact.email.clone(),
        subject: AUTO_REPLY_SUBJECT.to_string(),
        html,
    })
}

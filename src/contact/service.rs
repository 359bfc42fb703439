use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::models::Contact;
use crate::notify::Notifier;

use super::form::{ContactForm, NewContact};

/// Identifier and creation time assigned by the store on insert.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
}

/// Submission and listing over the `contacts` table.
#[derive(Clone)]
pub struct ContactService {
    pool: PgPool,
    notifier: Notifier,
}

impl ContactService {
    pub fn new(pool: PgPool, notifier: Notifier) -> Self {
        Self { pool, notifier }
    }

    /// Validate, store, then hand the stored row to the notifier. The outcome
    /// depends on the insert alone; notification runs detached.
    pub async fn submit(&self, form: ContactForm) -> Result<Receipt, AppError> {
        let new_contact = NewContact::parse(form).inspect_err(|e| {
            tracing::debug!("Rejected contact submission: {} is missing", e.field);
        })?;

        let contact = db::contacts::create(&self.pool, &new_contact).await?;
        tracing::info!(contact_id = %contact.id, "Contact submission stored");

        if self.notifier.is_enabled() {
            self.notifier.dispatch(&contact);
        } else {
            tracing::debug!(contact_id = %contact.id, "Mail not configured, skipping notifications");
        }

        Ok(Receipt {
            id: contact.id,
            timestamp: contact.timestamp,
        })
    }

    /// Every stored submission, newest first.
    pub async fn list(&self) -> Result<Vec<Contact>, AppError> {
        Ok(db::contacts::list(&self.pool).await?)
    }
}

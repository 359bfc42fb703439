use sqlx::PgPool;

use crate::contact::NewContact;
use crate::models::Contact;

/// Insert one row. The store assigns `id` and `timestamp`.
pub async fn create(pool: &PgPool, contact: &NewContact) -> Result<Contact, sqlx::Error> {
    sqlx::query_as::<_, Contact>(
        "INSERT INTO contacts (name, email, message)
         VALUES ($1, $2, $3) RETURNING id, name, email, message, \"timestamp\"",
    )
    .bind(&contact.name)
    .bind(&contact.email)
    .bind(&contact.message)
    .fetch_one(pool)
    .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
    sqlx::query_as::<_, Contact>(
        "SELECT id, name, email, message, \"timestamp\" FROM contacts
         ORDER BY \"timestamp\" DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contacts")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

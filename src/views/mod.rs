pub mod admin;
pub mod dashboard;

use axum::routing::get;
use axum::Router;

use crate::models::Contact;
use crate::state::SharedState;

pub const LOAD_FAILED: &str = "Failed to fetch contacts";

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/admin", get(admin::contacts_page))
        .route("/dashboard", get(dashboard::index))
}

/// Display form of a stored submission.
struct ContactRow {
    name: String,
    email: String,
    message: String,
    received_at: String,
}

impl From<&Contact> for ContactRow {
    fn from(contact: &Contact) -> Self {
        ContactRow {
            name: contact.name.clone(),
            email: contact.email.clone(),
            message: contact.message.clone(),
            received_at: contact.timestamp.format("%Y-%m-%d %H:%M UTC").to_string(),
        }
    }
}

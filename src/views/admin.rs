use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::state::SharedState;

use super::{ContactRow, LOAD_FAILED};

#[derive(Template)]
#[template(path = "admin.html")]
struct ContactsTemplate {
    contacts: Vec<ContactRow>,
    total: usize,
    error: Option<&'static str>,
}

pub async fn contacts_page(State(state): State<SharedState>) -> Response {
    let (status, template) = match state.contacts.list().await {
        Ok(contacts) => (
            StatusCode::OK,
            ContactsTemplate {
                total: contacts.len(),
                contacts: contacts.iter().map(ContactRow::from).collect(),
                error: None,
            },
        ),
        Err(e) => {
            tracing::error!("Admin view could not load contacts: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ContactsTemplate {
                    contacts: Vec::new(),
                    total: 0,
                    error: Some(LOAD_FAILED),
                },
            )
        }
    };

    (status, Html(template.render().unwrap_or_default())).into_response()
}

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use chrono::Utc;

use crate::contact::DashboardStats;
use crate::state::SharedState;

use super::{ContactRow, LOAD_FAILED};

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    total: usize,
    this_week: usize,
    this_month: usize,
    recent: Vec<ContactRow>,
    error: Option<&'static str>,
}

pub async fn index(State(state): State<SharedState>) -> Response {
    let (status, template) = match state.contacts.list().await {
        Ok(contacts) => {
            let stats = DashboardStats::from_contacts(&contacts, Utc::now());
            (
                StatusCode::OK,
                DashboardTemplate {
                    total: stats.total,
                    this_week: stats.this_week,
                    this_month: stats.this_month,
                    recent: stats.recent.iter().map(ContactRow::from).collect(),
                    error: None,
                },
            )
        }
        Err(e) => {
            tracing::error!("Dashboard could not load contacts: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                DashboardTemplate {
                    total: 0,
                    this_week: 0,
                    this_month: 0,
                    recent: Vec::new(),
                    error: Some(LOAD_FAILED),
                },
            )
        }
    };

    (status, Html(template.render().unwrap_or_default())).into_response()
}

use chrono::{DateTime, Duration, Utc};

use crate::models::Contact;

pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub total: usize,
    pub this_week: usize,
    pub this_month: usize,
    pub recent: Vec<Contact>,
}

impl DashboardStats {
    /// `contacts` must already be ordered newest first.
    pub fn from_contacts(contacts: &[Contact], now: DateTime<Utc>) -> Self {
        let week_ago = now - Duration::days(7);
        let month_ago = now - Duration::days(30);

        DashboardStats {
            total: contacts.len(),
            this_week: contacts.iter().filter(|c| c.timestamp > week_ago).count(),
            this_month: contacts.iter().filter(|c| c.timestamp > month_ago).count(),
            recent: contacts.iter().take(RECENT_LIMIT).cloned().collect(),
        }
    }
}

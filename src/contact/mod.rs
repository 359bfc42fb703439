pub mod form;
pub mod service;
pub mod stats;

pub use form::{ContactForm, NewContact, ValidationError};
pub use service::{ContactService, Receipt};
pub use stats::DashboardStats;

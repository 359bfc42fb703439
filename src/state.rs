use std::sync::Arc;

use crate::auth::CredentialCheck;
use crate::contact::ContactService;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub contacts: ContactService,
    pub admin_gate: Arc<dyn CredentialCheck>,
}

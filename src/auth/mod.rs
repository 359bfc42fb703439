pub mod extractor;
pub mod gate;

pub use extractor::AdminAccess;
pub use gate::{CredentialCheck, SharedSecret};

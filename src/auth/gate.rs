use subtle::ConstantTimeEq;

use crate::error::AppError;

/// Capability check for the admin read path. Implementations decide from the
/// raw `Authorization` header whether the caller may proceed.
pub trait CredentialCheck: Send + Sync {
    fn check(&self, authorization: Option<&str>) -> Result<(), AppError>;
}

/// A single static bearer secret. The header must read exactly
/// `Bearer <secret>`; no case folding or trimming is applied.
pub struct SharedSecret {
    expected: String,
}

impl SharedSecret {
    pub fn new(secret: &str) -> Self {
        Self {
            expected: format!("Bearer {secret}"),
        }
    }
}

impl CredentialCheck for SharedSecret {
    fn check(&self, authorization: Option<&str>) -> Result<(), AppError> {
        let presented = authorization.unwrap_or_default();
        if bool::from(presented.as_bytes().ct_eq(self.expected.as_bytes())) {
            Ok(())
        } else {
            Err(AppError::Unauthorized("Unauthorized".to_string()))
        }
    }
}

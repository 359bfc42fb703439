use serde::Deserialize;

/// Message returned to the client for any missing or blank field.
pub const FIELDS_REQUIRED: &str = "All fields are required";

/// Contact form body as posted by the browser. Fields are optional here so a
/// missing key is reported as a validation failure, not a decoding failure.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// A submission that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(FIELDS_REQUIRED)
    }
}

impl std::error::Error for ValidationError {}

impl NewContact {
    /// Name and email are trimmed; the message is kept exactly as typed.
    pub fn parse(form: ContactForm) -> Result<Self, ValidationError> {
        let name = required("name", form.name)?;
        let email = required("email", form.email)?;
        let message = required("message", form.message)?;

        Ok(NewContact {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message,
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError { field }),
    }
}

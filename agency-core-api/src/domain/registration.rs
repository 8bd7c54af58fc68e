use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Upper bounds in bytes of UTF-8, matching the fixed-capacity storage
pub const DISPLAY_NAME_MAX_BYTES: usize = 100;
pub const EMAIL_MAX_BYTES: usize = 100;
pub const PHONE_MAX_BYTES: usize = 20;

/// Input of the agent registration flow
///
/// Minimum lengths count characters; maximum lengths count bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegisterAgentRequest {
    #[validate(length(min = 1), custom(function = "display_name_fits"))]
    pub display_name: String,

    #[validate(email, custom(function = "email_fits"))]
    pub email: Option<String>,

    #[validate(length(min = 5), custom(function = "phone_fits"))]
    pub phone: Option<String>,

    /// Code of the recruiting agent; blank or absent registers a root agent
    pub parent_code: Option<String>,
}

impl RegisterAgentRequest {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            email: None,
            phone: None,
            parent_code: None,
        }
    }

    pub fn with_parent(mut self, parent_code: impl Into<String>) -> Self {
        self.parent_code = Some(parent_code.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Parent code with surrounding whitespace removed, `None` when blank
    pub fn normalized_parent_code(&self) -> Option<&str> {
        self.parent_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

fn fits_bytes(value: &str, max: usize) -> Result<(), ValidationError> {
    if value.len() > max {
        let mut error = ValidationError::new("max_bytes");
        error.message = Some(Cow::Owned(format!("must be at most {max} bytes")));
        return Err(error);
    }
    Ok(())
}

fn display_name_fits(value: &str) -> Result<(), ValidationError> {
    fits_bytes(value, DISPLAY_NAME_MAX_BYTES)
}

fn email_fits(value: &str) -> Result<(), ValidationError> {
    fits_bytes(value, EMAIL_MAX_BYTES)
}

fn phone_fits(value: &str) -> Result<(), ValidationError> {
    fits_bytes(value, PHONE_MAX_BYTES)
}

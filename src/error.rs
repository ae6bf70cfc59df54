use thiserror::Error;

/// Message shown in place of the data-driven sections when loading fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load content. Please try again later.";

/// Fallback when the email service rejects a message without saying why.
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

/// Failure of a read from the content API.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),
    #[error("Request failed: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl LoadError {
    /// Every variant collapses to the same page-level message.
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}

/// Failure of a contact-form submission.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContactError {
    #[error(
        "Email service is not configured. Please set EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID, and EMAILJS_PUBLIC_KEY."
    )]
    NotConfigured,
    #[error("{0}")]
    Delivery(String),
}

impl ContactError {
    /// Builds a delivery error from whatever text the service returned.
    pub fn delivery(text: Option<&str>) -> Self {
        match text.map(str::trim) {
            Some(t) if !t.is_empty() => ContactError::Delivery(t.to_string()),
            _ => ContactError::Delivery(DELIVERY_FAILED_MESSAGE.to_string()),
        }
    }
}

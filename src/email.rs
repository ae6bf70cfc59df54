//! EmailJS REST payload.

use serde::Serialize;

use crate::config::EmailConfig;
use crate::model::ContactFields;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_SUBJECT: &str = "Contact Form Message";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub reply_to: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    /// EmailJS calls the public key `user_id`.
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl EmailRequest {
    pub fn new(config: &EmailConfig, fields: &ContactFields) -> Self {
        let subject = if fields.subject.trim().is_empty() {
            DEFAULT_SUBJECT.to_string()
        } else {
            fields.subject.clone()
        };
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams {
                from_name: fields.name.clone(),
                from_email: fields.email.clone(),
                reply_to: fields.email.clone(),
                subject,
                message: fields.message.clone(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

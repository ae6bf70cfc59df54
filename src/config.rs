//! Build-time settings.
//!
//! All values are baked in with `option_env!` when the wasm bundle is built,
//! e.g. `EMAILJS_SERVICE_ID=... wasm-pack build --target web`.

use crate::error::ContactError;

const DEFAULT_API_BASE: &str = "/api";

/// Resolved credentials for the EmailJS REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Raw email settings; any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailSettings {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

impl EmailSettings {
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Self {
        Self {
            service_id: service_id.map(str::to_owned),
            template_id: template_id.map(str::to_owned),
            public_key: public_key.map(str::to_owned),
        }
    }

    /// Fails with [`ContactError::NotConfigured`] when any value is missing or blank.
    pub fn resolve(&self) -> Result<EmailConfig, ContactError> {
        fn present(v: &Option<String>) -> Option<String> {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        }

        match (
            present(&self.service_id),
            present(&self.template_id),
            present(&self.public_key),
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => Ok(EmailConfig {
                service_id,
                template_id,
                public_key,
            }),
            _ => Err(ContactError::NotConfigured),
        }
    }
}

/// Everything the page reads from the build environment.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub api_base: String,
    pub remote_content: bool,
    pub log_level: log::LevelFilter,
    pub email: EmailSettings,
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self {
            api_base: option_env!("PORTFOLIO_API_BASE")
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_API_BASE)
                .trim_end_matches('/')
                .to_string(),
            remote_content: parse_flag(option_env!("PORTFOLIO_REMOTE_CONTENT")),
            log_level: parse_level(option_env!("PORTFOLIO_LOG")),
            email: EmailSettings::from_build_env(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            remote_content: false,
            log_level: log::LevelFilter::Info,
            email: EmailSettings::default(),
        }
    }
}

pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

pub fn parse_level(value: Option<&str>) -> log::LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}

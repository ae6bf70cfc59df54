//! Content API endpoints and response decoding.
//!
//! Transport lives in `wasm::http`; everything here is plain data so it can
//! be exercised off the browser.

use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::model::{PortfolioItem, SkillGroup, Testimonial};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Portfolio,
    Skills,
    Testimonials,
    Contact,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Portfolio => "/portfolio",
            Endpoint::Skills => "/skills",
            Endpoint::Testimonials => "/testimonials",
            Endpoint::Contact => "/contact",
        }
    }

    pub fn url(self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

/// Maps a finished response to its body, rejecting non-2xx statuses.
pub fn check_status(status: u16, body: String) -> Result<String, LoadError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(LoadError::Status(status))
    }
}

pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Decode(e.to_string()))
}

pub fn decode_portfolio(body: &str) -> Result<Vec<PortfolioItem>, LoadError> {
    decode(body)
}

pub fn decode_skills(body: &str) -> Result<Vec<SkillGroup>, LoadError> {
    decode(body)
}

pub fn decode_testimonials(body: &str) -> Result<Vec<Testimonial>, LoadError> {
    decode(body)
}

/// All-or-nothing combination of the two startup reads.
pub fn combine(
    portfolio: Result<Vec<PortfolioItem>, LoadError>,
    skills: Result<Vec<SkillGroup>, LoadError>,
) -> Result<(Vec<PortfolioItem>, Vec<SkillGroup>), LoadError> {
    Ok((portfolio?, skills?))
}

use reqwest::Url;
use std::env;

use crate::error::ServiceError;

pub const API_URL_VAR: &str = "DOC_ANALYSIS_API_URL";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_url: String,
}

impl ClientConfig {
    pub fn new(api_url: &str) -> Result<Self, ServiceError> {
        let invalid = |reason: String| ServiceError::InvalidUrl {
            url: api_url.to_string(),
            reason,
        };

        let parsed = Url::parse(api_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
        }

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_env() -> Result<Self, ServiceError> {
        match env::var(API_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn upload_url(&self) -> String {
        format!("{}/upload/", self.api_url)
    }

    pub fn process_url(&self) -> String {
        format!("{}/process/", self.api_url)
    }

    pub fn query_url(&self) -> String {
        format!("{}/query/", self.api_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

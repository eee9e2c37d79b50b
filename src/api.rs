use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::portfolio::PortfolioData;

/// Environment variable holding the remote portfolio endpoint.
pub const API_URL_VAR: &str = "PORTFOLIO_API_URL";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API URL not set. Please set PORTFOLIO_API_URL in your environment.")]
    Configuration,
    #[error("Failed to fetch portfolio data (status {status})")]
    Request { status: u16 },
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Couldn't decode portfolio data: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }

    /// Reads the endpoint from the process environment at call time.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var(API_URL_VAR).ok(),
        }
    }

    /// The configured endpoint, with blank values treated as unset.
    pub fn endpoint(&self) -> Result<&str, ApiError> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ApiError::Configuration)
    }
}

/// Issues a single GET against the configured endpoint and decodes the body.
///
/// No retry, timeout or caching is applied. The body is only decoded once the
/// response status is a success.
pub async fn fetch<T: DeserializeOwned>(config: &ApiConfig) -> Result<T, ApiError> {
    let url = config.endpoint()?;
    log::debug!("fetching portfolio data from {url}");

    let res = reqwest::get(url).await.map_err(ApiError::Transport)?;
    let status = res.status();
    if !status.is_success() {
        log::warn!("portfolio endpoint answered {status}");
        return Err(ApiError::Request {
            status: status.as_u16(),
        });
    }
    res.json::<T>().await.map_err(ApiError::Decode)
}

/// Fetches the raw JSON document without imposing a schema.
pub async fn fetch_json(config: &ApiConfig) -> Result<serde_json::Value, ApiError> {
    fetch(config).await
}

pub async fn fetch_portfolio(config: &ApiConfig) -> Result<PortfolioData, ApiError> {
    fetch(config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_unset() {
        let config = ApiConfig::default();
        assert!(matches!(config.endpoint(), Err(ApiError::Configuration)));
    }

    #[test]
    fn test_endpoint_blank_is_unset() {
        let config = ApiConfig::new("   ");
        assert!(matches!(config.endpoint(), Err(ApiError::Configuration)));
    }

    #[test]
    fn test_endpoint_trimmed() {
        let config = ApiConfig::new(" https://example.com/portfolio.json ");
        assert_eq!(
            config.endpoint().unwrap(),
            "https://example.com/portfolio.json"
        );
    }

    #[test]
    fn test_configuration_message() {
        let msg = ApiError::Configuration.to_string();
        assert!(msg.starts_with("API URL not set"));
        assert!(msg.contains(API_URL_VAR));
    }

    #[test]
    fn test_request_message() {
        let msg = ApiError::Request { status: 503 }.to_string();
        assert!(msg.starts_with("Failed to fetch portfolio data"));
        assert!(msg.contains("503"));
    }
}

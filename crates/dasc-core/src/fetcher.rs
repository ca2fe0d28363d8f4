use crate::config::FetchConfig;
use crate::context::OriginContext;
use crate::{Error, Result};
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

/// HTTP client for fetching page HTML from an origin
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a new fetcher with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(&FetchConfig::default())
    }

    /// Creates a new fetcher using the given timeout and user agent
    pub fn with_config(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(Error::Network)?;
        Ok(Self { client })
    }

    /// Fetches a page and returns its body as text
    pub async fn fetch_html(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await.map_err(map_request_error)?;
        let status = response.status();

        if !status.is_success() {
            // Map 404 to a clearer NotFound error
            if status == StatusCode::NOT_FOUND {
                return Err(Error::NotFound(format!("Page not found at '{url}'")));
            }

            return match response.error_for_status() {
                Ok(_) => Err(Error::Other(format!(
                    "Failed to fetch page: {url} ({status})"
                ))),
                Err(err) => Err(Error::Network(err)),
            };
        }

        let html = response.text().await.map_err(map_request_error)?;
        info!("Fetched {} bytes from {}", html.len(), url);
        Ok(html)
    }

    /// Fetches the page addressed by an origin context
    pub async fn fetch_context(&self, ctx: &OriginContext) -> Result<String> {
        self.fetch_html(&ctx.content_url()).await
    }
}

fn map_request_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout(err.to_string())
    } else {
        Error::Network(err)
    }
}

// Note: Default is not implemented as Fetcher::new() can fail.
